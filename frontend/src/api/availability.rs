//! Open days and open start times for a venue.
//!
//! Both calls are read-only. Past dates never come out of here: open days
//! before today are dropped and times are not fetched for past dates.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use serde_json::Value;

use super::{client::ApiClient, envelope, types::ApiError};
use crate::{
    domain::slot_time::{normalize_slots, SlotTime},
    utils::time,
};

/// Default forward window for open-day queries.
pub const OPEN_DAYS_WINDOW_DAYS: i64 = 30;

pub fn default_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today, today + Duration::days(OPEN_DAYS_WINDOW_DAYS))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DayEntry {
    Date(String),
    Detailed {
        #[serde(alias = "date")]
        fecha: String,
        #[serde(default, alias = "available")]
        disponible: Option<bool>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TimeEntry {
    Time(String),
    Detailed {
        #[serde(alias = "hora", alias = "start_time")]
        hora_inicio: String,
        #[serde(default, alias = "available")]
        disponible: Option<bool>,
    },
}

/// Array under `keys`, else wherever the envelope places the list.
fn entries<T: for<'de> Deserialize<'de>>(payload: Value, keys: &[&str]) -> Vec<T> {
    let listed = keys
        .iter()
        .find_map(|key| payload.get(*key).filter(|value| value.is_array()).cloned());
    envelope::normalize_list(listed.unwrap_or(payload)).unwrap_or_default()
}

fn open_days_from(raw: Vec<DayEntry>, today: NaiveDate) -> BTreeSet<NaiveDate> {
    raw.into_iter()
        .filter_map(|entry| match entry {
            DayEntry::Date(date) => Some(date),
            DayEntry::Detailed { fecha, disponible } => disponible.unwrap_or(true).then_some(fecha),
        })
        .filter_map(|raw| {
            let parsed = raw.get(..10).and_then(time::parse_iso);
            if parsed.is_none() {
                log::warn!("dropping malformed open day: {}", raw);
            }
            parsed
        })
        .filter(|date| *date >= today)
        .collect()
}

fn open_times_from(raw: Vec<TimeEntry>) -> Vec<SlotTime> {
    normalize_slots(raw.into_iter().filter_map(|entry| match entry {
        TimeEntry::Time(time) => Some(time),
        TimeEntry::Detailed {
            hora_inicio,
            disponible,
        } => disponible.unwrap_or(true).then_some(hora_inicio),
    }))
}

impl ApiClient {
    /// Dates in `[start, end]` with at least one open slot. An empty set is
    /// a valid answer; only a failed call is an error.
    pub async fn get_open_days(
        &self,
        venue_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeSet<NaiveDate>, ApiError> {
        let today = time::today();
        let start = start.max(today);
        if end < start {
            return Ok(BTreeSet::new());
        }
        let url = self
            .endpoint(&format!("/escenarios/{}/disponibilidad", venue_id))
            .await;
        let params = [
            ("fecha_inicio", time::format_iso(start)),
            ("fecha_fin", time::format_iso(end)),
        ];
        let response = self.send(|client| client.get(url).query(&params)).await?;
        let payload: Value = self.map_json_response(response).await?;
        let days = open_days_from(entries(payload, &["dias", "fechas", "dias_disponibles"]), today);
        log::debug!("venue {}: {} open days", venue_id, days.len());
        Ok(days)
    }

    /// Open days in the default window starting today.
    pub async fn get_open_days_ahead(&self, venue_id: i64) -> Result<BTreeSet<NaiveDate>, ApiError> {
        let (start, end) = default_window(time::today());
        self.get_open_days(venue_id, start, end).await
    }

    /// Start times still open on `date`, sorted. Empty means fully booked.
    pub async fn get_open_times(
        &self,
        venue_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<SlotTime>, ApiError> {
        if date < time::today() {
            log::debug!("not fetching times for past date {}", date);
            return Ok(Vec::new());
        }
        let url = self
            .endpoint(&format!("/escenarios/{}/disponibilidad/horarios", venue_id))
            .await;
        let params = [("fecha", time::format_iso(date))];
        let response = self.send(|client| client.get(url).query(&params)).await?;
        let payload: Value = self.map_json_response(response).await?;
        Ok(open_times_from(entries(
            payload,
            &["horarios", "horarios_disponibles", "slots"],
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn open_days_accept_strings_and_objects_and_drop_past() {
        let raw: Vec<DayEntry> = serde_json::from_value(json!([
            "2025-06-14",
            "2025-06-15",
            { "fecha": "2025-06-16T00:00:00Z", "disponible": true },
            { "fecha": "2025-06-17", "disponible": false },
            "mañana"
        ]))
        .unwrap();
        let days = open_days_from(raw, date(2025, 6, 15));
        assert_eq!(
            days.into_iter().collect::<Vec<_>>(),
            vec![date(2025, 6, 15), date(2025, 6, 16)]
        );
    }

    #[test]
    fn open_times_are_sorted_unique_and_skip_taken_slots() {
        let raw: Vec<TimeEntry> = serde_json::from_value(json!([
            "14:00",
            { "hora_inicio": "10:00:00", "disponible": true },
            { "hora_inicio": "12:00", "disponible": false },
            "14:00"
        ]))
        .unwrap();
        let times: Vec<String> = open_times_from(raw).iter().map(|t| t.to_string()).collect();
        assert_eq!(times, vec!["10:00", "14:00"]);
    }

    #[test]
    fn entries_look_under_named_keys_then_the_envelope() {
        let named: Vec<TimeEntry> = entries(json!({ "fecha": "2025-06-15", "horarios": ["08:00"] }), &["horarios"]);
        assert_eq!(named.len(), 1);
        let enveloped: Vec<TimeEntry> = entries(json!({ "items": ["08:00", "10:00"] }), &["horarios"]);
        assert_eq!(enveloped.len(), 2);
        let nothing: Vec<TimeEntry> = entries(json!({ "mensaje": "sin cupos" }), &["horarios"]);
        assert!(nothing.is_empty());
    }

    #[test]
    fn default_window_spans_thirty_days() {
        let (start, end) = default_window(date(2025, 6, 15));
        assert_eq!(start, date(2025, 6, 15));
        assert_eq!(end, date(2025, 7, 15));
    }
}
