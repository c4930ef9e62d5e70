use chrono::NaiveDate;
use leptos::*;

use crate::{
    api::ApiError,
    domain::{reservation::ReservationDraft, slot_time::SlotTime},
    utils::time,
};

pub const RESERVATION_PATH: &str = "/reservar";
pub const MY_RESERVATIONS_PATH: &str = "/mis-reservas";
/// Pause between the confirmation and the move to the personal list.
pub const REDIRECT_DELAY_MS: u32 = 1_500;

/// `/reservar` for a chosen slot. Values are dates, ids and `HH:MM`, all
/// safe inside a query string as-is.
pub fn reservation_path(venue_id: i64, date: NaiveDate, time: SlotTime) -> String {
    format!(
        "{}?escenario={}&fecha={}&hora={}",
        RESERVATION_PATH,
        venue_id,
        time::format_iso(date),
        time
    )
}

/// The slot carried in the `/reservar` query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationQuery {
    pub venue_id: i64,
    pub date: NaiveDate,
    pub time: SlotTime,
}

impl ReservationQuery {
    pub fn parse(
        venue: Option<&str>,
        date: Option<&str>,
        time: Option<&str>,
    ) -> Result<Self, ApiError> {
        let venue_id = venue
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|id| *id > 0)
            .ok_or_else(|| ApiError::validation("Falta el escenario a reservar."))?;
        let date = date
            .and_then(time::parse_iso)
            .ok_or_else(|| ApiError::validation("La fecha seleccionada no es válida."))?;
        let time = time
            .ok_or_else(|| ApiError::validation("Falta el horario seleccionado."))
            .and_then(|raw| {
                SlotTime::parse(raw).map_err(|err| ApiError::validation(err.to_string()))
            })?;
        Ok(Self {
            venue_id,
            date,
            time,
        })
    }
}

#[derive(Clone, Copy)]
pub struct ReservationFormState {
    pub purpose: RwSignal<String>,
    pub participants: RwSignal<String>,
    pub notes: RwSignal<String>,
}

impl Default for ReservationFormState {
    fn default() -> Self {
        Self {
            purpose: create_rw_signal(String::new()),
            participants: create_rw_signal(String::new()),
            notes: create_rw_signal(String::new()),
        }
    }
}

impl ReservationFormState {
    /// Combines the typed fields with the chosen slot. Validation of the
    /// fields themselves happens in [`ReservationDraft::validate`].
    pub fn to_draft(
        &self,
        slot: Option<(i64, NaiveDate, SlotTime)>,
        capacity: u32,
    ) -> Result<ReservationDraft, ApiError> {
        let (venue_id, date, start_time) =
            slot.ok_or_else(|| ApiError::validation("Selecciona una fecha y un horario."))?;
        Ok(ReservationDraft {
            venue_id,
            capacity,
            date,
            start_time,
            purpose: self.purpose.get_untracked(),
            participants: self.participants.get_untracked(),
            notes: self.notes.get_untracked(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reservation_path_round_trips_through_the_query_parser() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let time = SlotTime::parse("14:00").unwrap();
        let path = reservation_path(5, date, time);
        assert_eq!(path, "/reservar?escenario=5&fecha=2025-06-15&hora=14:00");

        let parsed =
            ReservationQuery::parse(Some("5"), Some("2025-06-15"), Some("14:00")).unwrap();
        assert_eq!(
            parsed,
            ReservationQuery {
                venue_id: 5,
                date,
                time
            }
        );
    }

    #[test]
    fn query_rejects_missing_or_malformed_parts() {
        assert!(ReservationQuery::parse(None, Some("2025-06-15"), Some("14:00")).is_err());
        assert!(ReservationQuery::parse(Some("x"), Some("2025-06-15"), Some("14:00")).is_err());
        assert!(ReservationQuery::parse(Some("5"), Some("15/06/2025"), Some("14:00")).is_err());
        assert!(ReservationQuery::parse(Some("5"), Some("2025-06-15"), Some("25:00")).is_err());
        assert!(ReservationQuery::parse(Some("5"), Some("2025-06-15"), None).is_err());
    }
}
