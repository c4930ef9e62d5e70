use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Every reservation lasts exactly this long.
pub const RESERVATION_DURATION_MINUTES: u16 = 120;

const MINUTES_PER_DAY: u16 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotTimeError {
    #[error("hora inválida: {0} (se espera HH:MM)")]
    Malformed(String),
    #[error("la reserva de las {start} terminaría después de medianoche")]
    CrossesMidnight { start: SlotTime },
}

/// Wall-clock start time of a slot, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime {
    minutes: u16,
}

impl SlotTime {
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Accepts `HH:MM` and `HH:MM:SS` (seconds are dropped).
    pub fn parse(raw: &str) -> Result<Self, SlotTimeError> {
        let malformed = || SlotTimeError::Malformed(raw.to_string());
        let mut parts = raw.trim().split(':');
        let hour = parts.next().ok_or_else(malformed)?;
        let minute = parts.next().ok_or_else(malformed)?;
        if let Some(seconds) = parts.next() {
            if seconds.len() != 2 || seconds.parse::<u16>().map_or(true, |s| s >= 60) {
                return Err(malformed());
            }
        }
        if parts.next().is_some() || hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(malformed());
        }
        let hour = hour.parse::<u16>().map_err(|_| malformed())?;
        let minute = minute.parse::<u16>().map_err(|_| malformed())?;
        Self::from_hm(hour, minute).ok_or_else(malformed)
    }

    pub fn hour(&self) -> u16 {
        self.minutes / 60
    }

    pub fn minute(&self) -> u16 {
        self.minutes % 60
    }

    /// End of a reservation starting at `self`. Reservations belong to a
    /// single calendar date, so a block that would run past midnight is
    /// rejected instead of wrapping.
    pub fn reservation_end(&self) -> Result<SlotTime, SlotTimeError> {
        let end = self.minutes + RESERVATION_DURATION_MINUTES;
        if end >= MINUTES_PER_DAY {
            return Err(SlotTimeError::CrossesMidnight { start: *self });
        }
        Ok(SlotTime { minutes: end })
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for SlotTime {
    type Err = SlotTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for SlotTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        SlotTime::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Parses, sorts and de-duplicates a list of start times. Entries that are
/// not valid `HH:MM` are dropped.
pub fn normalize_slots<I, S>(raw: I) -> Vec<SlotTime>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut slots: Vec<SlotTime> = raw
        .into_iter()
        .filter_map(|value| match SlotTime::parse(value.as_ref()) {
            Ok(slot) => Some(slot),
            Err(err) => {
                log::warn!("dropping availability slot: {}", err);
                None
            }
        })
        .collect();
    slots.sort();
    slots.dedup();
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(raw: &str) -> SlotTime {
        SlotTime::parse(raw).unwrap()
    }

    #[test]
    fn parses_and_formats_hh_mm() {
        assert_eq!(t("14:00").to_string(), "14:00");
        assert_eq!(t("7:05").to_string(), "07:05");
        assert_eq!(t("09:30:00").to_string(), "09:30");
    }

    #[test]
    fn rejects_malformed_times() {
        for raw in ["", "14", "24:00", "12:60", "12:5", "ab:cd", "10:00:99", "1:2:3:4"] {
            assert!(SlotTime::parse(raw).is_err(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn end_time_is_two_hours_after_start() {
        assert_eq!(t("14:00").reservation_end().unwrap(), t("16:00"));
        assert_eq!(t("08:30").reservation_end().unwrap(), t("10:30"));
        assert_eq!(t("21:59").reservation_end().unwrap(), t("23:59"));
    }

    #[test]
    fn end_time_crossing_midnight_is_rejected() {
        assert_eq!(
            t("23:00").reservation_end(),
            Err(SlotTimeError::CrossesMidnight { start: t("23:00") })
        );
        assert!(t("22:00").reservation_end().is_err());
    }

    #[test]
    fn normalize_slots_sorts_and_deduplicates() {
        let slots = normalize_slots(["14:00", "10:00", "14:00:00", "bogus"]);
        assert_eq!(slots, vec![t("10:00"), t("14:00")]);
    }

    #[test]
    fn serde_uses_hh_mm_strings() {
        let value = serde_json::to_value(t("06:00")).unwrap();
        assert_eq!(value, serde_json::json!("06:00"));
        let parsed: SlotTime = serde_json::from_value(serde_json::json!("18:30:00")).unwrap();
        assert_eq!(parsed, t("18:30"));
    }
}
