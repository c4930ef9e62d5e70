use chrono::NaiveDate;
use thiserror::Error;

use super::slot_time::{SlotTime, SlotTimeError};
use crate::api::{ApiError, CreateReservationRequest, Purpose};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("No se pueden reservar fechas pasadas.")]
    PastDate,
    #[error("Selecciona un propósito de la lista.")]
    MissingPurpose,
    #[error("El propósito seleccionado no es válido.")]
    UnknownPurpose,
    #[error("El número de participantes debe ser un entero positivo.")]
    InvalidParticipants,
    #[error("El número de participantes ({requested}) supera la capacidad del escenario ({capacity}).")]
    OverCapacity { requested: u32, capacity: u32 },
    #[error(transparent)]
    Slot(#[from] SlotTimeError),
}

impl From<DraftError> for ApiError {
    fn from(error: DraftError) -> Self {
        ApiError::validation(error.to_string())
    }
}

/// Form input for a reservation request, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDraft {
    pub venue_id: i64,
    /// Zero when the venue does not publish a capacity.
    pub capacity: u32,
    pub date: NaiveDate,
    pub start_time: SlotTime,
    pub purpose: String,
    pub participants: String,
    pub notes: String,
}

impl ReservationDraft {
    /// Validates the draft and builds the creation payload. The end time is
    /// always derived from the start time.
    pub fn validate(
        &self,
        purposes: &[Purpose],
        today: NaiveDate,
    ) -> Result<CreateReservationRequest, DraftError> {
        if self.date < today {
            return Err(DraftError::PastDate);
        }
        let purpose_id = parse_purpose(&self.purpose, purposes)?;
        let participants = parse_participants(&self.participants, self.capacity)?;
        let end_time = self.start_time.reservation_end()?;
        let notes = Some(self.notes.trim())
            .filter(|notes| !notes.is_empty())
            .map(str::to_string);
        Ok(CreateReservationRequest {
            venue_id: self.venue_id,
            date: self.date,
            start_time: self.start_time,
            end_time,
            purpose_id,
            participants,
            notes,
        })
    }
}

/// The purpose must be one of the ids the API offered.
pub fn parse_purpose(raw: &str, purposes: &[Purpose]) -> Result<i64, DraftError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DraftError::MissingPurpose);
    }
    let id: i64 = raw.parse().map_err(|_| DraftError::UnknownPurpose)?;
    purposes
        .iter()
        .any(|purpose| purpose.id == id)
        .then_some(id)
        .ok_or(DraftError::UnknownPurpose)
}

pub fn parse_participants(raw: &str, capacity: u32) -> Result<u32, DraftError> {
    let requested: u32 = raw
        .trim()
        .parse()
        .ok()
        .filter(|count| *count > 0)
        .ok_or(DraftError::InvalidParticipants)?;
    if capacity > 0 && requested > capacity {
        return Err(DraftError::OverCapacity {
            requested,
            capacity,
        });
    }
    Ok(requested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn purposes() -> Vec<Purpose> {
        vec![
            Purpose {
                id: 1,
                name: "Entrenamiento".into(),
            },
            Purpose {
                id: 2,
                name: "Torneo".into(),
            },
        ]
    }

    fn draft() -> ReservationDraft {
        ReservationDraft {
            venue_id: 5,
            capacity: 1000,
            date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            start_time: SlotTime::parse("14:00").unwrap(),
            purpose: "2".into(),
            participants: "22".into(),
            notes: "  ".into(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    #[test]
    fn valid_draft_builds_payload_with_two_hour_block() {
        let payload = draft().validate(&purposes(), today()).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["hora_inicio"], json!("14:00"));
        assert_eq!(value["hora_fin"], json!("16:00"));
        assert_eq!(value["num_participantes"], json!(22));
        assert_eq!(value["proposito_id"], json!(2));
        assert_eq!(value["fecha"], json!("2025-06-15"));
        assert!(payload.notes.is_none());
    }

    #[test]
    fn bad_participant_counts_are_rejected() {
        for raw in ["0", "-3", "abc", "2.5", "", "99999999999"] {
            let mut draft = draft();
            draft.participants = raw.into();
            assert_eq!(
                draft.validate(&purposes(), today()),
                Err(DraftError::InvalidParticipants),
                "{:?}",
                raw
            );
        }
        let mut draft = draft();
        draft.participants = "1001".into();
        assert_eq!(
            draft.validate(&purposes(), today()),
            Err(DraftError::OverCapacity {
                requested: 1001,
                capacity: 1000
            })
        );
        draft.participants = "1000".into();
        assert!(draft.validate(&purposes(), today()).is_ok());
    }

    #[test]
    fn unknown_capacity_has_no_upper_bound() {
        assert_eq!(parse_participants("5000", 0), Ok(5000));
    }

    #[test]
    fn purpose_must_come_from_the_catalogue() {
        let mut draft = draft();
        draft.purpose = String::new();
        assert_eq!(draft.validate(&purposes(), today()), Err(DraftError::MissingPurpose));
        draft.purpose = "7".into();
        assert_eq!(draft.validate(&purposes(), today()), Err(DraftError::UnknownPurpose));
        draft.purpose = "fútbol con amigos".into();
        assert_eq!(draft.validate(&purposes(), today()), Err(DraftError::UnknownPurpose));
    }

    #[test]
    fn late_start_and_past_dates_are_rejected() {
        let mut draft = draft();
        draft.start_time = SlotTime::parse("23:00").unwrap();
        assert!(matches!(
            draft.validate(&purposes(), today()),
            Err(DraftError::Slot(SlotTimeError::CrossesMidnight { .. }))
        ));
        let mut draft = self::draft();
        draft.date = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
        assert_eq!(draft.validate(&purposes(), today()), Err(DraftError::PastDate));
    }

    #[test]
    fn notes_are_trimmed_and_kept() {
        let mut draft = draft();
        draft.notes = "  Llevamos balones  ".into();
        let payload = draft.validate(&purposes(), today()).unwrap();
        assert_eq!(payload.notes.as_deref(), Some("Llevamos balones"));
    }

    #[test]
    fn draft_errors_become_validation_api_errors() {
        let error: ApiError = DraftError::InvalidParticipants.into();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.error, "El número de participantes debe ser un entero positivo.");
    }
}
