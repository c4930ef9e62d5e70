#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{
        NamedRef, Purpose, ReservationRequest, StatusHistoryEntry, UserProfile, Venue, VenueState,
    };
    use crate::domain::{slot_time::SlotTime, status::RequestStatus};
    use chrono::NaiveDate;
    use crate::state::session::{SessionPhase, SessionStore};
    use leptos::*;

    fn user(id: i64, first_name: &str, email: &str, role_id: i64) -> UserProfile {
        UserProfile {
            id,
            first_name: first_name.into(),
            last_name: Some("Prueba".into()),
            email: email.into(),
            phone: None,
            role_id,
        }
    }

    pub fn admin_user() -> UserProfile {
        user(1, "Admin", "admin@example.org", 1)
    }

    pub fn supervisor_user() -> UserProfile {
        user(2, "Sofia", "supervisor@example.org", 2)
    }

    pub fn citizen_user() -> UserProfile {
        user(7, "Ana", "ana@example.org", 3)
    }

    pub fn provide_session(phase: SessionPhase) -> SessionStore {
        let store = SessionStore::new(phase);
        provide_context(store);
        store
    }

    pub fn sample_venue() -> Venue {
        Venue {
            id: 5,
            name: "Coliseo Central".into(),
            description: Some("Cancha cubierta multiuso".into()),
            address: Some("Calle 10 # 4-21".into()),
            capacity: 40,
            dimensions: Some("40 x 20 m".into()),
            state: VenueState::Available,
            locality_id: Some(3),
            locality: Some(NamedRef {
                id: Some(3),
                name: "Centro".into(),
            }),
            primary_sport_id: None,
            primary_sport: None,
            amenities: Vec::new(),
            images: Vec::new(),
        }
    }

    pub fn purposes() -> Vec<Purpose> {
        vec![
            Purpose {
                id: 1,
                name: "Entrenamiento".into(),
            },
            Purpose {
                id: 2,
                name: "Partido amistoso".into(),
            },
        ]
    }

    pub fn sample_request() -> ReservationRequest {
        ReservationRequest {
            id: 31,
            venue_id: Some(5),
            venue: Some(NamedRef {
                id: Some(5),
                name: "Coliseo Central".into(),
            }),
            requester: Some(NamedRef {
                id: Some(7),
                name: "Ana Prueba".into(),
            }),
            date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            start_time: SlotTime::parse("14:00").unwrap(),
            end_time: SlotTime::parse("16:00").unwrap(),
            purpose: Some(NamedRef {
                id: Some(2),
                name: "Partido amistoso".into(),
            }),
            participants: 22,
            notes: None,
            status: RequestStatus::Approved,
            history: vec![StatusHistoryEntry {
                previous: Some(RequestStatus::Pending),
                next: RequestStatus::Approved,
                actor: Some(NamedRef {
                    id: Some(1),
                    name: "Admin Prueba".into(),
                }),
                note: Some("Documentos completos".into()),
                timestamp: Some("2025-06-02T09:00:00Z".into()),
            }],
            created_at: Some("2025-06-01T10:05:00Z".into()),
        }
    }
}
