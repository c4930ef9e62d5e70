//! Reservation request status.
//!
//! The client never moves a request between states on its own: transitions
//! are requested from the API by an administrator or supervisor and the
//! status shown is always the one the server returned.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestStatus {
    Pending,
    InProcess,
    Approved,
    Rejected,
    Completed,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 5] = [
        RequestStatus::Pending,
        RequestStatus::InProcess,
        RequestStatus::Approved,
        RequestStatus::Rejected,
        RequestStatus::Completed,
    ];

    /// Folds the spellings the API has used for each state.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "pendiente" | "creada" | "creado" | "pending" | "created" => {
                Some(RequestStatus::Pending)
            }
            "en_proceso" | "en_revision" | "in_process" | "in_progress" => {
                Some(RequestStatus::InProcess)
            }
            "aprobada" | "aprobado" | "approved" => Some(RequestStatus::Approved),
            "rechazada" | "rechazado" | "rejected" => Some(RequestStatus::Rejected),
            "completada" | "completado" | "finalizada" | "completed" => {
                Some(RequestStatus::Completed)
            }
            _ => None,
        }
    }

    /// Name used in query strings and request bodies.
    pub fn wire_name(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pendiente",
            RequestStatus::InProcess => "en_proceso",
            RequestStatus::Approved => "aprobada",
            RequestStatus::Rejected => "rechazada",
            RequestStatus::Completed => "completada",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pendiente",
            RequestStatus::InProcess => "En proceso",
            RequestStatus::Approved => "Aprobada",
            RequestStatus::Rejected => "Rechazada",
            RequestStatus::Completed => "Completada",
        }
    }

    /// Default display color when the API does not send one.
    pub fn color(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "#f0ad4e",
            RequestStatus::InProcess => "#5bc0de",
            RequestStatus::Approved => "#5cb85c",
            RequestStatus::Rejected => "#d9534f",
            RequestStatus::Completed => "#6c757d",
        }
    }

    /// States from which an administrator may still act.
    pub fn is_open(&self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::InProcess)
    }
}

impl Serialize for RequestStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Name(String),
            Object {
                #[serde(alias = "name", alias = "slug")]
                nombre: String,
            },
        }
        let name = match Raw::deserialize(deserializer)? {
            Raw::Name(name) => name,
            Raw::Object { nombre } => nombre,
        };
        RequestStatus::parse(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown request status: {}", name)))
    }
}
