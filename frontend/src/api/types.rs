use chrono::NaiveDate;
use leptos::{IntoView, View};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{slot_time::SlotTime, status::RequestStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "documento", skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(alias = "usuario")]
    pub user: UserProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido", default)]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "rol_id")]
    pub role_id: i64,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        match self.last_name.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}

/// Admin-side user create/update payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "rol_id")]
    pub role_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VenueState {
    #[default]
    #[serde(rename = "disponible")]
    Available,
    #[serde(rename = "mantenimiento")]
    Maintenance,
    #[serde(rename = "inactivo")]
    Inactive,
    #[serde(other)]
    Unknown,
}

impl VenueState {
    pub fn as_param(&self) -> &'static str {
        match self {
            VenueState::Available => "disponible",
            VenueState::Maintenance => "mantenimiento",
            VenueState::Inactive => "inactivo",
            VenueState::Unknown => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VenueState::Available => "Disponible",
            VenueState::Maintenance => "En mantenimiento",
            VenueState::Inactive => "Inactivo",
            VenueState::Unknown => "Desconocido",
        }
    }

    pub fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "disponible" => Some(VenueState::Available),
            "mantenimiento" => Some(VenueState::Maintenance),
            "inactivo" => Some(VenueState::Inactive),
            _ => None,
        }
    }
}

/// Reference to a catalogue entry that may arrive as a bare name or as an
/// `{ id, nombre }` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedRef {
    pub id: Option<i64>,
    pub name: String,
}

impl<'de> Deserialize<'de> for NamedRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Name(String),
            Object {
                #[serde(default)]
                id: Option<i64>,
                #[serde(default)]
                url: Option<String>,
                #[serde(default)]
                ruta: Option<String>,
                #[serde(default)]
                nombre: Option<String>,
                #[serde(default)]
                name: Option<String>,
            },
        }
        match Raw::deserialize(deserializer)? {
            Raw::Name(name) => Ok(NamedRef { id: None, name }),
            // Images carry a location, catalogue entries a name.
            Raw::Object {
                id,
                url,
                ruta,
                nombre,
                name,
            } => url
                .or(ruta)
                .or(nombre)
                .or(name)
                .map(|name| NamedRef { id, name })
                .ok_or_else(|| serde::de::Error::custom("reference without name or url")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    #[serde(rename = "capacidad", default)]
    pub capacity: u32,
    #[serde(rename = "dimensiones", default)]
    pub dimensions: Option<String>,
    #[serde(rename = "estado", default)]
    pub state: VenueState,
    #[serde(rename = "localidad_id", default)]
    pub locality_id: Option<i64>,
    #[serde(rename = "localidad", default)]
    pub locality: Option<NamedRef>,
    #[serde(rename = "deporte_principal_id", default)]
    pub primary_sport_id: Option<i64>,
    #[serde(rename = "deporte_principal", default)]
    pub primary_sport: Option<NamedRef>,
    #[serde(rename = "amenidades", default)]
    pub amenities: Vec<NamedRef>,
    #[serde(rename = "imagenes", default)]
    pub images: Vec<NamedRef>,
}

/// Admin-side venue create/update payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenuePayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "capacidad")]
    pub capacity: u32,
    #[serde(rename = "dimensiones")]
    pub dimensions: String,
    #[serde(rename = "estado")]
    pub state: VenueState,
    #[serde(rename = "localidad_id", skip_serializing_if = "Option::is_none")]
    pub locality_id: Option<i64>,
    #[serde(rename = "deporte_principal_id", skip_serializing_if = "Option::is_none")]
    pub primary_sport_id: Option<i64>,
    #[serde(rename = "imagenes", default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueFilter {
    pub page: Option<u32>,
    pub search: Option<String>,
    pub state: Option<VenueState>,
    pub locality_id: Option<i64>,
}

impl VenueFilter {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        if let Some(state) = self.state.filter(|s| *s != VenueState::Unknown) {
            params.push(("estado", state.as_param().to_string()));
        }
        if let Some(locality) = self.locality_id {
            params.push(("localidad_id", locality.to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purpose {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStateOption {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl RequestStateOption {
    pub fn status(&self) -> Option<RequestStatus> {
        RequestStatus::parse(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateReservationRequest {
    #[serde(rename = "escenario_id")]
    pub venue_id: i64,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "hora_inicio")]
    pub start_time: SlotTime,
    #[serde(rename = "hora_fin")]
    pub end_time: SlotTime,
    #[serde(rename = "proposito_id")]
    pub purpose_id: i64,
    #[serde(rename = "num_participantes")]
    pub participants: u32,
    #[serde(rename = "observaciones", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeStatusRequest {
    #[serde(rename = "estado_id")]
    pub state_id: i64,
    #[serde(rename = "comentario", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    #[serde(rename = "estado_anterior", default)]
    pub previous: Option<RequestStatus>,
    #[serde(rename = "estado_nuevo")]
    pub next: RequestStatus,
    #[serde(rename = "usuario", default)]
    pub actor: Option<NamedRef>,
    #[serde(rename = "comentario", default)]
    pub note: Option<String>,
    #[serde(rename = "fecha", alias = "created_at", default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub id: i64,
    #[serde(rename = "escenario_id", default)]
    pub venue_id: Option<i64>,
    #[serde(rename = "escenario", default)]
    pub venue: Option<NamedRef>,
    #[serde(rename = "usuario", default)]
    pub requester: Option<NamedRef>,
    #[serde(rename = "fecha", deserialize_with = "lenient_date")]
    pub date: NaiveDate,
    #[serde(rename = "hora_inicio")]
    pub start_time: SlotTime,
    #[serde(rename = "hora_fin")]
    pub end_time: SlotTime,
    #[serde(rename = "proposito", default)]
    pub purpose: Option<NamedRef>,
    #[serde(rename = "num_participantes", default)]
    pub participants: u32,
    #[serde(rename = "observaciones", default)]
    pub notes: Option<String>,
    #[serde(rename = "estado")]
    pub status: RequestStatus,
    #[serde(rename = "historial", default)]
    pub history: Vec<StatusHistoryEntry>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ReservationRequest {
    pub fn venue_label(&self) -> String {
        match (&self.venue, self.venue_id) {
            (Some(venue), _) => venue.name.clone(),
            (None, Some(id)) => format!("Escenario #{}", id),
            (None, None) => "Escenario".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub page: Option<u32>,
    pub status: Option<RequestStatus>,
    pub search: Option<String>,
}

impl RequestFilter {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(status) = self.status {
            params.push(("estado", status.wire_name().to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    #[serde(alias = "ruta", alias = "path")]
    pub url: String,
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(alias = "current_page", alias = "pagina", default = "first_page")]
    pub page: u32,
    #[serde(alias = "perPage", default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(alias = "last_page", alias = "totalPages", default = "first_page")]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

impl Pagination {
    pub fn single(len: usize) -> Self {
        Self {
            page: 1,
            per_page: len as u32,
            total: len as u64,
            total_pages: 1,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::single(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Accepts `YYYY-MM-DD` and full timestamps, keeping only the calendar date
/// as written (no time zone conversion).
fn lenient_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
}


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

pub const CONNECTION_ERROR_MESSAGE: &str =
    "No se pudo conectar con el servidor. Verifica tu conexión e inténtalo de nuevo.";
pub const GENERIC_ERROR_MESSAGE: &str = "Ocurrió un error al procesar la solicitud.";

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn connection() -> Self {
        Self::with_code(CONNECTION_ERROR_MESSAGE, "CONNECTION_ERROR")
    }

    pub fn timeout() -> Self {
        Self::with_code(
            "El servidor tardó demasiado en responder. Inténtalo de nuevo.",
            "TIMEOUT",
        )
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "NOT_FOUND")
    }

    pub fn unauthorized() -> Self {
        Self::with_code(
            "Tu sesión no es válida. Inicia sesión nuevamente.",
            "UNAUTHORIZED",
        )
    }

    pub fn is_not_found(&self) -> bool {
        self.code == "NOT_FOUND"
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    pub fn is_connection_failure(&self) -> bool {
        matches!(self.code.as_str(), "CONNECTION_ERROR" | "TIMEOUT")
    }
}
