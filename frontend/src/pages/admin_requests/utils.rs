use crate::{
    api::{ApiError, ChangeStatusRequest, RequestStateOption},
    domain::status::RequestStatus,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct StatusChangeFormState {
    pub state_id: RwSignal<String>,
    pub note: RwSignal<String>,
}

impl Default for StatusChangeFormState {
    fn default() -> Self {
        Self {
            state_id: create_rw_signal(String::new()),
            note: create_rw_signal(String::new()),
        }
    }
}

impl StatusChangeFormState {
    pub fn to_request(
        &self,
        options: &[RequestStateOption],
        current: RequestStatus,
    ) -> Result<ChangeStatusRequest, ApiError> {
        validate_status_change(
            &self.state_id.get_untracked(),
            &self.note.get_untracked(),
            options,
            current,
        )
    }

    pub fn reset(&self) {
        self.state_id.set(String::new());
        self.note.set(String::new());
    }
}

/// The target must be one of the offered states and differ from the
/// current one; the note is optional.
pub fn validate_status_change(
    raw_state: &str,
    note: &str,
    options: &[RequestStateOption],
    current: RequestStatus,
) -> Result<ChangeStatusRequest, ApiError> {
    let state_id: i64 = raw_state
        .trim()
        .parse()
        .map_err(|_| ApiError::validation("Selecciona el nuevo estado."))?;
    let option = options
        .iter()
        .find(|option| option.id == state_id)
        .ok_or_else(|| ApiError::validation("El estado seleccionado no es válido."))?;
    if option.status() == Some(current) {
        return Err(ApiError::validation("La solicitud ya está en ese estado."));
    }
    let note = note.trim();
    Ok(ChangeStatusRequest {
        state_id,
        note: (!note.is_empty()).then(|| note.to_string()),
    })
}

pub fn state_select_options(options: &[RequestStateOption]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|option| {
            let label = option
                .status()
                .map(|status| status.label().to_string())
                .unwrap_or_else(|| option.name.clone());
            (option.id.to_string(), label)
        })
        .collect()
}
