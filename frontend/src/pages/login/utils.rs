use crate::api::{ApiError, LoginRequest};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        validate_credentials(&self.email.get_untracked(), &self.password.get_untracked())
    }

    pub fn clear_password(&self) {
        self.password.set(String::new());
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Ingresa tu correo electrónico."));
    }
    if !email.contains('@') {
        return Err(ApiError::validation("El correo electrónico no es válido."));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Ingresa tu contraseña."));
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}
