pub use crate::pages::admin::utils::EditorMode;

use crate::{
    api::{ApiError, UserPayload, UserProfile},
    pages::register::utils::MIN_PASSWORD_LENGTH,
    state::session::Role,
};
use leptos::*;
use serde_json::json;

pub fn role_options() -> Vec<(String, String)> {
    [Role::Admin, Role::Supervisor, Role::Citizen]
        .iter()
        .map(|role| (role.id().to_string(), role.label().to_string()))
        .collect()
}

pub fn editor_title(mode: EditorMode) -> &'static str {
    if mode.is_edit() {
        "Editar usuario"
    } else {
        "Nuevo usuario"
    }
}

#[derive(Clone, Copy)]
pub struct UserFormState {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub role_id: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for UserFormState {
    fn default() -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            role_id: create_rw_signal(Role::Citizen.id().to_string()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl UserFormState {
    pub fn load(&self, user: &UserProfile) {
        self.first_name.set(user.first_name.clone());
        self.last_name.set(user.last_name.clone().unwrap_or_default());
        self.email.set(user.email.clone());
        self.phone.set(user.phone.clone().unwrap_or_default());
        self.role_id.set(Role::from_id(user.role_id).id().to_string());
        self.password.set(String::new());
    }

    pub fn reset(&self) {
        self.first_name.set(String::new());
        self.last_name.set(String::new());
        self.email.set(String::new());
        self.phone.set(String::new());
        self.role_id.set(Role::Citizen.id().to_string());
        self.password.set(String::new());
    }

    pub fn to_payload(&self, mode: EditorMode) -> Result<UserPayload, ApiError> {
        validate_user(
            UserInput {
                first_name: self.first_name.get_untracked(),
                last_name: self.last_name.get_untracked(),
                email: self.email.get_untracked(),
                phone: self.phone.get_untracked(),
                role_id: self.role_id.get_untracked(),
                password: self.password.get_untracked(),
            },
            mode,
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role_id: String,
    pub password: String,
}

/// A new user needs a password; when editing, a blank one keeps the current.
pub fn validate_user(input: UserInput, mode: EditorMode) -> Result<UserPayload, ApiError> {
    let mut problems = Vec::new();
    let first_name = input.first_name.trim();
    if first_name.is_empty() {
        problems.push("El nombre es obligatorio.".to_string());
    }
    let email = input.email.trim();
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        problems.push("Ingresa un correo electrónico válido.".to_string());
    }
    let role_id = input
        .role_id
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|id| (Role::ADMIN_ID..=Role::CITIZEN_ID).contains(id));
    if role_id.is_none() {
        problems.push("Selecciona un rol.".to_string());
    }
    let password = input.password;
    let password = match (password.trim().is_empty(), mode.is_edit()) {
        (true, true) => None,
        (true, false) => {
            problems.push("La contraseña es obligatoria.".to_string());
            None
        }
        (false, _) if password.chars().count() < MIN_PASSWORD_LENGTH => {
            problems.push(format!(
                "La contraseña debe tener al menos {} caracteres.",
                MIN_PASSWORD_LENGTH
            ));
            None
        }
        (false, _) => Some(password),
    };
    if !problems.is_empty() {
        return Err(ApiError {
            details: Some(json!(problems)),
            ..ApiError::validation("Revisa los datos del usuario.")
        });
    }
    let phone = input.phone.trim();
    Ok(UserPayload {
        first_name: first_name.to_string(),
        last_name: input.last_name.trim().to_string(),
        email: email.to_string(),
        phone: (!phone.is_empty()).then(|| phone.to_string()),
        role_id: role_id.unwrap_or_else(|| Role::Citizen.id()),
        password,
    })
}
