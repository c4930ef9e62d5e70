use crate::api::{ApiError, RegisterRequest};
use leptos::*;

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub document: RwSignal<String>,
    pub password: RwSignal<String>,
    pub password_confirmation: RwSignal<String>,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            document: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            password_confirmation: create_rw_signal(String::new()),
        }
    }
}

impl RegisterFormState {
    pub fn to_request(&self) -> Result<RegisterRequest, ApiError> {
        validate_registration(RegisterInput {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            document: self.document.get_untracked(),
            password: self.password.get_untracked(),
            password_confirmation: self.password_confirmation.get_untracked(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub document: String,
    pub password: String,
    pub password_confirmation: String,
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn validate_registration(input: RegisterInput) -> Result<RegisterRequest, ApiError> {
    let first_name = input.first_name.trim();
    let last_name = input.last_name.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err(ApiError::validation("Ingresa tu nombre y apellido."));
    }
    let email = input.email.trim();
    if !email.contains('@') {
        return Err(ApiError::validation("El correo electrónico no es válido."));
    }
    if input.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::validation(format!(
            "La contraseña debe tener al menos {} caracteres.",
            MIN_PASSWORD_LENGTH
        )));
    }
    if input.password != input.password_confirmation {
        return Err(ApiError::validation("Las contraseñas no coinciden."));
    }
    Ok(RegisterRequest {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        phone: optional(&input.phone),
        document: optional(&input.document),
        password: input.password,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> RegisterInput {
        RegisterInput {
            first_name: " Ana ".into(),
            last_name: "Prueba".into(),
            email: "ana@example.org".into(),
            phone: "  ".into(),
            document: "1020304050".into(),
            password: "secreto123".into(),
            password_confirmation: "secreto123".into(),
        }
    }

    #[test]
    fn valid_input_builds_request_with_optional_fields() {
        let request = validate_registration(input()).unwrap();
        assert_eq!(request.first_name, "Ana");
        assert_eq!(request.phone, None);
        assert_eq!(request.document.as_deref(), Some("1020304050"));
    }

    #[test]
    fn rejects_short_or_mismatched_passwords() {
        let short = RegisterInput {
            password: "corta".into(),
            password_confirmation: "corta".into(),
            ..input()
        };
        assert!(validate_registration(short).is_err());
        let mismatch = RegisterInput {
            password_confirmation: "otra-clave".into(),
            ..input()
        };
        assert_eq!(
            validate_registration(mismatch).unwrap_err().error,
            "Las contraseñas no coinciden."
        );
    }

    #[test]
    fn rejects_missing_names_and_bad_email() {
        let nameless = RegisterInput {
            last_name: String::new(),
            ..input()
        };
        assert!(validate_registration(nameless).is_err());
        let bad_email = RegisterInput {
            email: "ana.example.org".into(),
            ..input()
        };
        assert!(validate_registration(bad_email).is_err());
    }
}
