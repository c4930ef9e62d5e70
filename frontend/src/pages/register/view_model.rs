use super::utils::RegisterFormState;
use crate::api::{ApiClient, ApiError, RegisterRequest, UserProfile};
use crate::state::toast::use_toaster;
use crate::utils::navigation;
use leptos::*;

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RegisterFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub register_action: Action<RegisterRequest, Result<UserProfile, ApiError>>,
}

impl RegisterViewModel {
    pub fn submit(&self) {
        if self.register_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.register_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    let api = store_value(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let toaster = use_toaster();
    let form = RegisterFormState::default();
    let error = create_rw_signal(None::<ApiError>);

    let register_action = create_action(move |request: &RegisterRequest| {
        let api = api.get_value();
        let request = request.clone();
        async move { api.register(&request).await }
    });

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    toaster.success("Cuenta creada. Ya puedes ingresar.");
                    navigation::redirect_to(navigation::LOGIN_PATH);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    RegisterViewModel {
        form,
        error,
        register_action,
    }
}
