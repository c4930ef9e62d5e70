use super::utils::StatusChangeFormState;
use crate::{
    api::{ApiClient, ApiError, ChangeStatusRequest, RequestStateOption, ReservationRequest},
    domain::status::RequestStatus,
    pages::my_requests::view_model::use_request_detail,
    state::toast::{use_toaster, Toaster},
};
use leptos::*;

#[derive(Clone)]
pub struct StatusChange {
    pub request_id: i64,
    pub payload: ChangeStatusRequest,
}

#[derive(Clone, Copy)]
pub struct AdminRequestDetailViewModel {
    pub request_id: i64,
    pub request: Resource<(i64, u32), Result<ReservationRequest, ApiError>>,
    pub states: Resource<(), Result<Vec<RequestStateOption>, ApiError>>,
    pub form: StatusChangeFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub change_action: Action<StatusChange, Result<(), ApiError>>,
}

impl AdminRequestDetailViewModel {
    pub fn state_options(&self) -> Signal<Vec<RequestStateOption>> {
        let states = self.states;
        Signal::derive(move || {
            states
                .get()
                .and_then(|result| result.ok())
                .unwrap_or_default()
        })
    }

    pub fn submit(&self, current: RequestStatus) {
        if self.change_action.pending().get_untracked() {
            return;
        }
        let options = self.state_options().get_untracked();
        match self.form.to_request(&options, current) {
            Ok(payload) => {
                self.error.set(None);
                self.change_action.dispatch(StatusChange {
                    request_id: self.request_id,
                    payload,
                });
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn apply_status_change_result(
    result: Option<Result<(), ApiError>>,
    form: StatusChangeFormState,
    error: RwSignal<Option<ApiError>>,
    reload: RwSignal<u32>,
    toaster: Toaster,
) {
    if let Some(result) = result {
        match result {
            Ok(()) => {
                toaster.success("Estado de la solicitud actualizado.");
                form.reset();
                error.set(None);
                reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => {
                toaster.api_error(&err);
                error.set(Some(err));
            }
        }
    }
}

pub fn use_admin_request_detail_view_model(request_id: i64) -> AdminRequestDetailViewModel {
    let api = store_value(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let toaster = use_toaster();
    let (reload, request) = use_request_detail(request_id);
    let states = create_resource(
        || (),
        move |_| {
            let api = api.get_value();
            async move { api.request_states().await }
        },
    );
    let form = StatusChangeFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let change_action = create_action(move |change: &StatusChange| {
        let api = api.get_value();
        let change = change.clone();
        async move {
            api.change_request_status(change.request_id, &change.payload)
                .await
        }
    });

    create_effect(move |_| {
        apply_status_change_result(change_action.value().get(), form, error, reload, toaster);
    });

    AdminRequestDetailViewModel {
        request_id,
        request,
        states,
        form,
        error,
        change_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::toast::ToastKind;
    use crate::test_support::ssr::with_runtime;
    use serde_json::json;

    #[tokio::test]
    async fn change_status_sends_state_and_note() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/requests/31/cambiar-estado");
            then.status(200)
                .json_body(json!({ "success": true, "message": "Estado actualizado" }));
        });
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let change = ChangeStatusRequest {
            state_id: 3,
            note: Some("Documentos completos".into()),
        };
        api.change_request_status(31, &change).await.unwrap();
        let body = server.last_body("/api/requests/31/cambiar-estado").unwrap();
        assert_eq!(body, json!({ "estado_id": 3, "comentario": "Documentos completos" }));
    }

    #[test]
    fn successful_change_resets_form_and_reloads() {
        with_runtime(|| {
            let form = StatusChangeFormState::default();
            form.state_id.set("3".into());
            let error = create_rw_signal(None);
            let reload = create_rw_signal(0u32);
            let toaster = Toaster::new();
            apply_status_change_result(Some(Ok(())), form, error, reload, toaster);
            assert!(form.state_id.get().is_empty());
            assert_eq!(reload.get(), 1);
            let toasts = toaster.toasts().get();
            assert_eq!(toasts[0].kind, ToastKind::Success);
            assert_eq!(toasts[0].message, "Estado de la solicitud actualizado.");
        });
    }

    #[test]
    fn submit_without_state_is_rejected_locally() {
        with_runtime(|| {
            let vm = use_admin_request_detail_view_model(31);
            vm.submit(RequestStatus::Pending);
            assert!(vm.error.get().is_some());
            assert_eq!(vm.change_action.version().get(), 0);
        });
    }
}
