use super::repository::{AdminRepository, DashboardSummary};
use crate::api::{ApiClient, ApiError};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AdminViewModel {
    pub summary: Resource<u32, Result<DashboardSummary, ApiError>>,
    pub reload: RwSignal<u32>,
}

pub fn use_admin_view_model() -> AdminViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = store_value(AdminRepository::new(api));
    let reload = create_rw_signal(0u32);
    let summary = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repository.get_value();
            async move { repo.summary().await }
        },
    );
    AdminViewModel { summary, reload }
}
