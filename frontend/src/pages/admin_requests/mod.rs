use crate::{
    components::{empty_state::NotFoundState, guard::RequireStaff, layout::Layout},
    pages::my_requests::utils::parse_id,
};
use leptos::*;
use leptos_router::use_params_map;

pub mod components;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::{AdminRequestDetailPanel, AdminRequestsPanel};

#[component]
pub fn AdminRequestsPage() -> impl IntoView {
    view! { <RequireStaff><AdminRequestsPanel /></RequireStaff> }
}

#[component]
pub fn AdminRequestDetailPage() -> impl IntoView {
    let params = use_params_map();
    let request_id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| parse_id(raw)))
    });
    view! {
        <RequireStaff>
            {move || match request_id.get() {
                Some(id) => view! { <AdminRequestDetailPanel request_id=id /> }.into_view(),
                None => view! {
                    <Layout>
                        <NotFoundState
                            title="Solicitud no encontrada"
                            back_href="/admin/solicitudes"
                            back_label="Volver a solicitudes"
                        />
                    </Layout>
                }
                .into_view(),
            }}
        </RequireStaff>
    }
}
