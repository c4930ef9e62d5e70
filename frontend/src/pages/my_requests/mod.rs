use crate::components::{empty_state::NotFoundState, guard::RequireAuth, layout::Layout};
use leptos::*;
use leptos_router::use_params_map;

pub mod utils;
pub mod view_model;

mod panel;

pub use panel::{MyRequestDetailPanel, MyRequestsPanel};

#[component]
pub fn MyRequestsPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <MyRequestsPanel />
        </RequireAuth>
    }
}

#[component]
pub fn MyRequestDetailPage() -> impl IntoView {
    let params = use_params_map();
    let request_id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| utils::parse_id(raw)))
    });
    view! {
        <RequireAuth>
            {move || match request_id.get() {
                Some(id) => view! { <MyRequestDetailPanel request_id=id /> }.into_view(),
                None => view! {
                    <Layout>
                        <NotFoundState
                            title="Reserva no encontrada"
                            back_href="/mis-reservas"
                            back_label="Volver a mis reservas"
                        />
                    </Layout>
                }
                .into_view(),
            }}
        </RequireAuth>
    }
}
