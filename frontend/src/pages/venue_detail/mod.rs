use crate::{components::layout::Layout, components::empty_state::NotFoundState};
use leptos::*;
use leptos_router::use_params_map;

pub mod components;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::VenueDetailPanel;

#[component]
pub fn VenueDetailPage() -> impl IntoView {
    let params = use_params_map();
    let venue_id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|raw| utils::parse_id(raw)))
    });
    view! {
        <Show
            when=move || venue_id.get().is_some()
            fallback=|| view! {
                <Layout>
                    <NotFoundState
                        title="Escenario no encontrado"
                        back_href="/escenarios"
                        back_label="Volver a escenarios"
                    />
                </Layout>
            }
        >
            <VenueDetailPanel venue_id=Signal::derive(move || venue_id.get().unwrap_or_default()) />
        </Show>
    }
}
