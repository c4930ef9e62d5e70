use crate::components::{guard::RequireAuth, layout::Layout};
use leptos::*;
use leptos_router::use_query_map;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::{InvalidSelection, ReservationPanel};

#[component]
pub fn ReservationPage() -> impl IntoView {
    let query = use_query_map();
    let parsed = store_value(query.with_untracked(|params| {
        utils::ReservationQuery::parse(
            params.get("escenario").map(String::as_str),
            params.get("fecha").map(String::as_str),
            params.get("hora").map(String::as_str),
        )
    }));

    view! {
        <RequireAuth>
            {move || match parsed.get_value() {
                Ok(query) => view! { <ReservationPanel query=query /> }.into_view(),
                Err(err) => view! {
                    <Layout>
                        <InvalidSelection error=err />
                    </Layout>
                }
                .into_view(),
            }}
        </RequireAuth>
    }
}
