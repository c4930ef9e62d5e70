use leptos::*;
use leptos_router::use_query_map;

pub mod components;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage() -> impl IntoView {
    let query = use_query_map();
    let redirect = query.with_untracked(|params| params.get("redirect").cloned());
    view! { <LoginPanel redirect=redirect /> }
}
