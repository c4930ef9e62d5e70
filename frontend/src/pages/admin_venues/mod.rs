use crate::components::guard::RequireAdmin;
use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::AdminVenuesPanel;

#[component]
pub fn AdminVenuesPage() -> impl IntoView {
    view! { <RequireAdmin><AdminVenuesPanel /></RequireAdmin> }
}
