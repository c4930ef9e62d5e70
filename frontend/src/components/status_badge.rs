use crate::domain::status::RequestStatus;
use leptos::*;

#[component]
pub fn StatusBadge(status: RequestStatus) -> impl IntoView {
    view! {
        <span
            class="inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold text-white"
            style=format!("background-color: {}", status.color())
        >
            {status.label()}
        </span>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn badge_shows_label_and_color() {
        let html = render_to_string(move || view! { <StatusBadge status=RequestStatus::Approved /> });
        assert!(html.contains(RequestStatus::Approved.label()));
        assert!(html.contains(RequestStatus::Approved.color()));
    }
}
