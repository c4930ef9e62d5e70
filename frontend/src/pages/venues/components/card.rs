use crate::{
    api::{Venue, VenueState},
    pages::venues::utils::capacity_label,
};
use leptos::*;

fn state_class(state: VenueState) -> &'static str {
    match state {
        VenueState::Available => "bg-status-success-bg text-status-success-text",
        VenueState::Maintenance => "bg-status-warning-bg text-status-warning-text",
        VenueState::Inactive | VenueState::Unknown => "bg-surface-muted text-fg-muted",
    }
}

#[component]
pub fn VenueCard(venue: Venue) -> impl IntoView {
    let href = format!("/escenarios/{}", venue.id);
    let image = venue.images.first().map(|image| image.name.clone());
    let locality = venue.locality.as_ref().map(|l| l.name.clone());
    let sport = venue.primary_sport.as_ref().map(|s| s.name.clone());

    view! {
        <a
            href=href
            class="block bg-surface-elevated rounded-lg shadow-sm border border-border overflow-hidden hover:shadow-md transition-shadow"
        >
            {match image {
                Some(src) => view! {
                    <img src=src alt=venue.name.clone() class="h-40 w-full object-cover" />
                }.into_view(),
                None => view! { <div class="h-40 w-full bg-surface-muted"></div> }.into_view(),
            }}
            <div class="p-4 space-y-1">
                <div class="flex items-start justify-between gap-2">
                    <h3 class="text-lg font-semibold text-fg">{venue.name.clone()}</h3>
                    <span class=format!("px-2 py-0.5 rounded-full text-xs font-medium {}", state_class(venue.state))>
                        {venue.state.label()}
                    </span>
                </div>
                {locality.map(|name| view! { <p class="text-sm text-fg-muted">{name}</p> })}
                {sport.map(|name| view! { <p class="text-sm text-fg-muted">{name}</p> })}
                <p class="text-sm text-fg">{capacity_label(venue.capacity)}</p>
            </div>
        </a>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::sample_venue;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn card_links_to_the_venue_detail() {
        let html = render_to_string(move || view! { <VenueCard venue=sample_venue() /> });
        assert!(html.contains("href=\"/escenarios/5\""));
        assert!(html.contains("Coliseo Central"));
        assert!(html.contains("Centro"));
        assert!(html.contains("Capacidad: 40 personas"));
        assert!(html.contains("Disponible"));
    }
}
