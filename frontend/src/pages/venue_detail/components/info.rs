use crate::{api::Venue, pages::venues::utils::capacity_label};
use leptos::*;

#[component]
pub fn VenueInfo(venue: Venue) -> impl IntoView {
    let details = [
        ("Dirección", venue.address.clone()),
        ("Localidad", venue.locality.as_ref().map(|l| l.name.clone())),
        ("Deporte principal", venue.primary_sport.as_ref().map(|s| s.name.clone())),
        ("Dimensiones", venue.dimensions.clone()),
    ];

    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-6 space-y-4">
            <div class="flex items-start justify-between gap-4">
                <h1 class="text-2xl font-bold text-fg">{venue.name.clone()}</h1>
                <span class="px-2 py-0.5 rounded-full text-xs font-medium bg-surface-muted text-fg">
                    {venue.state.label()}
                </span>
            </div>
            {venue.description.clone().map(|text| view! { <p class="text-fg-muted">{text}</p> })}
            <dl class="grid grid-cols-1 sm:grid-cols-2 gap-3 text-sm">
                {details
                    .into_iter()
                    .filter_map(|(label, value)| value.map(|value| (label, value)))
                    .map(|(label, value)| view! {
                        <div>
                            <dt class="font-medium text-fg-muted">{label}</dt>
                            <dd class="text-fg">{value}</dd>
                        </div>
                    })
                    .collect_view()}
                <div>
                    <dt class="font-medium text-fg-muted">"Capacidad"</dt>
                    <dd class="text-fg">{capacity_label(venue.capacity)}</dd>
                </div>
            </dl>
            {(!venue.amenities.is_empty()).then(|| view! {
                <div>
                    <h2 class="text-sm font-semibold text-fg mb-2">"Servicios"</h2>
                    <ul class="flex flex-wrap gap-2">
                        {venue.amenities.iter().map(|amenity| view! {
                            <li class="px-2 py-1 rounded bg-surface-muted text-xs text-fg">{amenity.name.clone()}</li>
                        }).collect_view()}
                    </ul>
                </div>
            })}
            {(!venue.images.is_empty()).then(|| view! {
                <div class="grid grid-cols-2 md:grid-cols-3 gap-2">
                    {venue.images.iter().map(|image| view! {
                        <img src=image.name.clone() alt=venue.name.clone() class="h-32 w-full object-cover rounded" />
                    }).collect_view()}
                </div>
            })}
        </div>
    }
}
