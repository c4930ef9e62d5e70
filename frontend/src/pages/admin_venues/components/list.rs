use crate::{api::Venue, pages::venues::utils::capacity_label};
use leptos::*;

#[component]
pub fn VenueTable(
    venues: Vec<Venue>,
    on_edit: Callback<Venue>,
    on_delete: Callback<Venue>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted text-left text-fg-muted">
                    <tr>
                        <th class="px-4 py-2">"Nombre"</th>
                        <th class="px-4 py-2">"Dirección"</th>
                        <th class="px-4 py-2">"Capacidad"</th>
                        <th class="px-4 py-2">"Estado"</th>
                        <th class="px-4 py-2 text-right">"Acciones"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {venues.into_iter().map(|venue| {
                        let for_edit = venue.clone();
                        let for_delete = venue.clone();
                        view! {
                            <tr>
                                <td class="px-4 py-2 font-medium text-fg">
                                    <a href=format!("/escenarios/{}", venue.id) class="hover:underline">{venue.name.clone()}</a>
                                </td>
                                <td class="px-4 py-2 text-fg-muted">{venue.address.clone().unwrap_or_else(|| "-".into())}</td>
                                <td class="px-4 py-2 text-fg-muted">{capacity_label(venue.capacity)}</td>
                                <td class="px-4 py-2">{venue.state.label()}</td>
                                <td class="px-4 py-2 text-right space-x-2 whitespace-nowrap">
                                    <button
                                        type="button"
                                        class="text-action-primary-bg hover:underline"
                                        on:click=move |_| on_edit.call(for_edit.clone())
                                    >
                                        "Editar"
                                    </button>
                                    <button
                                        type="button"
                                        class="text-status-error-text hover:underline"
                                        on:click=move |_| on_delete.call(for_delete.clone())
                                    >
                                        "Eliminar"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
