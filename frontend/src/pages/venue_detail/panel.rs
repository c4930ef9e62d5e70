use crate::{
    components::{
        empty_state::NotFoundState,
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner},
    },
    pages::venue_detail::{
        components::{booking::BookingPanel, info::VenueInfo},
        view_model::use_venue_detail_view_model,
    },
};
use leptos::*;

#[component]
pub fn VenueDetailPanel(#[prop(into)] venue_id: Signal<i64>) -> impl IntoView {
    let vm = use_venue_detail_view_model(venue_id);

    view! {
        <Layout title="Escenario">
            <div class="mb-4">
                <a href="/escenarios" class="text-sm text-action-primary-bg hover:underline">
                    "← Volver a escenarios"
                </a>
            </div>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || vm.venue.get().map(|result| match result {
                    Ok(venue) => view! {
                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                            <VenueInfo venue=venue />
                            <BookingPanel vm=vm />
                        </div>
                    }.into_view(),
                    Err(err) if err.is_not_found() => view! {
                        <NotFoundState
                            title="Escenario no encontrado"
                            back_href="/escenarios"
                            back_label="Volver a escenarios"
                        />
                    }.into_view(),
                    Err(err) => {
                        let error = create_rw_signal(Some(err));
                        view! { <InlineErrorMessage error=error /> }.into_view()
                    }
                })}
            </Suspense>
        </Layout>
    }
}
