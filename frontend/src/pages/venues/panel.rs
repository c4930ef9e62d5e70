use crate::{
    components::{
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner},
        pagination::PaginationControls,
    },
    pages::venues::{
        components::{card::VenueCard, filter::VenueFilterForm},
        view_model::use_venues_view_model,
    },
};
use leptos::*;

#[component]
pub fn VenuesPage() -> impl IntoView {
    let vm = use_venues_view_model();
    let on_apply = Callback::new(move |_| vm.apply_filters());
    let on_clear = Callback::new(move |_| vm.clear_filters());
    let on_page = Callback::new(move |page: u32| vm.go_to_page(page));

    view! {
        <Layout title="Escenarios">
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Escenarios deportivos"</h1>
                    <p class="text-sm text-fg-muted">"Elige un escenario para consultar su disponibilidad."</p>
                </div>
                <VenueFilterForm filter=vm.filter on_apply=on_apply on_clear=on_clear />
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || vm.venues.get().map(|result| match result {
                        Ok(page) if page.is_empty() => view! {
                            <EmptyState
                                title="No se encontraron escenarios"
                                description="Prueba con otros filtros de búsqueda."
                            />
                        }.into_view(),
                        Ok(page) => view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                                {page.items.into_iter().map(|venue| view! { <VenueCard venue=venue /> }).collect_view()}
                            </div>
                        }.into_view(),
                        Err(err) => {
                            let error = create_rw_signal(Some(err));
                            view! { <InlineErrorMessage error=error /> }.into_view()
                        }
                    })}
                </Suspense>
                <PaginationControls pagination=vm.pagination() on_page=on_page />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionPhase;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn venues_page_renders_filters() {
        let html = render_to_string(move || {
            provide_session(SessionPhase::Unauthenticated);
            view! { <VenuesPage /> }
        });
        assert!(html.contains("Escenarios deportivos"));
        assert!(html.contains("id=\"venue-search\""));
        assert!(html.contains("En mantenimiento"));
    }
}
