use crate::{
    components::{
        empty_state::{EmptyState, NotFoundState},
        error::InlineErrorMessage,
        forms::SelectField,
        layout::{Layout, LoadingSpinner},
        pagination::PaginationControls,
        request_detail::{status_options, RequestDetailCard, RequestsTable},
    },
    pages::my_requests::view_model::{use_request_detail, use_request_list_view_model},
};
use leptos::*;

#[component]
pub fn MyRequestsPanel() -> impl IntoView {
    let vm = use_request_list_view_model();
    let options = Signal::derive(status_options);
    let status = vm.filter.status;
    // The status select applies immediately.
    create_effect(move |previous: Option<String>| {
        let current = status.get();
        if previous.is_some_and(|previous| previous != current) {
            vm.apply_filters();
        }
        current
    });

    view! {
        <Layout title="Mis reservas">
            <div class="space-y-6">
                <div class="flex flex-col sm:flex-row sm:items-end sm:justify-between gap-4">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">"Mis reservas"</h1>
                        <p class="text-sm text-fg-muted">"Solicitudes que has enviado y su estado."</p>
                    </div>
                    <div class="w-full sm:w-60">
                        <SelectField
                            id="status-filter"
                            label="Estado"
                            value=status
                            options=options
                            placeholder="Todos"
                        />
                    </div>
                </div>
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || vm.requests.get().map(|result| match result {
                        Ok(page) if page.is_empty() => view! {
                            <EmptyState
                                title="Aún no tienes reservas"
                                description="Busca un escenario y solicita tu primer horario."
                                action=("/escenarios".to_string(), "Ver escenarios".to_string())
                            />
                        }.into_view(),
                        Ok(page) => view! {
                            <RequestsTable requests=page.items detail_base="/mis-reservas" />
                        }.into_view(),
                        Err(err) => {
                            let error = create_rw_signal(Some(err));
                            view! { <InlineErrorMessage error=error /> }.into_view()
                        }
                    })}
                </Suspense>
                <PaginationControls
                    pagination=vm.pagination()
                    on_page=Callback::new(move |page| vm.go_to_page(page))
                />
            </div>
        </Layout>
    }
}

#[component]
pub fn MyRequestDetailPanel(request_id: i64) -> impl IntoView {
    let (_, request) = use_request_detail(request_id);

    view! {
        <Layout title="Detalle de reserva">
            <div class="max-w-3xl mx-auto space-y-4">
                <a href="/mis-reservas" class="text-sm text-action-primary-bg hover:underline">
                    "← Volver a mis reservas"
                </a>
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || request.get().map(|result| match result {
                        Ok(request) => view! { <RequestDetailCard request=request /> }.into_view(),
                        Err(err) if err.is_not_found() => view! {
                            <NotFoundState
                                title="Reserva no encontrada"
                                back_href="/mis-reservas"
                                back_label="Volver a mis reservas"
                            />
                        }.into_view(),
                        Err(err) => {
                            let error = create_rw_signal(Some(err));
                            view! { <InlineErrorMessage error=error /> }.into_view()
                        }
                    })}
                </Suspense>
            </div>
        </Layout>
    }
}
