use crate::{
    components::{
        empty_state::{EmptyState, NotFoundState},
        error::InlineErrorMessage,
        layout::LoadingSpinner,
        pagination::PaginationControls,
        request_detail::{RequestDetailCard, RequestsTable},
    },
    pages::{
        admin::layout::AdminFrame,
        admin_requests::{
            components::{filter::RequestFilterForm, status_form::StatusChangeForm},
            view_model::use_admin_request_detail_view_model,
        },
        my_requests::view_model::use_request_list_view_model,
    },
    state::session::{use_session, Role},
};
use leptos::*;

fn is_admin() -> Signal<bool> {
    let phase = use_session().phase();
    Signal::derive(move || phase.with(|phase| phase.role() == Some(Role::Admin)))
}

#[component]
pub fn AdminRequestsPanel() -> impl IntoView {
    let vm = use_request_list_view_model();
    let show_sections = is_admin().get_untracked();

    view! {
        <AdminFrame
            title="Solicitudes de reserva"
            description="Revisa y gestiona las solicitudes de los ciudadanos."
            show_sections=show_sections
        >
            <RequestFilterForm
                filter=vm.filter
                on_apply=Callback::new(move |_| vm.apply_filters())
                on_clear=Callback::new(move |_| vm.clear_filters())
            />
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || vm.requests.get().map(|result| match result {
                    Ok(page) if page.is_empty() => view! {
                        <EmptyState title="No hay solicitudes con estos filtros" />
                    }.into_view(),
                    Ok(page) => view! {
                        <RequestsTable
                            requests=page.items
                            detail_base="/admin/solicitudes"
                            show_requester=true
                        />
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
        </AdminFrame>
    }
}

#[component]
pub fn AdminRequestDetailPanel(request_id: i64) -> impl IntoView {
    let vm = use_admin_request_detail_view_model(request_id);

    view! {
        <AdminFrame title=format!("Solicitud #{}", request_id)>
            <a href="/admin/solicitudes" class="text-sm text-action-primary-bg hover:underline">
                "← Volver a solicitudes"
            </a>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || vm.request.get().map(|result| match result {
                    Ok(request) => {
                        let current = request.status;
                        view! {
                            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                                <div class="lg:col-span-2">
                                    <RequestDetailCard request=request />
                                </div>
                                <StatusChangeForm
                                    form=vm.form
                                    states=vm.state_options()
                                    error=vm.error
                                    pending=vm.change_action.pending()
                                    on_submit=Callback::new(move |_| vm.submit(current))
                                />
                            </div>
                        }
                        .into_view()
                    }
                    Err(err) if err.is_not_found() => view! {
                        <NotFoundState
                            title="Solicitud no encontrada"
                            back_href="/admin/solicitudes"
                            back_label="Volver a solicitudes"
                        />
                    }.into_view(),
                    Err(err) => {
                        let error = create_rw_signal(Some(err));
                        view! { <InlineErrorMessage error=error /> }.into_view()
                    }
                })}
            </Suspense>
        </AdminFrame>
    }
}
