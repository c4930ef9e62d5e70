use crate::{
    components::{
        confirm_dialog::DeleteDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::LoadingSpinner,
        pagination::PaginationControls,
    },
    pages::{
        admin::layout::AdminFrame,
        admin_venues::{
            components::{editor::VenueEditor, list::VenueTable},
            view_model::use_admin_venues_view_model,
        },
        venues::components::filter::VenueFilterForm,
    },
};
use leptos::*;

#[component]
pub fn AdminVenuesPanel() -> impl IntoView {
    let vm = use_admin_venues_view_model();
    let delete_name = Signal::derive(move || {
        vm.delete_target.with(|target| target.as_ref().map(|venue| venue.name.clone()))
    });

    view! {
        <AdminFrame
            title="Gestión de escenarios"
            description="Crea, edita y retira escenarios deportivos."
            show_sections=true
        >
            <div class="flex justify-end">
                <button
                    type="button"
                    class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    on:click=move |_| vm.open_create()
                >
                    "Nuevo escenario"
                </button>
            </div>
            <Show when=move || vm.editor.get().is_open()>
                <VenueEditor vm=vm />
            </Show>
            <VenueFilterForm
                filter=vm.filter
                on_apply=Callback::new(move |_| vm.apply_filters())
                on_clear=Callback::new(move |_| vm.clear_filters())
            />
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || vm.venues.get().map(|result| match result {
                    Ok(page) if page.is_empty() => view! {
                        <EmptyState title="No hay escenarios registrados" />
                    }.into_view(),
                    Ok(page) => view! {
                        <VenueTable
                            venues=page.items
                            on_edit=Callback::new(move |venue| vm.open_edit(&venue))
                            on_delete=Callback::new(move |venue| vm.request_delete(venue))
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
            <DeleteDialog
                entity="escenario"
                target=delete_name
                pending=vm.delete_action.pending()
                error=vm.delete_error
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </AdminFrame>
    }
}
