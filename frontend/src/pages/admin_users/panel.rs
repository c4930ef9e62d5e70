use crate::{
    components::{
        confirm_dialog::DeleteDialog,
        empty_state::EmptyState,
        error::InlineErrorMessage,
        forms::TextField,
        layout::LoadingSpinner,
        pagination::PaginationControls,
    },
    pages::{
        admin::layout::AdminFrame,
        admin_users::{
            components::{editor::UserEditor, list::UserTable},
            view_model::use_admin_users_view_model,
        },
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AdminUsersPanel() -> impl IntoView {
    let vm = use_admin_users_view_model();
    let delete_name = Signal::derive(move || {
        vm.delete_target.with(|target| target.as_ref().map(|user| user.display_name()))
    });
    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.apply_search();
    };

    view! {
        <AdminFrame
            title="Usuarios"
            description="Administra las cuentas y sus roles."
            show_sections=true
        >
            <div class="flex flex-col sm:flex-row sm:items-end sm:justify-between gap-4">
                <form class="flex items-end gap-2" on:submit=on_search>
                    <TextField
                        id="user-search"
                        label="Buscar"
                        value=vm.search
                        placeholder="Nombre o correo"
                    />
                    <button type="submit" class="px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text text-sm font-semibold">
                        "Buscar"
                    </button>
                    <button
                        type="button"
                        class="px-4 py-2 rounded-md border border-border text-fg text-sm"
                        on:click=move |_| vm.clear_search()
                    >
                        "Limpiar"
                    </button>
                </form>
                <button
                    type="button"
                    class="inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                    on:click=move |_| vm.open_create()
                >
                    "Nuevo usuario"
                </button>
            </div>
            <Show when=move || vm.editor.get().is_open()>
                <UserEditor vm=vm />
            </Show>
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || vm.users.get().map(|result| match result {
                    Ok(page) if page.is_empty() => view! {
                        <EmptyState title="No se encontraron usuarios" />
                    }.into_view(),
                    Ok(page) => view! {
                        <UserTable
                            users=page.items
                            on_edit=Callback::new(move |user| vm.open_edit(&user))
                            on_delete=Callback::new(move |user| vm.request_delete(user))
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
                entity="usuario"
                target=delete_name
                pending=vm.delete_action.pending()
                error=vm.delete_error
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </AdminFrame>
    }
}
