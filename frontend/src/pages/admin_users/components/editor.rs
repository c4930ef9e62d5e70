use crate::{
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        forms::{SelectField, TextField},
    },
    pages::admin_users::{
        utils::{editor_title, role_options},
        view_model::AdminUsersViewModel,
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn UserEditor(vm: AdminUsersViewModel) -> impl IntoView {
    let form = vm.form;
    let roles = Signal::derive(role_options);
    let saving = vm.save_action.pending();
    let editing = move || vm.editor.get().is_edit();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=handle_submit>
            <h2 class="text-lg font-semibold text-fg">{move || editor_title(vm.editor.get())}</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextField id="user-first-name" label="Nombre" value=form.first_name required=true />
                <TextField id="user-last-name" label="Apellido" value=form.last_name />
                <TextField
                    id="user-email"
                    label="Correo electrónico"
                    value=form.email
                    input_type="email"
                    required=true
                />
                <TextField id="user-phone" label="Teléfono" value=form.phone input_type="tel" />
                <SelectField id="user-role" label="Rol" value=form.role_id options=roles required=true />
                <TextField
                    id="user-password"
                    label="Contraseña"
                    value=form.password
                    input_type="password"
                    autocomplete="new-password"
                />
            </div>
            <Show when=editing>
                <p class="text-xs text-fg-muted">"Deja la contraseña en blanco para conservar la actual."</p>
            </Show>
            <InlineErrorMessage error=vm.error />
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class=format!("inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold {}", ButtonVariant::Secondary.classes())
                    on:click=move |_| vm.close_editor()
                >
                    "Cancelar"
                </button>
                <Button loading=saving attr:type="submit">"Guardar"</Button>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::admin_users::view_model::use_admin_users_view_model;
    use crate::state::session::SessionPhase;
    use crate::test_support::helpers::{admin_user, provide_session, supervisor_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn editing_explains_the_optional_password() {
        let html = render_to_string(move || {
            provide_session(SessionPhase::Authenticated(admin_user()));
            let vm = use_admin_users_view_model();
            vm.open_edit(&supervisor_user());
            view! { <UserEditor vm=vm /> }
        });
        assert!(html.contains("Editar usuario"));
        assert!(html.contains("conservar la actual"));
        assert!(html.contains("Supervisor"));
    }
}
