use crate::{api::UserProfile, state::session::Role};
use leptos::*;

#[component]
pub fn UserTable(
    users: Vec<UserProfile>,
    on_edit: Callback<UserProfile>,
    on_delete: Callback<UserProfile>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted text-left text-fg-muted">
                    <tr>
                        <th class="px-4 py-2">"Nombre"</th>
                        <th class="px-4 py-2">"Correo"</th>
                        <th class="px-4 py-2">"Teléfono"</th>
                        <th class="px-4 py-2">"Rol"</th>
                        <th class="px-4 py-2 text-right">"Acciones"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {users.into_iter().map(|user| {
                        let for_edit = user.clone();
                        let for_delete = user.clone();
                        view! {
                            <tr>
                                <td class="px-4 py-2 font-medium text-fg">{user.display_name()}</td>
                                <td class="px-4 py-2 text-fg-muted">{user.email.clone()}</td>
                                <td class="px-4 py-2 text-fg-muted">{user.phone.clone().unwrap_or_else(|| "-".into())}</td>
                                <td class="px-4 py-2">{Role::from_id(user.role_id).label()}</td>
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
