use crate::{api::ApiError, components::error::InlineErrorMessage};
use leptos::ev::KeyboardEvent;
use leptos::*;

/// Sentence shown before deleting `name`, an item of kind `entity`.
pub fn delete_prompt(entity: &str, name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        format!("Se eliminará este {}. Esta acción no se puede deshacer.", entity)
    } else {
        format!("Se eliminará el {} \"{}\". Esta acción no se puede deshacer.", entity, name)
    }
}

/// Confirmation for deleting one admin-managed record. Open while `target`
/// holds the record's display name; a failed delete stays open with the
/// API message so the admin can retry or back out.
#[component]
pub fn DeleteDialog(
    entity: &'static str,
    #[prop(into)] target: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let cancel = move || {
        if !pending.get_untracked() {
            on_cancel.call(());
        }
    };
    let prompt = move || {
        target
            .get()
            .map(|name| delete_prompt(entity, &name))
            .unwrap_or_default()
    };

    view! {
        <Show when=move || target.with(Option::is_some)>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <div class="absolute inset-0 bg-overlay-backdrop" on:click=move |_| cancel()></div>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="alertdialog"
                    aria-modal="true"
                    aria-labelledby="delete-dialog-title"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            cancel();
                        }
                    }
                >
                    <h2 id="delete-dialog-title" class="text-lg font-semibold text-fg">
                        {format!("Eliminar {}", entity)}
                    </h2>
                    <p class="text-sm text-fg-muted">{prompt}</p>
                    <InlineErrorMessage error=error />
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg disabled:opacity-50"
                            disabled=move || pending.get()
                            on:click=move |_| cancel()
                        >
                            "Cancelar"
                        </button>
                        <button
                            type="button"
                            class="rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                            disabled=move || pending.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || if pending.get() { "Eliminando..." } else { "Eliminar" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_the_record() {
        assert_eq!(
            delete_prompt("escenario", "Coliseo Central"),
            "Se eliminará el escenario \"Coliseo Central\". Esta acción no se puede deshacer."
        );
        assert_eq!(
            delete_prompt("usuario", "  "),
            "Se eliminará este usuario. Esta acción no se puede deshacer."
        );
    }
}
