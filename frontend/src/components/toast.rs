use crate::state::toast::{use_toaster, Toast, ToastKind};
use leptos::*;

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => {
            "bg-status-success-bg border-status-success-border text-status-success-text"
        }
        ToastKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
        ToastKind::Info => "bg-status-info-bg border-status-info-border text-status-info-text",
    }
}

/// Stack of active notifications, newest last.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let toasts = toaster.toasts();
    view! {
        <div class="fixed bottom-4 right-4 z-[80] flex flex-col gap-2 w-80" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("flex items-start justify-between gap-3 rounded border px-4 py-3 shadow {}", toast_class(toast.kind))
                            role={if toast.kind == ToastKind::Error { "alert" } else { "status" }}
                        >
                            <p class="text-sm">{toast.message}</p>
                            <button
                                type="button"
                                aria-label="Cerrar"
                                class="text-sm opacity-70 hover:opacity-100"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
