use crate::api::Pagination;
use leptos::*;

/// "Página X de Y" with previous/next buttons. Emits the target page.
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<Option<Pagination>>,
    on_page: Callback<u32>,
) -> impl IntoView {
    let current = move || pagination.get().unwrap_or_else(|| Pagination::single(0));
    view! {
        <Show when=move || { current().total_pages > 1 }>
            <nav class="flex items-center justify-between border-t border-border px-4 py-3" aria-label="Paginación">
                <p class="text-sm text-fg-muted">
                    {move || {
                        let page = current();
                        format!("Página {} de {} ({} resultados)", page.page, page.total_pages, page.total)
                    }}
                </p>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="rounded-md border border-border px-3 py-1 text-sm disabled:opacity-50"
                        disabled=move || !current().has_previous()
                        on:click=move |_| on_page.call(current().page.saturating_sub(1).max(1))
                    >
                        "Anterior"
                    </button>
                    <button
                        type="button"
                        class="rounded-md border border-border px-3 py-1 text-sm disabled:opacity-50"
                        disabled=move || !current().has_next()
                        on:click=move |_| on_page.call(current().page + 1)
                    >
                        "Siguiente"
                    </button>
                </div>
            </nav>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn controls_show_position_and_hide_for_single_pages() {
        let html = render_to_string(move || {
            let pagination = Signal::derive(|| {
                Some(Pagination {
                    page: 2,
                    per_page: 10,
                    total: 35,
                    total_pages: 4,
                })
            });
            view! { <PaginationControls pagination=pagination on_page=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Página 2 de 4 (35 resultados)"));

        let html = render_to_string(move || {
            let pagination = Signal::derive(|| Some(Pagination::single(3)));
            view! { <PaginationControls pagination=pagination on_page=Callback::new(|_| {}) /> }
        });
        assert!(!html.contains("Página"));
    }
}
