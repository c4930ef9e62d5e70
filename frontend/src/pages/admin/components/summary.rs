use crate::pages::admin::repository::DashboardSummary;
use leptos::*;

#[component]
fn SummaryCard(label: &'static str, value: u64, href: &'static str) -> impl IntoView {
    view! {
        <a href=href class="block bg-surface-elevated rounded-lg shadow p-5 hover:shadow-md">
            <p class="text-sm text-fg-muted">{label}</p>
            <p class="mt-1 text-3xl font-semibold text-fg">{value}</p>
        </a>
    }
}

#[component]
pub fn SummaryCards(summary: DashboardSummary) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
            <SummaryCard label="Solicitudes pendientes" value=summary.pending_requests href="/admin/solicitudes" />
            <SummaryCard label="En proceso" value=summary.in_process_requests href="/admin/solicitudes" />
            <SummaryCard label="Escenarios" value=summary.venues href="/admin/escenarios" />
            <SummaryCard label="Usuarios" value=summary.users href="/admin/usuarios" />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn cards_show_each_total() {
        let html = render_to_string(move || {
            let summary = DashboardSummary {
                pending_requests: 4,
                in_process_requests: 2,
                venues: 12,
                users: 57,
            };
            view! { <SummaryCards summary=summary /> }
        });
        assert!(html.contains("Solicitudes pendientes"));
        assert!(html.contains(">57<"));
        assert!(html.contains("href=\"/admin/usuarios\""));
    }
}
