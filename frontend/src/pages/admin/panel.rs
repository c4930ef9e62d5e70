use crate::{
    components::{error::InlineErrorMessage, layout::LoadingSpinner},
    pages::admin::{
        components::summary::SummaryCards, layout::AdminFrame, view_model::use_admin_view_model,
    },
};
use leptos::*;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let vm = use_admin_view_model();

    view! {
        <AdminFrame
            title="Panel de administración"
            description="Resumen de solicitudes, escenarios y usuarios."
            show_sections=true
        >
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || vm.summary.get().map(|result| match result {
                    Ok(summary) => view! { <SummaryCards summary=summary /> }.into_view(),
                    Err(err) => {
                        let error = create_rw_signal(Some(err));
                        view! { <InlineErrorMessage error=error /> }.into_view()
                    }
                })}
            </Suspense>
        </AdminFrame>
    }
}
