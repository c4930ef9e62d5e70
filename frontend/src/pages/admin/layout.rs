use crate::components::layout::Layout;
use leptos::*;

const SECTIONS: &[(&str, &str)] = &[
    ("/admin", "Resumen"),
    ("/admin/solicitudes", "Solicitudes"),
    ("/admin/escenarios", "Escenarios"),
    ("/admin/usuarios", "Usuarios"),
];

/// Title, description and section tabs shared by the admin pages.
#[component]
pub fn AdminFrame(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    /// Supervisors only review requests; the tabs are for administrators.
    #[prop(optional)]
    show_sections: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <Layout title=title.clone()>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">{title}</h1>
                    {description.map(|text| view! { <p class="mt-1 text-sm text-fg-muted">{text}</p> })}
                </div>
                {show_sections.then(|| view! {
                    <nav class="flex flex-wrap gap-2 border-b border-border pb-2">
                        {SECTIONS.iter().map(|(href, label)| view! {
                            <a href=*href class="px-3 py-1.5 rounded-md text-sm text-fg-muted hover:text-fg hover:bg-surface-muted">
                                {*label}
                            </a>
                        }).collect_view()}
                    </nav>
                })}
                {children()}
            </div>
        </Layout>
    }
}
