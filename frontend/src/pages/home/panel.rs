use crate::{
    components::layout::Layout,
    state::session::{use_session, Role},
};
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let phase = session.phase();
    // Signed-in visitors get a shortcut to their own area.
    let own_area = move || {
        phase.with(|phase| {
            phase
                .role()
                .map(|role| (role.landing_path(), own_area_label(role)))
        })
    };

    view! {
        <Layout>
            <div class="py-12 text-center">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl">
                    "Reserva escenarios deportivos"
                </h1>
                <p class="mt-3 max-w-2xl mx-auto text-base text-fg-muted sm:text-lg">
                    "Consulta la disponibilidad de los escenarios del municipio y solicita tu horario en línea."
                </p>
                <div class="mt-8 flex flex-col sm:flex-row gap-3 justify-center">
                    <a href="/escenarios" class="inline-flex items-center justify-center px-8 py-3 rounded-md text-base font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover">
                        "Ver escenarios"
                    </a>
                    {move || match own_area() {
                        Some((href, label)) => view! {
                            <a href=href class="inline-flex items-center justify-center px-8 py-3 rounded-md text-base font-medium border border-border text-fg hover:bg-surface-muted">
                                {label}
                            </a>
                        }.into_view(),
                        None => view! {
                            <a href="/login" class="inline-flex items-center justify-center px-8 py-3 rounded-md text-base font-medium border border-border text-fg hover:bg-surface-muted">
                                "Ingresar"
                            </a>
                        }.into_view(),
                    }}
                </div>
            </div>
        </Layout>
    }
}

fn own_area_label(role: Role) -> &'static str {
    match role {
        Role::Citizen => "Mis reservas",
        Role::Supervisor => "Revisar solicitudes",
        Role::Admin => "Panel de administración",
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionPhase;
    use crate::test_support::helpers::{citizen_user, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn home_links_citizens_to_their_reservations() {
        let html = render_to_string(move || {
            provide_session(SessionPhase::Authenticated(citizen_user()));
            view! { <HomePage /> }
        });
        assert!(html.contains("Ver escenarios"));
        assert!(html.contains("href=\"/mis-reservas\""));
    }

    #[test]
    fn home_offers_login_to_visitors() {
        let html = render_to_string(move || {
            provide_session(SessionPhase::Unauthenticated);
            view! { <HomePage /> }
        });
        assert!(html.contains("href=\"/login\""));
    }
}
