use crate::{
    api::ApiClient,
    components::toast::ToastHost,
    state::session::{self, use_session, Role, SessionPhase},
    utils::navigation,
};
use leptos::*;
use leptos_meta::Title;

pub const APP_NAME: &str = "Reservas Deportivas";

/// Browser tab title for a page.
pub fn document_title(page: &str) -> String {
    if page.trim().is_empty() {
        APP_NAME.to_string()
    } else {
        format!("{} · {}", page, APP_NAME)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const PUBLIC_LINKS: &[NavLink] = &[
    NavLink {
        href: "/",
        label: "Inicio",
    },
    NavLink {
        href: "/escenarios",
        label: "Escenarios",
    },
];

const CITIZEN_LINKS: &[NavLink] = &[NavLink {
    href: "/mis-reservas",
    label: "Mis reservas",
}];

const SUPERVISOR_LINKS: &[NavLink] = &[NavLink {
    href: "/admin/solicitudes",
    label: "Solicitudes",
}];

const ADMIN_LINKS: &[NavLink] = &[
    NavLink {
        href: "/admin",
        label: "Panel",
    },
    NavLink {
        href: "/admin/solicitudes",
        label: "Solicitudes",
    },
    NavLink {
        href: "/admin/escenarios",
        label: "Gestión de escenarios",
    },
    NavLink {
        href: "/admin/usuarios",
        label: "Usuarios",
    },
];

/// Links shown in the header for the current session.
pub fn nav_links(phase: &SessionPhase) -> Vec<NavLink> {
    let mut links = PUBLIC_LINKS.to_vec();
    match phase.role() {
        Some(Role::Admin) => links.extend_from_slice(ADMIN_LINKS),
        Some(Role::Supervisor) => links.extend_from_slice(SUPERVISOR_LINKS),
        Some(Role::Citizen) => links.extend_from_slice(CITIZEN_LINKS),
        None => {}
    }
    links
}

const LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let phase = session.phase();
    let api = store_value(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let (menu_open, set_menu_open) = create_signal(false);
    let links = create_memo(move |_| phase.with(nav_links));
    let user_name = move || {
        phase.with(|phase| phase.user().map(|user| user.display_name()))
    };

    let on_logout = move |_| {
        set_menu_open.set(false);
        session::logout(&api.get_value(), session);
        navigation::redirect_to(navigation::LOGIN_PATH);
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    let render_links = move |extra_class: &'static str| {
        links
            .get()
            .into_iter()
            .map(|link| {
                view! {
                    <a
                        href=link.href
                        class=format!("{} {}", LINK_CLASS, extra_class)
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };
    let account = move |extra_class: &'static str| {
        if phase.with(SessionPhase::is_authenticated) {
            view! {
                <button on:click=on_logout class=format!("{} {}", LINK_CLASS, extra_class)>
                    "Cerrar sesión"
                </button>
            }
            .into_view()
        } else if phase.with(SessionPhase::is_loading) {
            ().into_view()
        } else {
            view! {
                <a href="/login" class=format!("{} {}", LINK_CLASS, extra_class)>"Ingresar"</a>
                <a href="/registro" class=format!("{} {}", LINK_CLASS, extra_class)>"Registrarse"</a>
            }
            .into_view()
        }
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">{APP_NAME}</a>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex items-center space-x-2">
                            {move || render_links("")}
                            {move || user_name().map(|name| view! {
                                <span class="px-3 text-sm text-fg-muted">{name}</span>
                            })}
                            {move || account("")}
                        </nav>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Cerrar menú" } else { "Abrir menú" }}
                            </span>
                            <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 flex flex-col space-y-1">
                            {move || render_links("block")}
                            {move || account("block w-full text-left")}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(#[prop(optional, into)] title: Option<String>, children: Children) -> impl IntoView {
    view! {
        {title.map(|page| view! { <Title text=document_title(&page) /> })}
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
            <ToastHost/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            <span class="sr-only">"Cargando..."</span>
        </div>
    }
}
