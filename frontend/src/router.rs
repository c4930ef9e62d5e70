use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{
        empty_state::NotFoundState,
        layout::{Layout, APP_NAME},
    },
    pages::{
        admin::AdminPage,
        admin_requests::{AdminRequestDetailPage, AdminRequestsPage},
        admin_users::AdminUsersPage,
        admin_venues::AdminVenuesPage,
        home::HomePage,
        login::LoginPage,
        my_requests::{MyRequestDetailPage, MyRequestsPage},
        register::RegisterPage,
        reservation::ReservationPage,
        venue_detail::VenueDetailPage,
        venues::VenuesPage,
    },
    state::{session::SessionProvider, toast::provide_toaster},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/registro",
    "/escenarios",
    "/escenarios/:id",
    "/reservar",
    "/mis-reservas",
    "/mis-reservas/:id",
    "/admin",
    "/admin/solicitudes",
    "/admin/solicitudes/:id",
    "/admin/escenarios",
    "/admin/usuarios",
];

/// Routes whose page component sits behind a session gate.
pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/reservar",
    "/mis-reservas",
    "/mis-reservas/:id",
    "/admin",
    "/admin/solicitudes",
    "/admin/solicitudes/:id",
    "/admin/escenarios",
    "/admin/usuarios",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/registro",
    "/escenarios",
    "/escenarios/:id",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_toaster();
    view! {
        <Title text=APP_NAME />
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/registro" view=RegisterPage/>
                    <Route path="/escenarios" view=VenuesPage/>
                    <Route path="/escenarios/:id" view=VenueDetailPage/>
                    <Route path="/reservar" view=ReservationPage/>
                    <Route path="/mis-reservas" view=MyRequestsPage/>
                    <Route path="/mis-reservas/:id" view=MyRequestDetailPage/>
                    <Route path="/admin" view=AdminPage/>
                    <Route path="/admin/solicitudes" view=AdminRequestsPage/>
                    <Route path="/admin/solicitudes/:id" view=AdminRequestDetailPage/>
                    <Route path="/admin/escenarios" view=AdminVenuesPage/>
                    <Route path="/admin/usuarios" view=AdminUsersPage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout title="Página no encontrada">
            <NotFoundState
                title="Página no encontrada"
                back_href="/"
                back_label="Volver al inicio"
            />
        </Layout>
    }
}
