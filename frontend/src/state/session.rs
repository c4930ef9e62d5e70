//! Session lifecycle: `Loading` until the stored token is resolved, then
//! `Authenticated` or `Unauthenticated`. Logging out clears it again.

use crate::{
    api::{ApiClient, ApiError, LoginRequest, UserProfile},
    utils::navigation,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Supervisor,
    Citizen,
}

impl Role {
    pub const ADMIN_ID: i64 = 1;
    pub const SUPERVISOR_ID: i64 = 2;
    pub const CITIZEN_ID: i64 = 3;

    /// Unknown role ids get citizen-level access.
    pub fn from_id(id: i64) -> Self {
        match id {
            Self::ADMIN_ID => Role::Admin,
            Self::SUPERVISOR_ID => Role::Supervisor,
            _ => Role::Citizen,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Role::Admin => Self::ADMIN_ID,
            Role::Supervisor => Self::SUPERVISOR_ID,
            Role::Citizen => Self::CITIZEN_ID,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::Supervisor => "Supervisor",
            Role::Citizen => "Ciudadano",
        }
    }

    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Supervisor => "/admin/solicitudes",
            Role::Citizen => "/mis-reservas",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionPhase {
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(UserProfile),
}

impl SessionPhase {
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|user| Role::from_id(user.role_id))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionPhase::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }
}

/// What a page needs from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    SignedIn,
    AnyOf(&'static [Role]),
}

impl Requirement {
    pub const ADMIN: Requirement = Requirement::AnyOf(&[Role::Admin]);
    pub const STAFF: Requirement = Requirement::AnyOf(&[Role::Admin, Role::Supervisor]);

    pub fn allows(&self, role: Role) -> bool {
        match self {
            Requirement::SignedIn => true,
            Requirement::AnyOf(roles) => roles.contains(&role),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Show a neutral placeholder, never the protected body.
    Loading,
    Render,
    Redirect(String),
}

/// Decides what a protected page shows for the current session.
pub fn gate(phase: &SessionPhase, requirement: Requirement, requested_path: &str) -> GateDecision {
    match phase {
        SessionPhase::Loading => GateDecision::Loading,
        SessionPhase::Unauthenticated => GateDecision::Redirect(navigation::login_url(requested_path)),
        SessionPhase::Authenticated(user) => {
            let role = Role::from_id(user.role_id);
            if requirement.allows(role) {
                GateDecision::Render
            } else {
                GateDecision::Redirect(role.landing_path().to_string())
            }
        }
    }
}

/// Reactive handle on the session, provided through context.
#[derive(Debug, Clone, Copy)]
pub struct SessionStore {
    phase: ReadSignal<SessionPhase>,
    set_phase: WriteSignal<SessionPhase>,
}

impl SessionStore {
    pub fn new(initial: SessionPhase) -> Self {
        let (phase, set_phase) = create_signal(initial);
        Self { phase, set_phase }
    }

    pub fn phase(&self) -> ReadSignal<SessionPhase> {
        self.phase
    }

    pub fn get(&self) -> SessionPhase {
        self.phase.get()
    }

    pub fn sign_in(&self, user: UserProfile) {
        self.set_phase.set(SessionPhase::Authenticated(user));
    }

    pub fn clear(&self) {
        self.set_phase.set(SessionPhase::Unauthenticated);
    }
}

/// Resolves the persisted token into a profile. A missing token skips the
/// call; a failed probe clears the stale token.
pub async fn resolve_session(api: &ApiClient) -> SessionPhase {
    if !api.has_token() {
        return SessionPhase::Unauthenticated;
    }
    match api.me().await {
        Ok(user) => SessionPhase::Authenticated(user),
        Err(error) => {
            log::warn!("could not restore session: {}", error);
            api.token_store().clear();
            SessionPhase::Unauthenticated
        }
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let store = SessionStore::new(SessionPhase::Loading);
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    spawn_local(async move {
        let phase = resolve_session(&api).await;
        store.set_phase.set(phase);
    });
    provide_context(store);
    view! { <>{children()}</> }
}

/// Session from context; outside a provider the visitor is anonymous.
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>()
        .unwrap_or_else(|| SessionStore::new(SessionPhase::Unauthenticated))
}

pub async fn login_request(
    request: LoginRequest,
    api: &ApiClient,
    store: SessionStore,
) -> Result<UserProfile, ApiError> {
    let response = api.login(&request).await?;
    store.sign_in(response.user.clone());
    Ok(response.user)
}

pub fn logout(api: &ApiClient, store: SessionStore) {
    api.logout();
    store.clear();
}

pub fn use_login_action() -> Action<LoginRequest, Result<UserProfile, ApiError>> {
    let store = use_session();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, store).await }
    })
}

/// Where to go after signing in: a safe `redirect` target, else the role's
/// landing page.
pub fn post_login_target(redirect: Option<&str>, user: &UserProfile) -> String {
    redirect
        .and_then(navigation::safe_return_target)
        .unwrap_or_else(|| Role::from_id(user.role_id).landing_path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, citizen_user, supervisor_user};

    #[test]
    fn role_ids_map_to_roles_and_landing_pages() {
        assert_eq!(Role::from_id(1), Role::Admin);
        assert_eq!(Role::from_id(2), Role::Supervisor);
        assert_eq!(Role::from_id(3), Role::Citizen);
        assert_eq!(Role::from_id(42), Role::Citizen);
        assert_eq!(Role::Supervisor.landing_path(), "/admin/solicitudes");
    }

    #[test]
    fn loading_never_renders_or_redirects() {
        assert_eq!(
            gate(&SessionPhase::Loading, Requirement::ADMIN, "/admin"),
            GateDecision::Loading
        );
    }

    #[test]
    fn anonymous_visitors_go_to_login_with_return_path() {
        let decision = gate(
            &SessionPhase::Unauthenticated,
            Requirement::SignedIn,
            "/reservar?escenario=5&fecha=2025-06-15&hora=14:00",
        );
        assert_eq!(
            decision,
            GateDecision::Redirect(
                "/login?redirect=/reservar%3Fescenario%3D5%26fecha%3D2025-06-15%26hora%3D14%3A00"
                    .into()
            )
        );
    }

    #[test]
    fn wrong_role_goes_to_its_landing_page() {
        let citizen = SessionPhase::Authenticated(citizen_user());
        assert_eq!(
            gate(&citizen, Requirement::ADMIN, "/admin/escenarios"),
            GateDecision::Redirect("/mis-reservas".into())
        );
        let supervisor = SessionPhase::Authenticated(supervisor_user());
        assert_eq!(
            gate(&supervisor, Requirement::ADMIN, "/admin/usuarios"),
            GateDecision::Redirect("/admin/solicitudes".into())
        );
        assert_eq!(gate(&supervisor, Requirement::STAFF, "/admin/solicitudes"), GateDecision::Render);
        assert_eq!(
            gate(&SessionPhase::Authenticated(admin_user()), Requirement::ADMIN, "/admin"),
            GateDecision::Render
        );
        assert_eq!(gate(&citizen, Requirement::SignedIn, "/mis-reservas"), GateDecision::Render);
    }

    #[test]
    fn post_login_prefers_safe_redirect() {
        let user = citizen_user();
        assert_eq!(
            post_login_target(Some("/reservar?escenario=5&fecha=2025-06-15&hora=14:00"), &user),
            "/reservar?escenario=5&fecha=2025-06-15&hora=14:00"
        );
        assert_eq!(post_login_target(Some("https://evil.example"), &user), "/mis-reservas");
        assert_eq!(post_login_target(None, &admin_user()), "/admin");
    }
}
