use crate::{
    components::layout::LoadingSpinner,
    state::session::{gate, use_session, GateDecision, Requirement},
    utils::navigation,
};
use leptos::*;

/// Renders `children` only when the session satisfies `requirement`.
/// Anything else shows a spinner (still loading) or nothing while the
/// redirect computed by `gate` takes effect.
#[component]
pub fn RequireRole(requirement: Requirement, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let phase = session.phase();
    let decision = create_memo(move |_| {
        let requested = navigation::current_location().unwrap_or_else(|| "/".into());
        phase.with(|phase| gate(phase, requirement, &requested))
    });
    create_effect(move |_| {
        if let GateDecision::Redirect(target) = decision.get() {
            log::debug!("access denied, redirecting to {}", target);
            navigation::redirect_to(&target);
        }
    });
    view! {
        <Show
            when=move || decision.get() == GateDecision::Render
            fallback=move || {
                if decision.get() == GateDecision::Loading {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    view! { <RequireRole requirement=Requirement::SignedIn>{children()}</RequireRole> }
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    view! { <RequireRole requirement=Requirement::ADMIN>{children()}</RequireRole> }
}

#[component]
pub fn RequireStaff(children: ChildrenFn) -> impl IntoView {
    view! { <RequireRole requirement=Requirement::STAFF>{children()}</RequireRole> }
}
