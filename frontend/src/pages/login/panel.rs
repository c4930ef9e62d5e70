use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::*;

#[component]
pub fn LoginPanel(#[prop(optional_no_strip)] redirect: Option<String>) -> impl IntoView {
    let vm = use_login_view_model(redirect);
    let on_submit = Callback::new(move |_| vm.submit());

    view! {
        <LoginForm
            form=vm.form
            error=vm.error.read_only().into()
            pending=vm.login_action.pending().into()
            on_submit=on_submit
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_panel_renders_form() {
        let html = render_to_string(move || view! { <LoginPanel /> });
        assert!(html.contains("Ingresar"));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("href=\"/registro\""));
    }
}
