use crate::{
    api::ApiError,
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        forms::TextField,
    },
    pages::login::utils::LoginFormState,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    form: LoginFormState,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <div class="min-h-[70vh] flex items-center justify-center py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        "Ingresar"
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Accede para solicitar reservas de escenarios deportivos."
                    </p>
                </div>
                <form class="mt-8 space-y-4" on:submit=handle_submit>
                    <TextField
                        id="email"
                        label="Correo electrónico"
                        value=form.email
                        input_type="email"
                        autocomplete="email"
                        required=true
                    />
                    <TextField
                        id="password"
                        label="Contraseña"
                        value=form.password
                        input_type="password"
                        autocomplete="current-password"
                        required=true
                    />

                    <InlineErrorMessage error=error />

                    <Button
                        variant=ButtonVariant::Primary
                        class="w-full"
                        loading=pending
                        disabled=pending
                        attr:type="submit"
                    >
                        "Ingresar"
                    </Button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    "¿No tienes cuenta? "
                    <a href="/registro" class="font-medium text-action-primary-bg hover:underline">
                        "Regístrate"
                    </a>
                </p>
            </div>
        </div>
    }
}
