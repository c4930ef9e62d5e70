use crate::{
    api::ApiError,
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        forms::TextField,
    },
    pages::register::utils::RegisterFormState,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegisterForm(
    form: RegisterFormState,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <div class="max-w-lg mx-auto py-8">
            <h2 class="text-3xl font-extrabold text-fg text-center">"Crear cuenta"</h2>
            <p class="mt-2 text-center text-sm text-fg-muted">
                "Regístrate para solicitar el uso de los escenarios."
            </p>
            <form class="mt-8 space-y-4" on:submit=handle_submit>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <TextField id="first_name" label="Nombre" value=form.first_name required=true />
                    <TextField id="last_name" label="Apellido" value=form.last_name required=true />
                </div>
                <TextField
                    id="email"
                    label="Correo electrónico"
                    value=form.email
                    input_type="email"
                    autocomplete="email"
                    required=true
                />
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <TextField id="phone" label="Teléfono" value=form.phone input_type="tel" />
                    <TextField id="document" label="Documento" value=form.document />
                </div>
                <TextField
                    id="password"
                    label="Contraseña"
                    value=form.password
                    input_type="password"
                    autocomplete="new-password"
                    required=true
                />
                <TextField
                    id="password_confirmation"
                    label="Confirmar contraseña"
                    value=form.password_confirmation
                    input_type="password"
                    autocomplete="new-password"
                    required=true
                />

                <InlineErrorMessage error=error />

                <Button
                    variant=ButtonVariant::Primary
                    class="w-full"
                    loading=pending
                    attr:type="submit"
                >
                    "Crear cuenta"
                </Button>
            </form>
            <p class="mt-6 text-center text-sm text-fg-muted">
                "¿Ya tienes cuenta? "
                <a href="/login" class="font-medium text-action-primary-bg hover:underline">"Ingresar"</a>
            </p>
        </div>
    }
}
