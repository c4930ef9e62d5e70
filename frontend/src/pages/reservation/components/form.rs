use crate::{
    api::ApiError,
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        forms::{SelectField, TextAreaField, TextField},
    },
    pages::reservation::utils::ReservationFormState,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn ReservationForm(
    form: ReservationFormState,
    #[prop(into)] purposes: Signal<Vec<(String, String)>>,
    #[prop(into)] capacity: Signal<u32>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] can_submit: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };
    let participants_hint = move || match capacity.get() {
        0 => String::new(),
        max => format!("Máximo {} personas.", max),
    };

    view! {
        <form class="space-y-4" on:submit=handle_submit>
            <SelectField
                id="purpose"
                label="Propósito"
                value=form.purpose
                options=purposes
                placeholder="Selecciona un propósito"
                required=true
            />
            <div>
                <TextField
                    id="participants"
                    label="Número de participantes"
                    value=form.participants
                    input_type="number"
                    required=true
                />
                <p class="mt-1 text-xs text-fg-muted">{participants_hint}</p>
            </div>
            <TextAreaField
                id="notes"
                label="Observaciones"
                value=form.notes
                placeholder="Información adicional (opcional)"
            />

            <InlineErrorMessage error=error />

            <Button
                variant=ButtonVariant::Primary
                class="w-full"
                loading=pending
                disabled=Signal::derive(move || !can_submit.get())
                attr:type="submit"
            >
                "Enviar solicitud"
            </Button>
        </form>
    }
}
