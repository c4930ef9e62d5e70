use crate::{
    api::{ApiError, RequestStateOption},
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        forms::{SelectField, TextAreaField},
    },
    pages::admin_requests::utils::{state_select_options, StatusChangeFormState},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn StatusChangeForm(
    form: StatusChangeFormState,
    #[prop(into)] states: Signal<Vec<RequestStateOption>>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let options = Signal::derive(move || states.with(|states| state_select_options(states)));
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form class="bg-surface-elevated rounded-lg shadow p-6 space-y-4" on:submit=handle_submit>
            <h3 class="text-base font-semibold text-fg">"Cambiar estado"</h3>
            <SelectField
                id="new-state"
                label="Nuevo estado"
                value=form.state_id
                options=options
                placeholder="Selecciona un estado"
                required=true
            />
            <TextAreaField
                id="status-note"
                label="Comentario"
                value=form.note
                placeholder="Motivo del cambio (opcional)"
            />
            <InlineErrorMessage error=error />
            <Button variant=ButtonVariant::Primary loading=pending attr:type="submit">
                "Guardar estado"
            </Button>
        </form>
    }
}
