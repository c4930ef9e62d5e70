use crate::{
    components::{
        forms::{SelectField, TextField},
        request_detail::status_options,
    },
    pages::my_requests::utils::RequestFilterState,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RequestFilterForm(
    filter: RequestFilterState,
    on_apply: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let options = Signal::derive(status_options);
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_apply.call(());
    };

    view! {
        <form class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end" on:submit=handle_submit>
            <div class="md:col-span-2">
                <TextField
                    id="request-search"
                    label="Buscar"
                    value=filter.search
                    placeholder="Escenario o solicitante"
                />
            </div>
            <SelectField
                id="request-status"
                label="Estado"
                value=filter.status
                options=options
                placeholder="Todos"
            />
            <div class="flex gap-2">
                <button type="submit" class="px-4 py-2 rounded-md bg-action-primary-bg text-action-primary-text text-sm font-semibold">
                    "Filtrar"
                </button>
                <button
                    type="button"
                    class="px-4 py-2 rounded-md border border-border text-fg text-sm"
                    on:click=move |_| on_clear.call(())
                >
                    "Limpiar"
                </button>
            </div>
        </form>
    }
}
