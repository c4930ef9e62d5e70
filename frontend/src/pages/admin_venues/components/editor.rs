use crate::{
    components::{
        common::{Button, ButtonVariant},
        error::InlineErrorMessage,
        forms::{SelectField, TextAreaField, TextField},
    },
    pages::{
        admin_venues::{utils::{editor_title, IMAGE_TYPES}, view_model::AdminVenuesViewModel},
        venues::utils::state_options,
    },
};
use leptos::{ev::SubmitEvent, *};
use wasm_bindgen::JsCast;

#[component]
pub fn VenueEditor(vm: AdminVenuesViewModel) -> impl IntoView {
    let form = vm.form;
    let options = Signal::derive(state_options);
    let saving = vm.save_action.pending();
    let uploading = vm.upload_action.pending();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    let on_file = move |ev: ev::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            vm.upload(file);
        }
    };

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=handle_submit>
            <h2 class="text-lg font-semibold text-fg">{move || editor_title(vm.editor.get())}</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextField id="venue-name" label="Nombre" value=form.name required=true />
                <TextField id="venue-address" label="Dirección" value=form.address />
                <TextField
                    id="venue-capacity"
                    label="Capacidad"
                    value=form.capacity
                    input_type="number"
                    placeholder="Personas"
                />
                <TextField
                    id="venue-dimensions"
                    label="Dimensiones"
                    value=form.dimensions
                    placeholder="40 x 20 m"
                />
                <SelectField
                    id="venue-state"
                    label="Estado"
                    value=form.state
                    options=options
                    required=true
                />
            </div>
            <TextAreaField id="venue-description" label="Descripción" value=form.description rows=4 />
            <div class="space-y-2">
                <label for="venue-image" class="block text-sm font-medium text-fg">"Imágenes"</label>
                <ul class="flex flex-wrap gap-2">
                    {move || form.images.get().into_iter().map(|url| {
                        let target = url.clone();
                        view! {
                            <li class="flex items-center gap-2 rounded border border-border px-2 py-1 text-xs">
                                <span class="truncate max-w-[12rem]">{url}</span>
                                <button
                                    type="button"
                                    class="text-status-error-text"
                                    aria-label="Quitar imagen"
                                    on:click=move |_| form.remove_image(&target)
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    }).collect_view()}
                </ul>
                <input
                    id="venue-image"
                    type="file"
                    accept=IMAGE_TYPES.join(",")
                    class="block text-sm text-fg-muted"
                    disabled=move || uploading.get()
                    on:change=on_file
                />
                <Show when=move || uploading.get()>
                    <p class="text-xs text-fg-muted">"Cargando imagen..."</p>
                </Show>
            </div>
            <InlineErrorMessage error=vm.error />
            <div class="flex justify-end gap-2">
                <button
                    type="button"
                    class=format!("inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold {}", ButtonVariant::Secondary.classes())
                    on:click=move |_| vm.close_editor()
                >
                    "Cancelar"
                </button>
                <Button loading=saving attr:type="submit">"Guardar"</Button>
            </div>
        </form>
    }
}
