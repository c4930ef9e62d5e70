use crate::{
    api::ApiError,
    components::{layout::Layout, time_slots::TimeSlotPicker},
    pages::reservation::{
        components::{
            confirmation::ReservationConfirmation, form::ReservationForm, summary::SlotSummary,
        },
        utils::ReservationQuery,
        view_model::use_reservation_view_model,
    },
};
use leptos::*;

#[component]
pub fn ReservationPanel(query: ReservationQuery) -> impl IntoView {
    let vm = use_reservation_view_model(query);
    let selection = vm.booking.selection;
    let venue = vm.venue;
    let venue_name = Signal::derive(move || {
        venue.get().and_then(|result| result.ok()).map(|venue| venue.name)
    });
    let capacity = Signal::derive(move || {
        venue
            .get()
            .and_then(|result| result.ok())
            .map(|venue| venue.capacity)
            .unwrap_or(0)
    });
    let date = Signal::derive(move || selection.with(|s| s.date()));
    let time = Signal::derive(move || selection.with(|s| s.time()));
    let times = Signal::derive(move || selection.with(|s| s.times().clone()));
    let can_submit = Signal::derive(move || selection.with(|s| s.complete().is_some()));
    let back_href = format!("/escenarios/{}", query.venue_id);

    view! {
        <Layout title="Solicitar reserva">
            <div class="max-w-3xl mx-auto space-y-6">
                <div>
                    <a href=back_href class="text-sm text-action-primary-bg hover:underline">
                        "← Volver al escenario"
                    </a>
                    <h1 class="mt-2 text-2xl font-bold text-fg">"Solicitar reserva"</h1>
                </div>
                {move || match vm.confirmation.get() {
                    Some(request) => view! { <ReservationConfirmation request=request /> }.into_view(),
                    None => view! {
                        <SlotSummary venue_name=venue_name date=date time=time />
                        <TimeSlotPicker
                            date=date
                            times=times
                            selected=time
                            on_select=Callback::new(move |time| vm.select_time(time))
                        />
                        <div class="bg-surface-elevated rounded-lg shadow p-6">
                            <ReservationForm
                                form=vm.form
                                purposes=vm.purpose_options()
                                capacity=capacity
                                error=vm.error
                                pending=vm.submit_action.pending()
                                can_submit=can_submit
                                on_submit=Callback::new(move |_| vm.submit())
                            />
                        </div>
                    }
                    .into_view(),
                }}
            </div>
        </Layout>
    }
}

/// Shown when the query string does not describe a slot.
#[component]
pub fn InvalidSelection(error: ApiError) -> impl IntoView {
    view! {
        <div class="max-w-xl mx-auto text-center py-12 space-y-3">
            <h1 class="text-xl font-semibold text-fg">"No pudimos identificar la reserva"</h1>
            <p class="text-fg-muted">{error.error}</p>
            <a href="/escenarios" class="text-action-primary-bg hover:underline">"Elegir un escenario"</a>
        </div>
    }
}
