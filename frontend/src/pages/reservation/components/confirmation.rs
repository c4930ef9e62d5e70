use crate::{
    api::CreateReservationRequest,
    components::time_slots::slot_label,
    pages::reservation::{components::summary::long_date, utils::MY_RESERVATIONS_PATH},
};
use leptos::*;

#[component]
pub fn ReservationConfirmation(request: CreateReservationRequest) -> impl IntoView {
    view! {
        <div class="text-center py-10 space-y-3" data-state="confirmed">
            <h2 class="text-2xl font-bold text-status-success-text">"¡Solicitud enviada!"</h2>
            <p class="text-fg">
                {format!("{}, {}", long_date(request.date), slot_label(request.start_time))}
            </p>
            <p class="text-sm text-fg-muted">
                "Te avisaremos cuando sea revisada. Te llevamos a tus reservas..."
            </p>
            <a href=MY_RESERVATIONS_PATH class="inline-block text-sm text-action-primary-bg hover:underline">
                "Ir a mis reservas"
            </a>
        </div>
    }
}
