use crate::{
    components::{calendar::AvailabilityCalendar, time_slots::TimeSlotPicker},
    pages::venue_detail::view_model::VenueDetailViewModel,
};
use leptos::*;

/// Calendar, time picker and the reserve button for one venue.
#[component]
pub fn BookingPanel(vm: VenueDetailViewModel) -> impl IntoView {
    let selection = vm.selection();
    let cursor = vm.booking.cursor;
    let selected_date = Signal::derive(move || selection.with(|s| s.date()));
    let selected_time = Signal::derive(move || selection.with(|s| s.time()));
    let times = Signal::derive(move || selection.with(|s| s.times().clone()));
    let ready = move || selection.with(|s| s.complete().is_some());

    view! {
        <div class="space-y-4">
            <AvailabilityCalendar
                month=vm.month()
                open_days=vm.booking.open_days()
                selected=selected_date
                can_go_back=Signal::derive(move || cursor.get().can_go_back())
                can_go_forward=Signal::derive(move || cursor.get().can_go_forward())
                on_previous=Callback::new(move |_| vm.previous_month())
                on_next=Callback::new(move |_| vm.next_month())
                on_select=Callback::new(move |date| vm.select_date(date))
            />
            <TimeSlotPicker
                date=selected_date
                times=times
                selected=selected_time
                on_select=Callback::new(move |time| vm.select_time(time))
            />
            <button
                type="button"
                class="w-full px-4 py-3 rounded-md bg-action-primary-bg text-action-primary-text font-semibold disabled:opacity-50"
                disabled=move || !ready()
                on:click=move |_| vm.reserve()
            >
                "Reservar"
            </button>
        </div>
    }
}
