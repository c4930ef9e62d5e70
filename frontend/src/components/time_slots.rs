use chrono::NaiveDate;
use leptos::*;

use crate::{
    components::layout::LoadingSpinner,
    domain::{selection::TimesState, slot_time::SlotTime},
};

/// `14:00 - 16:00`, or just the start when the end would cross midnight.
pub fn slot_label(start: SlotTime) -> String {
    match start.reservation_end() {
        Ok(end) => format!("{} - {}", start, end),
        Err(_) => start.to_string(),
    }
}

/// Whether a two-hour block starting at `start` ends the same day.
pub fn is_bookable(start: SlotTime) -> bool {
    start.reservation_end().is_ok()
}

/// Start times for the selected date. Loading, failure and "fully booked"
/// are three distinct states.
#[component]
pub fn TimeSlotPicker(
    #[prop(into)] date: Signal<Option<NaiveDate>>,
    #[prop(into)] times: Signal<TimesState>,
    #[prop(into)] selected: Signal<Option<SlotTime>>,
    on_select: Callback<SlotTime>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-4">
            <h3 class="text-base font-semibold text-fg mb-3">
                {move || match date.get() {
                    Some(date) => format!("Horarios para el {}", date.format("%d/%m/%Y")),
                    None => "Horarios disponibles".to_string(),
                }}
            </h3>
            {move || {
                if date.get().is_none() {
                    return view! {
                        <p class="text-sm text-fg-muted">"Selecciona una fecha en el calendario."</p>
                    }
                    .into_view();
                }
                match times.get() {
                    TimesState::Idle | TimesState::Loading => view! { <LoadingSpinner /> }.into_view(),
                    TimesState::Failed(_) => view! {
                        <p class="text-sm text-status-error-text">
                            "No fue posible consultar los horarios. No hay disponibilidad para mostrar."
                        </p>
                    }
                    .into_view(),
                    TimesState::Loaded(slots) if slots.is_empty() => view! {
                        <p class="text-sm text-fg-muted" data-state="fully-booked">
                            "No hay horarios disponibles para esta fecha."
                        </p>
                    }
                    .into_view(),
                    TimesState::Loaded(slots) => view! {
                        <div class="grid grid-cols-2 sm:grid-cols-3 gap-2">
                            {slots
                                .into_iter()
                                .map(|slot| {
                                    let bookable = is_bookable(slot);
                                    let is_selected = move || selected.get() == Some(slot);
                                    view! {
                                        <button
                                            type="button"
                                            class=move || {
                                                if !bookable {
                                                    "rounded-md px-3 py-2 text-sm font-medium border border-border text-fg-muted opacity-50 cursor-not-allowed"
                                                } else if is_selected() {
                                                    "rounded-md px-3 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                                                } else {
                                                    "rounded-md px-3 py-2 text-sm font-medium border border-border text-fg hover:bg-surface-muted"
                                                }
                                            }
                                            disabled=!bookable
                                            title=(!bookable).then_some("Terminaría después de medianoche")
                                            aria-pressed=is_selected
                                            on:click=move |_| {
                                                if bookable {
                                                    on_select.call(slot);
                                                }
                                            }
                                        >
                                            {slot_label(slot)}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_view(),
                }
            }}
        </div>
    }
}
