use chrono::NaiveDate;
use leptos::*;

use crate::{
    domain::calendar::{CalendarDay, CalendarMonth, WEEKDAY_HEADERS},
    state::booking::OpenDays,
};

fn day_class(selected: bool, selectable: bool, is_today: bool) -> String {
    let base = "h-10 w-full rounded-md text-sm font-medium transition-colors";
    let state = if selected {
        "bg-action-primary-bg text-action-primary-text"
    } else if selectable {
        "bg-status-success-bg text-status-success-text hover:bg-action-primary-bg hover:text-action-primary-text"
    } else {
        "bg-surface-muted text-fg-muted cursor-not-allowed opacity-60"
    };
    let today = if is_today { "ring-2 ring-action-primary-bg" } else { "" };
    format!("{} {} {}", base, state, today)
}

/// Month grid with open days highlighted. Past days and days without
/// availability are rendered as disabled buttons.
#[component]
pub fn AvailabilityCalendar(
    #[prop(into)] month: Signal<Option<CalendarMonth>>,
    #[prop(into)] open_days: Signal<OpenDays>,
    #[prop(into)] selected: Signal<Option<NaiveDate>>,
    #[prop(into)] can_go_back: Signal<bool>,
    #[prop(into)] can_go_forward: Signal<bool>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
    on_select: Callback<NaiveDate>,
) -> impl IntoView {
    let title = move || month.with(|m| m.as_ref().map(|m| m.title.clone()).unwrap_or_default());
    let render_cell = move |cell: Option<CalendarDay>| match cell {
        None => view! { <div aria-hidden="true"></div> }.into_view(),
        Some(day) => {
            let date = day.date;
            let selectable = !day.is_past
                && open_days.with(|days| days.as_set().is_some_and(|set| set.contains(&date)));
            let is_selected = selected.get() == Some(date);
            view! {
                <button
                    type="button"
                    class=day_class(is_selected, selectable, day.is_today)
                    disabled=!selectable
                    aria-pressed=is_selected
                    aria-label=day.label.clone()
                    data-date=day.iso.clone()
                    on:click=move |_| on_select.call(date)
                >
                    {day.number()}
                </button>
            }
            .into_view()
        }
    };

    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-4">
            <div class="flex items-center justify-between mb-3">
                <button
                    type="button"
                    class="rounded-md px-2 py-1 text-sm text-fg-muted hover:text-fg disabled:opacity-40"
                    disabled=move || !can_go_back.get()
                    on:click=move |_| on_previous.call(())
                    aria-label="Mes anterior"
                >
                    "‹"
                </button>
                <h3 class="text-base font-semibold text-fg capitalize">{title}</h3>
                <button
                    type="button"
                    class="rounded-md px-2 py-1 text-sm text-fg-muted hover:text-fg disabled:opacity-40"
                    disabled=move || !can_go_forward.get()
                    on:click=move |_| on_next.call(())
                    aria-label="Mes siguiente"
                >
                    "›"
                </button>
            </div>
            <div class="grid grid-cols-7 gap-1 text-center text-xs font-semibold text-fg-muted mb-1">
                {WEEKDAY_HEADERS.iter().map(|name| view! { <div>{*name}</div> }).collect_view()}
            </div>
            <div class="grid grid-cols-7 gap-1">
                {move || {
                    month.with(|month| {
                        month
                            .as_ref()
                            .map(|month| {
                                month
                                    .cells()
                                    .into_iter()
                                    .map(|cell| render_cell(cell.cloned()))
                                    .collect_view()
                            })
                            .unwrap_or_else(|| ().into_view())
                    })
                }}
            </div>
            {move || match open_days.get() {
                OpenDays::Loading => view! {
                    <p class="mt-3 text-xs text-fg-muted">"Consultando disponibilidad..."</p>
                }.into_view(),
                OpenDays::Failed => view! {
                    <p class="mt-3 text-xs text-status-error-text">"No hay disponibilidad para mostrar."</p>
                }.into_view(),
                OpenDays::Loaded(days) if days.is_empty() => view! {
                    <p class="mt-3 text-xs text-fg-muted">"No hay días disponibles este mes."</p>
                }.into_view(),
                OpenDays::Loaded(_) => ().into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::day_class;

    #[test]
    fn day_class_marks_disabled_and_selected_days() {
        assert!(day_class(false, false, false).contains("cursor-not-allowed"));
        assert!(day_class(true, true, false).contains("bg-action-primary-bg"));
        assert!(day_class(false, true, true).contains("ring-2"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::domain::calendar::build_grid;
    use crate::test_support::ssr::render_to_string;
    use std::collections::BTreeSet;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn only_open_future_days_are_enabled() {
        let html = render_to_string(move || {
            let today = date(10);
            let grid = build_grid(2025, 6, today).ok();
            let open: BTreeSet<NaiveDate> = [date(5), date(15)].into_iter().collect();
            view! {
                <AvailabilityCalendar
                    month=Signal::derive(move || grid.clone())
                    open_days=Signal::derive(move || OpenDays::Loaded(open.clone()))
                    selected=Signal::derive(|| None)
                    can_go_back=Signal::derive(|| false)
                    can_go_forward=Signal::derive(|| true)
                    on_previous=Callback::new(|_| {})
                    on_next=Callback::new(|_| {})
                    on_select=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("junio 2025"));
        let enabled = html
            .split("<button")
            .filter(|chunk| chunk.contains("data-date=\"2025-06-15\""))
            .all(|chunk| !chunk.contains("disabled"));
        assert!(enabled);
        let past_open_day = html
            .split("<button")
            .find(|chunk| chunk.contains("data-date=\"2025-06-05\""))
            .unwrap();
        assert!(past_open_day.contains("disabled"));
        let closed_day = html
            .split("<button")
            .find(|chunk| chunk.contains("data-date=\"2025-06-20\""))
            .unwrap();
        assert!(closed_day.contains("disabled"));
    }

    #[test]
    fn failed_availability_is_announced() {
        let html = render_to_string(move || {
            let grid = build_grid(2025, 6, date(10)).ok();
            view! {
                <AvailabilityCalendar
                    month=Signal::derive(move || grid.clone())
                    open_days=Signal::derive(|| OpenDays::Failed)
                    selected=Signal::derive(|| None)
                    can_go_back=Signal::derive(|| false)
                    can_go_forward=Signal::derive(|| true)
                    on_previous=Callback::new(|_| {})
                    on_next=Callback::new(|_| {})
                    on_select=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("No hay disponibilidad para mostrar."));
    }
}
