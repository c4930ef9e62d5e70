use chrono::NaiveDate;
use leptos::*;

use crate::{components::time_slots::slot_label, domain::slot_time::SlotTime};

pub fn long_date(date: NaiveDate) -> String {
    const MONTHS: [&str; 12] = [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
        "septiembre", "octubre", "noviembre", "diciembre",
    ];
    use chrono::Datelike;
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

#[component]
pub fn SlotSummary(
    #[prop(into)] venue_name: Signal<Option<String>>,
    #[prop(into)] date: Signal<Option<NaiveDate>>,
    #[prop(into)] time: Signal<Option<SlotTime>>,
) -> impl IntoView {
    view! {
        <dl class="grid grid-cols-1 sm:grid-cols-3 gap-4 bg-surface-muted rounded-lg p-4 text-sm">
            <div>
                <dt class="font-medium text-fg-muted">"Escenario"</dt>
                <dd class="text-fg">{move || venue_name.get().unwrap_or_else(|| "...".into())}</dd>
            </div>
            <div>
                <dt class="font-medium text-fg-muted">"Fecha"</dt>
                <dd class="text-fg">{move || date.get().map(long_date).unwrap_or_else(|| "Sin fecha".into())}</dd>
            </div>
            <div>
                <dt class="font-medium text-fg-muted">"Horario"</dt>
                <dd class="text-fg">{move || time.get().map(slot_label).unwrap_or_else(|| "Sin horario".into())}</dd>
            </div>
        </dl>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_is_spanish() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(long_date(date), "15 de junio de 2025");
    }
}
