use crate::{
    api::{ReservationRequest, StatusHistoryEntry},
    components::{status_badge::StatusBadge, time_slots::slot_label},
    domain::status::RequestStatus,
    utils::time,
};
use leptos::*;

/// `(value, label)` options for a status filter select.
pub fn status_options() -> Vec<(String, String)> {
    RequestStatus::ALL
        .iter()
        .map(|status| (status.wire_name().to_string(), status.label().to_string()))
        .collect()
}

fn history_line(entry: &StatusHistoryEntry) -> String {
    match entry.previous {
        Some(previous) if previous != entry.next => {
            format!("{} → {}", previous.label(), entry.next.label())
        }
        _ => entry.next.label().to_string(),
    }
}

#[component]
pub fn StatusTimeline(history: Vec<StatusHistoryEntry>) -> impl IntoView {
    if history.is_empty() {
        return view! {
            <p class="text-sm text-fg-muted">"Sin cambios de estado registrados."</p>
        }
        .into_view();
    }
    view! {
        <ol class="relative border-l border-border ml-2 space-y-4">
            {history
                .into_iter()
                .map(|entry| {
                    let line = history_line(&entry);
                    let when = entry.timestamp.as_deref().map(time::display_timestamp);
                    let actor = entry.actor.map(|actor| actor.name);
                    view! {
                        <li class="ml-4">
                            <span
                                class="absolute -left-1.5 mt-1.5 h-3 w-3 rounded-full"
                                style=format!("background-color: {}", entry.next.color())
                            ></span>
                            <p class="text-sm font-medium text-fg">{line}</p>
                            <p class="text-xs text-fg-muted">
                                {when.unwrap_or_default()}
                                {actor.map(|name| format!(" · {}", name))}
                            </p>
                            {entry.note.map(|note| view! {
                                <p class="mt-1 text-sm text-fg">{note}</p>
                            })}
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
    .into_view()
}

#[component]
pub fn RequestDetailCard(request: ReservationRequest) -> impl IntoView {
    let rows = [
        ("Escenario", Some(request.venue_label())),
        ("Solicitante", request.requester.as_ref().map(|r| r.name.clone())),
        ("Fecha", Some(time::format_iso(request.date))),
        (
            "Horario",
            Some(format!("{} - {}", request.start_time, request.end_time)),
        ),
        ("Propósito", request.purpose.as_ref().map(|p| p.name.clone())),
        ("Participantes", Some(request.participants.to_string())),
        ("Observaciones", request.notes.clone()),
        (
            "Creada",
            request.created_at.as_deref().map(time::display_timestamp),
        ),
    ];

    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-6 space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-fg">
                    {format!("Solicitud #{}", request.id)}
                </h2>
                <StatusBadge status=request.status />
            </div>
            <dl class="grid grid-cols-1 sm:grid-cols-2 gap-4 text-sm">
                {rows
                    .into_iter()
                    .filter_map(|(label, value)| value.map(|value| (label, value)))
                    .map(|(label, value)| view! {
                        <div>
                            <dt class="font-medium text-fg-muted">{label}</dt>
                            <dd class="text-fg">{value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
            <div>
                <h3 class="text-sm font-semibold text-fg mb-3">"Historial"</h3>
                <StatusTimeline history=request.history.clone() />
            </div>
        </div>
    }
}

/// One row per request; `detail_base` is the path the id is appended to.
#[component]
pub fn RequestsTable(
    requests: Vec<ReservationRequest>,
    #[prop(into)] detail_base: String,
    #[prop(optional)] show_requester: bool,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-surface-elevated rounded-lg shadow">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"#"</th>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Escenario"</th>
                        {show_requester.then(|| view! {
                            <th class="px-4 py-2 text-left font-medium text-fg-muted">"Solicitante"</th>
                        })}
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Fecha"</th>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Horario"</th>
                        <th class="px-4 py-2 text-left font-medium text-fg-muted">"Estado"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {requests
                        .into_iter()
                        .map(|request| {
                            let href = format!("{}/{}", detail_base, request.id);
                            let requester = request
                                .requester
                                .as_ref()
                                .map(|r| r.name.clone())
                                .unwrap_or_default();
                            view! {
                                <tr class="hover:bg-surface-muted">
                                    <td class="px-4 py-2">
                                        <a href=href class="text-action-primary-bg hover:underline">
                                            {request.id}
                                        </a>
                                    </td>
                                    <td class="px-4 py-2 text-fg">{request.venue_label()}</td>
                                    {show_requester.then(|| view! {
                                        <td class="px-4 py-2 text-fg">{requester}</td>
                                    })}
                                    <td class="px-4 py-2 text-fg">{time::format_iso(request.date)}</td>
                                    <td class="px-4 py-2 text-fg">{slot_label(request.start_time)}</td>
                                    <td class="px-4 py-2"><StatusBadge status=request.status /></td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
