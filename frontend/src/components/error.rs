use crate::api::ApiError;
use leptos::*;
use serde_json::Value;

/// Field messages carried in `details`: either a list of strings or an
/// object mapping field names to a message or a list of messages.
pub fn detail_messages(details: Option<&Value>) -> Vec<String> {
    let text = |value: &Value| value.as_str().map(str::to_string);
    match details {
        Some(Value::Array(items)) => items.iter().filter_map(text).collect(),
        Some(Value::Object(fields)) => fields
            .values()
            .flat_map(|value| match value {
                Value::Array(items) => items.iter().filter_map(text).collect::<Vec<_>>(),
                other => text(other).into_iter().collect(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || {
                    let messages = error
                        .get()
                        .map(|e| detail_messages(e.details.as_ref()))
                        .unwrap_or_default();
                    (!messages.is_empty()).then(|| view! {
                        <ul class="list-disc list-inside text-sm">
                            {messages.into_iter().map(|message| view! { <li>{message}</li> }).collect_view()}
                        </ul>
                    })
                }}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detail_messages_flattens_field_maps() {
        let details = json!({
            "email": ["El correo ya está registrado"],
            "telefono": "Formato inválido"
        });
        let mut messages = detail_messages(Some(&details));
        messages.sort();
        assert_eq!(
            messages,
            vec!["El correo ya está registrado", "Formato inválido"]
        );
        assert!(detail_messages(Some(&json!(42))).is_empty());
        assert!(detail_messages(None).is_empty());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError {
                details: Some(json!(["El nombre es obligatorio", "El correo no es válido"])),
                ..ApiError::validation("Datos inválidos")
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Datos inválidos"));
        assert!(html.contains("El nombre es obligatorio"));
        assert!(html.contains("El correo no es válido"));
    }

    #[test]
    fn inline_error_is_empty_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
