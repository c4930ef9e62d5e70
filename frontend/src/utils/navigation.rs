use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const LOGIN_PATH: &str = "/login";

// Keep path separators readable in the address bar; everything else that
// could break a query string is escaped.
const RETURN_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.');

/// Full page navigation. Outside the browser this only logs.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("navigation to {} skipped outside the browser", path);
}

/// Navigates to `path` after `delay_ms`, leaving the current view visible
/// in the meantime.
pub fn schedule_redirect(path: &str, delay_ms: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        let path = path.to_string();
        leptos::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            redirect_to(&path);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("redirect to {} in {} ms skipped outside the browser", path, delay_ms);
}

/// Path plus query string of the current page.
pub fn current_location() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let location = web_sys::window()?.location();
        let path = location.pathname().ok()?;
        let search = location.search().unwrap_or_default();
        Some(format!("{}{}", path, search))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub fn is_on_login_page() -> bool {
    current_location()
        .map(|location| location == LOGIN_PATH || location.starts_with("/login?"))
        .unwrap_or(false)
}

/// `/login?redirect=<return_to>` with the return path escaped.
pub fn login_url(return_to: &str) -> String {
    match safe_return_target(return_to) {
        Some(target) => format!(
            "{}?redirect={}",
            LOGIN_PATH,
            utf8_percent_encode(&target, RETURN_PATH)
        ),
        None => LOGIN_PATH.to_string(),
    }
}

/// Accepts only same-origin absolute paths (`/x`, not `//host` or `http:`).
pub fn safe_return_target(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('/') || trimmed.starts_with("//") || trimmed.contains('\\') {
        return None;
    }
    if trimmed == LOGIN_PATH || trimmed.starts_with("/login?") {
        return None;
    }
    Some(trimmed.to_string())
}

/// Query string from key/value pairs, values escaped.
pub fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, NON_ALPHANUMERIC)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_escapes_query_of_return_path() {
        let url = login_url("/reservar?escenario=5&fecha=2025-06-15&hora=14:00");
        assert_eq!(
            url,
            "/login?redirect=/reservar%3Fescenario%3D5%26fecha%3D2025-06-15%26hora%3D14%3A00"
        );
    }

    #[test]
    fn login_url_drops_foreign_targets() {
        assert_eq!(login_url("https://evil.example"), "/login");
        assert_eq!(login_url("//evil.example/x"), "/login");
        assert_eq!(login_url("/login?redirect=/x"), "/login");
    }

    #[test]
    fn safe_return_target_accepts_local_paths() {
        assert_eq!(
            safe_return_target(" /mis-reservas "),
            Some("/mis-reservas".to_string())
        );
        assert_eq!(safe_return_target("/\\evil"), None);
        assert_eq!(safe_return_target(""), None);
    }

    #[test]
    fn with_query_escapes_values() {
        let url = with_query(
            "/reservar",
            &[("escenario", "5".into()), ("hora", "14:00".into())],
        );
        assert_eq!(url, "/reservar?escenario=5&hora=14%3A00");
        assert_eq!(with_query("/x", &[]), "/x");
    }
}
