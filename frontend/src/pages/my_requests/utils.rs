use crate::{api::RequestFilter, domain::status::RequestStatus};
use leptos::*;

pub use crate::pages::venue_detail::utils::parse_id;

#[derive(Clone, Copy)]
pub struct RequestFilterState {
    pub status: RwSignal<String>,
    pub search: RwSignal<String>,
}

impl Default for RequestFilterState {
    fn default() -> Self {
        Self {
            status: create_rw_signal(String::new()),
            search: create_rw_signal(String::new()),
        }
    }
}

impl RequestFilterState {
    pub fn to_filter(&self) -> RequestFilter {
        build_filter(&self.status.get_untracked(), &self.search.get_untracked())
    }

    pub fn reset(&self) {
        self.status.set(String::new());
        self.search.set(String::new());
    }
}

pub fn build_filter(status: &str, search: &str) -> RequestFilter {
    let search = search.trim();
    RequestFilter {
        page: Some(1),
        status: RequestStatus::parse(status),
        search: (!search.is_empty()).then(|| search.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_filter_parses_status_and_resets_page() {
        let filter = build_filter("aprobada", "  coliseo ");
        assert_eq!(filter.page, Some(1));
        assert_eq!(filter.status, Some(RequestStatus::Approved));
        assert_eq!(filter.search.as_deref(), Some("coliseo"));
        let all = build_filter("", "");
        assert_eq!(all.status, None);
        assert_eq!(all.search, None);
    }
}
