use crate::api::{VenueFilter, VenueState};
use leptos::*;

/// Filter inputs as typed; applied to the query only on submit.
#[derive(Clone, Copy)]
pub struct VenueFilterState {
    pub search: RwSignal<String>,
    pub state: RwSignal<String>,
}

impl Default for VenueFilterState {
    fn default() -> Self {
        Self {
            search: create_rw_signal(String::new()),
            state: create_rw_signal(String::new()),
        }
    }
}

impl VenueFilterState {
    pub fn to_filter(&self) -> VenueFilter {
        build_filter(&self.search.get_untracked(), &self.state.get_untracked())
    }

    pub fn reset(&self) {
        self.search.set(String::new());
        self.state.set(String::new());
    }
}

pub fn build_filter(search: &str, state: &str) -> VenueFilter {
    let search = search.trim();
    VenueFilter {
        page: Some(1),
        search: (!search.is_empty()).then(|| search.to_string()),
        state: VenueState::from_param(state),
        locality_id: None,
    }
}

pub fn state_options() -> Vec<(String, String)> {
    [
        VenueState::Available,
        VenueState::Maintenance,
        VenueState::Inactive,
    ]
    .iter()
    .map(|state| (state.as_param().to_string(), state.label().to_string()))
    .collect()
}

/// Capacity line; zero means the venue does not publish one.
pub fn capacity_label(capacity: u32) -> String {
    if capacity == 0 {
        "Capacidad no especificada".into()
    } else {
        format!("Capacidad: {} personas", capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_filter_trims_search_and_resets_page() {
        let filter = build_filter("  coliseo ", "mantenimiento");
        assert_eq!(filter.page, Some(1));
        assert_eq!(filter.search.as_deref(), Some("coliseo"));
        assert_eq!(filter.state, Some(VenueState::Maintenance));
        assert_eq!(build_filter(" ", "").search, None);
        assert_eq!(build_filter("", "otro").state, None);
    }

    #[test]
    fn capacity_label_handles_unpublished_capacity() {
        assert_eq!(capacity_label(0), "Capacidad no especificada");
        assert_eq!(capacity_label(40), "Capacidad: 40 personas");
    }
}
