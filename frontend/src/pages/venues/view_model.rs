use super::utils::VenueFilterState;
use crate::api::{ApiClient, ApiError, Page, Pagination, Venue, VenueFilter};
use leptos::*;

#[derive(Clone, Copy)]
pub struct VenuesViewModel {
    pub filter: VenueFilterState,
    pub query: RwSignal<VenueFilter>,
    pub venues: Resource<VenueFilter, Result<Page<Venue>, ApiError>>,
}

impl VenuesViewModel {
    pub fn apply_filters(&self) {
        self.query.set(self.filter.to_filter());
    }

    pub fn clear_filters(&self) {
        self.filter.reset();
        self.query.set(VenueFilter::default());
    }

    pub fn go_to_page(&self, page: u32) {
        self.query.update(|query| query.page = Some(page.max(1)));
    }

    pub fn pagination(&self) -> Signal<Option<Pagination>> {
        let venues = self.venues;
        Signal::derive(move || {
            venues
                .get()
                .and_then(|result| result.ok())
                .map(|page| page.pagination)
        })
    }
}

pub fn use_venues_view_model() -> VenuesViewModel {
    let api = store_value(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let filter = VenueFilterState::default();
    let query = create_rw_signal(VenueFilter::default());
    let venues = create_resource(
        move || query.get(),
        move |filter| {
            let api = api.get_value();
            async move { api.list_venues(&filter).await }
        },
    );

    VenuesViewModel {
        filter,
        query,
        venues,
    }
}
