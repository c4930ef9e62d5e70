use super::utils::RequestFilterState;
use crate::api::{ApiClient, ApiError, Page, Pagination, RequestFilter, ReservationRequest};
use leptos::*;

/// Paginated, filterable request list. Shared by the personal list and the
/// staff review page; the API scopes results to what the caller may see.
#[derive(Clone, Copy)]
pub struct RequestListViewModel {
    pub filter: RequestFilterState,
    pub query: RwSignal<RequestFilter>,
    pub requests: Resource<RequestFilter, Result<Page<ReservationRequest>, ApiError>>,
}

impl RequestListViewModel {
    pub fn apply_filters(&self) {
        self.query.set(self.filter.to_filter());
    }

    pub fn clear_filters(&self) {
        self.filter.reset();
        self.query.set(RequestFilter::default());
    }

    pub fn go_to_page(&self, page: u32) {
        self.query.update(|query| query.page = Some(page.max(1)));
    }

    pub fn reload(&self) {
        self.requests.refetch();
    }

    pub fn pagination(&self) -> Signal<Option<Pagination>> {
        let requests = self.requests;
        Signal::derive(move || {
            requests
                .get()
                .and_then(|result| result.ok())
                .map(|page| page.pagination)
        })
    }
}

pub fn use_request_list_view_model() -> RequestListViewModel {
    let api = store_value(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let filter = RequestFilterState::default();
    let query = create_rw_signal(RequestFilter::default());
    let requests = create_resource(
        move || query.get(),
        move |filter| {
            let api = api.get_value();
            async move { api.list_requests(&filter).await }
        },
    );
    RequestListViewModel {
        filter,
        query,
        requests,
    }
}

pub fn use_request_detail(
    request_id: i64,
) -> (RwSignal<u32>, Resource<(i64, u32), Result<ReservationRequest, ApiError>>) {
    let api = store_value(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let reload = create_rw_signal(0u32);
    let request = create_resource(
        move || (request_id, reload.get()),
        move |(id, _)| {
            let api = api.get_value();
            async move { api.get_request(id).await }
        },
    );
    (reload, request)
}
