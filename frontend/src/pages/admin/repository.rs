use crate::{
    api::{ApiClient, ApiError, RequestFilter, VenueFilter},
    domain::status::RequestStatus,
};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DashboardSummary {
    pub pending_requests: u64,
    pub in_process_requests: u64,
    pub venues: u64,
    pub users: u64,
}

#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
}

impl AdminRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    async fn count_requests(&self, status: RequestStatus) -> Result<u64, ApiError> {
        let filter = RequestFilter {
            status: Some(status),
            ..RequestFilter::default()
        };
        Ok(self.client.list_requests(&filter).await?.pagination.total)
    }

    /// Totals for the dashboard, fetched concurrently.
    pub async fn summary(&self) -> Result<DashboardSummary, ApiError> {
        let venue_filter = VenueFilter::default();
        let (pending, in_process, venues, users) = futures::join!(
            self.count_requests(RequestStatus::Pending),
            self.count_requests(RequestStatus::InProcess),
            self.client.list_venues(&venue_filter),
            self.client.list_users(None, None),
        );
        Ok(DashboardSummary {
            pending_requests: pending?,
            in_process_requests: in_process?,
            venues: venues?.pagination.total,
            users: users?.pagination.total,
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn page(total: u64) -> serde_json::Value {
        json!({
            "success": true,
            "data": { "data": [], "pagination": { "page": 1, "total": total, "total_pages": 1 } }
        })
    }

    #[tokio::test]
    async fn summary_reads_totals_from_pagination() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/requests").query_param("estado", "pendiente");
            then.status(200).json_body(page(4));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/requests").query_param("estado", "en_proceso");
            then.status(200).json_body(page(2));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/escenarios");
            then.status(200).json_body(page(12));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/usuarios");
            then.status(200).json_body(page(57));
        });
        let repo = AdminRepository::new(ApiClient::new_with_base_url(server.url("/api")));
        let summary = repo.summary().await.unwrap();
        assert_eq!(
            summary,
            DashboardSummary {
                pending_requests: 4,
                in_process_requests: 2,
                venues: 12,
                users: 57,
            }
        );
    }

    #[tokio::test]
    async fn summary_fails_when_any_count_fails() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/requests");
            then.status(200).json_body(page(1));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/escenarios");
            then.status(500).json_body(json!({ "message": "Error interno" }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/usuarios");
            then.status(200).json_body(page(3));
        });
        let repo = AdminRepository::new(ApiClient::new_with_base_url(server.url("/api")));
        let error = repo.summary().await.unwrap_err();
        assert_eq!(error.error, "Error interno");
    }
}
