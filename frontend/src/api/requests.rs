use super::{
    client::ApiClient,
    types::{
        ApiError, ChangeStatusRequest, CreateReservationRequest, Page, Purpose, RequestFilter,
        RequestStateOption, ReservationRequest,
    },
};

impl ApiClient {
    /// Submits a reservation request. Never retried.
    pub async fn create_request(&self, payload: &CreateReservationRequest) -> Result<(), ApiError> {
        let url = self.endpoint("/requests").await;
        log::debug!(
            "requesting venue {} on {} {}-{}",
            payload.venue_id,
            payload.date,
            payload.start_time,
            payload.end_time
        );
        let response = self.send(|client| client.post(url).json(payload)).await?;
        self.map_empty_response(response).await
    }

    pub async fn list_requests(
        &self,
        filter: &RequestFilter,
    ) -> Result<Page<ReservationRequest>, ApiError> {
        let url = self.endpoint("/requests").await;
        let params = filter.to_params();
        let response = self
            .send(|client| {
                let mut request = client.get(url);
                if !params.is_empty() {
                    request = request.query(&params);
                }
                request
            })
            .await?;
        self.map_page_response(response).await
    }

    pub async fn get_request(&self, id: i64) -> Result<ReservationRequest, ApiError> {
        let url = self.endpoint(&format!("/requests/{}", id)).await;
        let response = self.send(|client| client.get(url)).await?;
        self.map_json_response(response).await
    }

    /// Asks the API to move a request to another state. The returned status
    /// is whatever the server decided; callers reload the request afterwards.
    pub async fn change_request_status(
        &self,
        id: i64,
        payload: &ChangeStatusRequest,
    ) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/requests/{}/cambiar-estado", id))
            .await;
        let response = self.send(|client| client.put(url).json(payload)).await?;
        self.map_empty_response(response).await
    }

    pub async fn request_states(&self) -> Result<Vec<RequestStateOption>, ApiError> {
        let url = self.endpoint("/request-states").await;
        let response = self.send(|client| client.get(url)).await?;
        self.map_list_response(response).await
    }

    pub async fn purposes(&self) -> Result<Vec<Purpose>, ApiError> {
        let url = self.endpoint("/purposes").await;
        let response = self.send(|client| client.get(url)).await?;
        self.map_list_response(response).await
    }
}
