use super::{
    client::ApiClient,
    types::{ApiError, Page, Venue, VenueFilter, VenuePayload},
};

impl ApiClient {
    pub async fn list_venues(&self, filter: &VenueFilter) -> Result<Page<Venue>, ApiError> {
        let url = self.endpoint("/escenarios").await;
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

    pub async fn get_venue(&self, id: i64) -> Result<Venue, ApiError> {
        let url = self.endpoint(&format!("/escenarios/{}", id)).await;
        let response = self.send(|client| client.get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn create_venue(&self, payload: &VenuePayload) -> Result<Venue, ApiError> {
        let url = self.endpoint("/escenarios").await;
        let response = self.send(|client| client.post(url).json(payload)).await?;
        self.map_json_response(response).await
    }

    pub async fn update_venue(&self, id: i64, payload: &VenuePayload) -> Result<Venue, ApiError> {
        let url = self.endpoint(&format!("/escenarios/{}", id)).await;
        let response = self.send(|client| client.put(url).json(payload)).await?;
        self.map_json_response(response).await
    }

    pub async fn delete_venue(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/escenarios/{}", id)).await;
        let response = self.send(|client| client.delete(url)).await?;
        self.map_empty_response(response).await
    }
}
