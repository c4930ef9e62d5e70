use super::{
    client::ApiClient,
    types::{ApiError, Page, UserPayload, UserProfile},
};

impl ApiClient {
    pub async fn list_users(
        &self,
        page: Option<u32>,
        search: Option<&str>,
    ) -> Result<Page<UserProfile>, ApiError> {
        let url = self.endpoint("/usuarios").await;
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(page) = page {
            params.push(("page", page.to_string()));
        }
        if let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        let response = self.send(|client| client.get(url).query(&params)).await?;
        self.map_page_response(response).await
    }

    pub async fn get_user(&self, id: i64) -> Result<UserProfile, ApiError> {
        let url = self.endpoint(&format!("/usuarios/{}", id)).await;
        let response = self.send(|client| client.get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<UserProfile, ApiError> {
        let url = self.endpoint("/usuarios").await;
        let response = self.send(|client| client.post(url).json(payload)).await?;
        self.map_json_response(response).await
    }

    pub async fn update_user(
        &self,
        id: i64,
        payload: &UserPayload,
    ) -> Result<UserProfile, ApiError> {
        let url = self.endpoint(&format!("/usuarios/{}", id)).await;
        let response = self.send(|client| client.put(url).json(payload)).await?;
        self.map_json_response(response).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/usuarios/{}", id)).await;
        let response = self.send(|client| client.delete(url)).await?;
        self.map_empty_response(response).await
    }
}
