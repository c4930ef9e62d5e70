use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, RegisterRequest, UserProfile},
};

impl ApiClient {
    /// Authenticates and persists the returned token.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/auth/login").await;
        let response = self.send(|client| client.post(url).json(request)).await?;
        let login: LoginResponse = self.map_json_response(response).await?;
        self.token_store()
            .save(&login.token)
            .map_err(ApiError::unknown)?;
        log::info!("signed in as user {}", login.user.id);
        Ok(login)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile, ApiError> {
        let url = self.endpoint("/auth/register").await;
        let response = self.send(|client| client.post(url).json(request)).await?;
        self.map_json_response(response).await
    }

    /// Resolves the stored token into the signed-in user.
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        if !self.has_token() {
            return Err(ApiError::unauthorized());
        }
        let url = self.endpoint("/auth/me").await;
        let response = self.send_probe(|client| client.get(url)).await?;
        let body: serde_json::Value = self.map_json_response(response).await?;
        // Some deployments wrap the profile as `{ user: {...} }`.
        let profile = match body.get("usuario").or_else(|| body.get("user")) {
            Some(inner) if inner.is_object() => inner.clone(),
            _ => body,
        };
        serde_json::from_value(profile).map_err(|err| {
            log::warn!("unexpected profile shape: {}", err);
            ApiError::unauthorized()
        })
    }

    /// Forgets the local session. The API issues stateless tokens, so there
    /// is nothing to revoke server-side.
    pub fn logout(&self) {
        self.token_store().clear();
        log::info!("signed out");
    }
}
