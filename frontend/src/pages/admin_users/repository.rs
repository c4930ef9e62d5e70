use super::utils::EditorMode;
use crate::api::{ApiClient, ApiError, Page, UserPayload, UserProfile};
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub page: Option<u32>,
    pub search: Option<String>,
}

#[derive(Clone)]
pub struct AdminUsersRepository {
    client: Rc<ApiClient>,
}

impl AdminUsersRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, query: &UserQuery) -> Result<Page<UserProfile>, ApiError> {
        self.client
            .list_users(query.page, query.search.as_deref())
            .await
    }

    pub async fn save(
        &self,
        mode: EditorMode,
        payload: &UserPayload,
    ) -> Result<UserProfile, ApiError> {
        match mode {
            EditorMode::Edit(id) => self.client.update_user(id, payload).await,
            EditorMode::Create => self.client.create_user(payload).await,
            EditorMode::Closed => Err(ApiError::validation("No hay un usuario en edición.")),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_user(id).await
    }
}
