use super::utils::{check_image, EditorMode};
use crate::api::{ApiClient, ApiError, Page, UploadedFile, Venue, VenueFilter, VenuePayload};
use std::rc::Rc;

/// A file picked in the browser, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
pub struct AdminVenuesRepository {
    client: Rc<ApiClient>,
}

impl AdminVenuesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, filter: &VenueFilter) -> Result<Page<Venue>, ApiError> {
        self.client.list_venues(filter).await
    }

    pub async fn save(&self, mode: EditorMode, payload: &VenuePayload) -> Result<Venue, ApiError> {
        match mode {
            EditorMode::Edit(id) => self.client.update_venue(id, payload).await,
            EditorMode::Create => self.client.create_venue(payload).await,
            EditorMode::Closed => Err(ApiError::validation("No hay un escenario en edición.")),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_venue(id).await
    }

    pub async fn upload(&self, file: PendingUpload) -> Result<UploadedFile, ApiError> {
        check_image(&file.mime, file.bytes.len())?;
        self.client
            .upload_file(&file.name, &file.mime, file.bytes)
            .await
    }
}

/// Reads a picked file into memory.
#[cfg(target_arch = "wasm32")]
pub async fn read_file(file: web_sys::File) -> Result<PendingUpload, ApiError> {
    use wasm_bindgen_futures::JsFuture;

    check_image(&file.type_(), file.size() as usize)?;
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::validation("No se pudo leer el archivo seleccionado."))?;
    Ok(PendingUpload {
        name: file.name(),
        mime: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn read_file(_file: web_sys::File) -> Result<PendingUpload, ApiError> {
    Err(ApiError::validation(
        "La carga de archivos solo está disponible en el navegador.",
    ))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::VenueState;
    use serde_json::json;

    fn payload() -> VenuePayload {
        VenuePayload {
            name: "Cancha Norte".into(),
            description: String::new(),
            address: "Carrera 7".into(),
            capacity: 12,
            dimensions: String::new(),
            state: VenueState::Available,
            locality_id: None,
            primary_sport_id: None,
            images: Vec::new(),
        }
    }

    fn venue_json(id: i64) -> serde_json::Value {
        json!({ "success": true, "data": { "id": id, "nombre": "Cancha Norte", "capacidad": 12, "estado": "disponible" } })
    }

    #[tokio::test]
    async fn save_creates_or_updates_by_mode() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/escenarios");
            then.status(201).json_body(venue_json(9));
        });
        server.mock(|when, then| {
            when.method(PUT).path("/api/escenarios/9");
            then.status(200).json_body(venue_json(9));
        });
        let repo = AdminVenuesRepository::new(ApiClient::new_with_base_url(server.url("/api")));

        let created = repo.save(EditorMode::Create, &payload()).await.unwrap();
        assert_eq!(created.id, 9);
        repo.save(EditorMode::Edit(9), &payload()).await.unwrap();
        assert_eq!(server.hits(POST, "/api/escenarios"), 1);
        assert_eq!(server.hits(PUT, "/api/escenarios/9"), 1);
        let body = server.last_body("/api/escenarios/9").unwrap();
        assert_eq!(body["nombre"], "Cancha Norte");
        assert_eq!(body["capacidad"], 12);

        assert!(repo.save(EditorMode::Closed, &payload()).await.is_err());
    }

    #[tokio::test]
    async fn upload_returns_stored_url() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/archivos/upload");
            then.status(200)
                .json_body(json!({ "success": true, "data": { "url": "/uploads/cancha.png" } }));
        });
        let repo = AdminVenuesRepository::new(ApiClient::new_with_base_url(server.url("/api")));
        let uploaded = repo
            .upload(PendingUpload {
                name: "cancha.png".into(),
                mime: "image/png".into(),
                bytes: vec![137, 80, 78, 71],
            })
            .await
            .unwrap();
        assert_eq!(uploaded.url, "/uploads/cancha.png");
    }

    #[tokio::test]
    async fn unsupported_files_never_reach_the_network() {
        let server = MockServer::start_async().await;
        let repo = AdminVenuesRepository::new(ApiClient::new_with_base_url(server.url("/api")));
        let err = repo
            .upload(PendingUpload {
                name: "bases.pdf".into(),
                mime: "application/pdf".into(),
                bytes: vec![1, 2, 3],
            })
            .await
            .unwrap_err();
        assert!(err.error.contains("JPG"));
        assert!(server.received().is_empty());
    }
}
