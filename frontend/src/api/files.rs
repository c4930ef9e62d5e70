use reqwest::multipart::{Form, Part};

use super::{
    client::ApiClient,
    types::{ApiError, UploadedFile},
};

/// Multipart field name the upload endpoint reads.
pub const UPLOAD_FIELD: &str = "archivo";

impl ApiClient {
    /// Uploads a file (venue images) and returns where it was stored.
    pub async fn upload_file(
        &self,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedFile, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|_| ApiError::validation(format!("Tipo de archivo no soportado: {}", mime)))?;
        let form = Form::new().part(UPLOAD_FIELD, part);
        let url = self.endpoint("/archivos/upload").await;
        let response = self.send(|client| client.post(url).multipart(form)).await?;
        self.map_json_response(response).await
    }
}
