use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Deserialize;
use crate::core::config::AppConfig;
use crate::core::models::{ClientPatch, Cliente, UploadFile};
use super::error::ApiError;

pub const CLIENTES_PATH: &str = "/api/clientes";
pub const EXPORT_PATH: &str = "/api/exportar";

/// Backend operations the board needs. One attempt per call, no retries.
#[allow(async_fn_in_trait)]
pub trait ClientesApi {
    async fn list_clients(&self) -> Result<Vec<Cliente>, ApiError>;

    async fn update_client(&self, client_id: &str, patch: &ClientPatch) -> Result<(), ApiError>;

    /// Returns the backend's `message` on success.
    async fn upload_spreadsheet(&self, file: UploadFile) -> Result<String, ApiError>;

    /// Address the browser navigates to for the CSV download.
    fn export_url(&self) -> String;
}

// Shape of the `{message}` / `{error}` bodies the backend replies with
#[derive(Debug, Default, Deserialize)]
struct ServerReply {
    message: Option<String>,
    error: Option<String>,
}

pub struct HttpClientesApi {
    http: Client,
    base_url: String,
}

impl HttpClientesApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    pub fn clientes_url(&self) -> String {
        format!("{}{}", self.base_url, CLIENTES_PATH)
    }

    pub fn cliente_url(&self, client_id: &str) -> String {
        format!("{}/{}", self.clientes_url(), urlencoding::encode(client_id))
    }
}

impl ClientesApi for HttpClientesApi {
    async fn list_clients(&self) -> Result<Vec<Cliente>, ApiError> {
        let response = self.http.get(self.clientes_url()).send().await?;
        let response = ensure_success(response).await?;
        response
            .json::<Vec<Cliente>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update_client(&self, client_id: &str, patch: &ClientPatch) -> Result<(), ApiError> {
        let response = self
            .http
            .put(self.cliente_url(client_id))
            .json(patch)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn upload_spreadsheet(&self, file: UploadFile) -> Result<String, ApiError> {
        let part = Part::bytes(file.bytes).file_name(file.name);
        let form = Form::new().part("file", part);
        let response = self
            .http
            .post(self.clientes_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let reply = response
                .json::<ServerReply>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(reply.message.unwrap_or_default())
        } else {
            Err(status_error(status.as_u16(), response).await)
        }
    }

    fn export_url(&self) -> String {
        format!("{}{}", self.base_url, EXPORT_PATH)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(status_error(status.as_u16(), response).await)
    }
}

// Error bodies are best effort: a non-JSON body still yields the status
async fn status_error(status: u16, response: Response) -> ApiError {
    let reply = response.json::<ServerReply>().await.unwrap_or_default();
    ApiError::Status {
        status,
        message: reply.error.unwrap_or_default(),
    }
}
