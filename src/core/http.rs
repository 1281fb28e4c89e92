use crate::domain::ports::JsonApi;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// JSON HTTP client for a site API.
///
/// Cookies set by the server are kept and sent back on later requests from
/// the same client (or its clones).
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::handle_response(response).await
    }

    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("POST {} (json)", url);
        let payload = serde_json::to_vec(body)?;
        let response = self
            .client
            .post(url)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(payload)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Posts an already-encoded form body. A 2xx response yields `()`; the
    /// body of a successful response is not read.
    pub async fn post_params(&self, url: &str, body: impl Into<String>) -> Result<()> {
        tracing::debug!("POST {} (form)", url);
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body.into())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status.is_success() {
            let bytes = response.bytes().await?;
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            Err(Self::error_from(response).await)
        }
    }

    // 非 2xx: 錯誤內容以 JSON 解析，失敗時保留原始文字
    async fn error_from(response: Response) -> SiteError {
        let status = response.status().as_u16();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return SiteError::Http(e),
        };

        match serde_json::from_slice(&bytes) {
            Ok(body) => {
                tracing::warn!("API request failed with status: {}", status);
                SiteError::Status { status, body }
            }
            Err(_) => {
                tracing::warn!(
                    "API request failed with status {} and a non-JSON body",
                    status
                );
                SiteError::Status {
                    status,
                    body: serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned()),
                }
            }
        }
    }
}

#[async_trait]
impl JsonApi for HttpClient {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        HttpClient::get_json(self, url).await
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<serde_json::Value> {
        HttpClient::post_json(self, url, body).await
    }

    async fn post_params(&self, url: &str, body: &str) -> Result<()> {
        HttpClient::post_params(self, url, body).await
    }
}
