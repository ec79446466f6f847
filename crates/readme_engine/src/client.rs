use std::time::Duration;

use readme_logging::{preview, readme_debug, readme_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::json;

use crate::{FailureKind, GenerateError, GENERIC_FAILURE_MESSAGE};

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5125";
pub const GENERATE_PATH: &str = "/generate-readme";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    /// Base address of the generation service; `GENERATE_PATH` is appended.
    pub service_url: String,
    /// `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl ServiceSettings {
    pub fn endpoint(&self) -> Result<Url, GenerateError> {
        let base = self.service_url.trim().trim_end_matches('/');
        Url::parse(&format!("{base}{GENERATE_PATH}"))
            .map_err(|err| GenerateError::new(FailureKind::InvalidEndpoint, err.to_string()))
    }
}

#[async_trait::async_trait]
pub trait GenerationClient: Send + Sync {
    /// Asks the service for a README of `repo_url`, passed through untouched.
    async fn generate(&self, repo_url: &str) -> Result<String, GenerateError>;
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    readme: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReqwestGenerationClient {
    settings: ServiceSettings,
    client: reqwest::Client,
}

impl ReqwestGenerationClient {
    pub fn new(settings: ServiceSettings) -> Result<Self, GenerateError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| GenerateError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl GenerationClient for ReqwestGenerationClient {
    async fn generate(&self, repo_url: &str) -> Result<String, GenerateError> {
        let endpoint = self.settings.endpoint()?;
        let body = json!({ "repo_url": repo_url }).to_string();

        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            log_service_failure(status, &text);
            return Err(GenerateError::new(
                FailureKind::HttpStatus(status.as_u16()),
                GENERIC_FAILURE_MESSAGE,
            ));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: GenerateResponse = serde_json::from_slice(&bytes)
            .map_err(|err| GenerateError::new(FailureKind::InvalidResponse, err.to_string()))?;
        let readme = parsed.readme.unwrap_or_default();
        readme_debug!("Generation service returned {} bytes", readme.len());
        Ok(readme)
    }
}

fn log_service_failure(status: StatusCode, body: &str) {
    match serde_json::from_str::<ServiceErrorBody>(body) {
        Ok(ServiceErrorBody {
            error: Some(message),
        }) => readme_warn!("Generation service responded {}: {}", status, message),
        _ => readme_warn!(
            "Generation service responded {} body={}",
            status,
            preview(body, 200)
        ),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GenerateError {
    if err.is_timeout() {
        return GenerateError::new(FailureKind::Timeout, err.to_string());
    }
    GenerateError::new(FailureKind::Network, err.to_string())
}
