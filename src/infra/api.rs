//! Thin asynchronous client for the freight rate optimizer backend.
//!
//! One best-effort request per call: no retry, no backoff, no timeout
//! tuning. Construct an instance and pass it where it is needed instead of
//! reaching for a global.

use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::domain::{
    QuoteResponse, RecommendationReport, RecommendationRequest, ShipmentRequest, ValidationReport,
};

const DEFAULT_BASE_URL: &str = "http://localhost:8000/";
const USER_AGENT: &str = "freight-rate-optimizer/0.1.0";

/// Environment variable that overrides the backend address.
pub const BASE_URL_ENV: &str = "FREIGHT_API_URL";

#[derive(Debug, Error)]
pub enum FreightApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: {0}")]
    Api(String),
}

#[derive(Clone)]
pub struct FreightApiClient {
    http: Client,
    base_url: Url,
}

impl FreightApiClient {
    /// Builds a client against `FREIGHT_API_URL`, falling back to the
    /// local development backend.
    pub fn from_env() -> Result<Self, FreightApiError> {
        let base = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(&base)
    }

    pub fn with_base_url(base: &str) -> Result<Self, FreightApiError> {
        // Url::join treats a base without a trailing slash as a file path.
        let mut normalized = base.trim().trim_end_matches('/').to_string();
        normalized.push('/');
        let base_url = Url::parse(&normalized)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Posts the shipment for backend-side validation and returns the
    /// report verbatim.
    pub async fn validate(
        &self,
        request: &ShipmentRequest,
    ) -> Result<ValidationReport, FreightApiError> {
        self.post_json("agent/validate", request).await
    }

    /// Requests multimodal quotes for the shipment.
    pub async fn get_quotes(
        &self,
        request: &ShipmentRequest,
    ) -> Result<QuoteResponse, FreightApiError> {
        self.post_json("multimodal/quote", request).await
    }

    /// Asks the backend for a deeper analysis of already-fetched options.
    pub async fn get_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationReport, FreightApiError> {
        self.post_json("agent/recommend", request).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, FreightApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;
        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            // Keep whatever detail the backend sent so the UI can show it.
            let detail = response.text().await.unwrap_or_default();
            let detail = detail.trim();
            let message = if detail.is_empty() {
                format!("request failed with status {status}")
            } else {
                format!("request failed with status {status}: {detail}")
            };
            return Err(FreightApiError::Api(message));
        }
        Ok(response.json().await?)
    }
}
