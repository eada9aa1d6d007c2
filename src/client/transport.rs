use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::{json, Value};

use crate::constants::MONDAY_API_URL;
use crate::error::{MondayError, MondayResult};
use crate::models::RawResponse;

/// The single call the executor makes against the API.
///
/// Implementations return `Err` only when the call itself did not complete
/// (network, HTTP status, undecodable body). Errors the server reports in
/// the GraphQL `errors` list come back inside `RawResponse`, whatever the
/// HTTP status.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, query: &str, variables: Option<&Value>) -> MondayResult<RawResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, query: &str, variables: Option<&Value>) -> MondayResult<RawResponse> {
        (**self).execute(query, variables).await
    }
}

/// reqwest based transport for the monday.com GraphQL endpoint.
pub struct HttpTransport {
    client: reqwest::Client,
    api_url: String,
}

impl HttpTransport {
    pub fn new(token: &str, api_version: Option<&str>) -> MondayResult<Self> {
        Self::with_url(token, api_version, MONDAY_API_URL)
    }

    pub fn with_url(
        token: &str,
        api_version: Option<&str>,
        api_url: impl Into<String>,
    ) -> MondayResult<Self> {
        if token.trim().is_empty() {
            return Err(MondayError::MissingToken);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(token)
                .map_err(|e| MondayError::ConfigError(format!("Invalid API token format: {}", e)))?,
        );
        if let Some(version) = api_version {
            headers.insert(
                HeaderName::from_static("api-version"),
                HeaderValue::from_str(version)
                    .map_err(|e| MondayError::ConfigError(format!("Invalid API version: {}", e)))?,
            );
        }

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, query: &str, variables: Option<&Value>) -> MondayResult<RawResponse> {
        let body = match variables {
            Some(vars) => json!({ "query": query, "variables": vars }),
            None => json!({ "query": query }),
        };

        let response = self.client.post(&self.api_url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return match serde_json::from_str::<RawResponse>(&body) {
                Ok(reported) if reported.has_errors() => Ok(reported),
                _ => Err(MondayError::Http {
                    status: status.as_u16(),
                    body,
                }),
            };
        }

        Ok(response.json::<RawResponse>().await?)
    }
}
