//! Cancellable HTTP client capability.

use async_trait::async_trait;
use reqwest::{Client, Method};
use std::time::Duration;

use super::error::FetchError;

/// Static request options, captured once when a manager is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub options: RequestOptions,
}

/// Transport used by [`FetchManager`](super::FetchManager).
///
/// Implementations only perform I/O. Cancellation is handled by the caller,
/// which drops the returned future when the request is superseded.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue the request and return the body of a 2xx response.
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<u8>, FetchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientTimeouts {
    pub connect: Duration,
    pub request: Duration,
}

impl Default for ClientTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            request: Duration::from_secs(30),
        }
    }
}

pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new(timeouts: ClientTimeouts) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.request)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .request(request.options.method.clone(), &request.url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: request.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: request.url.clone(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: request.url.clone(),
                source,
            })?;

        Ok(body.to_vec())
    }
}
