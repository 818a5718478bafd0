//! Contact endpoint transport

use super::{ContactRequest, ContactResponse};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Contact endpoint responded with HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

impl TransportError {
    /// HTTP status of a non-2xx response
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `detail` string carried by an error response body
    pub fn detail(&self) -> Option<&str> {
        match self {
            TransportError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Delivers a contact request to the backend
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn send(&self, request: &ContactRequest) -> TransportResult<ContactResponse>;
}

/// Error body of a non-2xx response. Only a string `detail` is used.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

fn error_detail(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()?
        .detail?
        .as_str()
        .filter(|detail| !detail.is_empty())
        .map(str::to_owned)
}

/// `{base}/contact`, keeping any path prefix on the base
pub fn contact_endpoint(base: &Url) -> TransportResult<Url> {
    let base = base.as_str().trim_end_matches('/');
    Ok(Url::parse(&format!("{base}/contact"))?)
}

/// JSON-over-HTTP transport for `POST {base}/contact`
#[derive(Debug, Clone)]
pub struct HttpContactTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpContactTransport {
    /// Build a transport for the API at `base`. `timeout` bounds each request;
    /// without one the client's own behaviour applies.
    pub fn new(base: &Url, timeout: Option<Duration>) -> TransportResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("stepgy-site/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: contact_endpoint(base)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn send(&self, request: &ContactRequest) -> TransportResult<ContactResponse> {
        tracing::debug!(endpoint = %self.endpoint, "Posting contact request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            serde_json::from_slice(&body).map_err(|e| TransportError::Decode(e.to_string()))
        } else {
            Err(TransportError::Status {
                status: status.as_u16(),
                detail: error_detail(&body),
            })
        }
    }
}
