use async_trait::async_trait;
use reqwest::{Client as HttpClient, Url};

use usersearch_core::ACCESS_TOKEN_HEADER;

/// Status and body of a reply, before any interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// Transport issues a single GET and hands back whatever came over the wire
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url, access_token: &str) -> Result<RawResponse, TransportError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: HttpClient,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured reqwest client, e.g. one with a request timeout
    pub fn with_client(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: Url, access_token: &str) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .header(ACCESS_TOKEN_HEADER, access_token)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(RawResponse::new(status, body.to_vec()))
    }
}
