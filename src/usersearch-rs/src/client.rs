use crate::transport::{HttpTransport, RawResponse, Transport};
use crate::{ClientError, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use usersearch_core::protocol::codes;
use usersearch_core::{
    look_ahead_limit, split_look_ahead, SearchErrorResponse, SearchParams, SearchRequest,
    SearchResponse, User,
};

/// Connection settings supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub access_token: String,
}

/// User search client
pub struct Client {
    base_url: String,
    access_token: String,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a new client for the endpoint at `base_url`
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::with_transport(base_url, access_token, Arc::new(HttpTransport::new()))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self::new(config.base_url, config.access_token)
    }

    /// Create a client that sends its requests through `transport`
    pub fn with_transport(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Find one page of users.
    ///
    /// Asks the server for one row more than the page holds; if that row
    /// arrives it is dropped and `next_page` is set.
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn find_users(&self, req: &SearchRequest) -> Result<SearchResponse> {
        if req.limit < 0 {
            return Err(ClientError::InvalidArgument("limit must be > 0".to_string()));
        }
        if req.offset < 0 {
            return Err(ClientError::InvalidArgument("offset must be > 0".to_string()));
        }

        let url = self.request_url(req)?;
        let raw = self
            .transport
            .get(url, &self.access_token)
            .await
            .map_err(|e| ClientError::Unknown(format!("unknown error {}", e)))?;

        let rows = classify(&raw, &req.order_field)?;
        let (users, next_page) = split_look_ahead(rows, req.limit);
        tracing::debug!(returned = users.len(), next_page, "Search succeeded");

        Ok(SearchResponse { users, next_page })
    }

    /// URL for a request, with the look-ahead limit applied
    fn request_url(&self, req: &SearchRequest) -> Result<Url> {
        let params = SearchParams::for_request(req, look_ahead_limit(req.limit));
        Url::parse_with_params(&self.base_url, params.to_pairs())
            .map_err(|e| ClientError::Unknown(format!("unknown error {}", e)))
    }
}

/// Turn a raw reply into rows or a classified failure.
///
/// `order_field` is only used to describe a rejected order field.
pub fn classify(raw: &RawResponse, order_field: &str) -> Result<Vec<User>> {
    match raw.status {
        200 => serde_json::from_slice(&raw.body)
            .map_err(|e| ClientError::Protocol(format!("cant unpack result json: {}", e))),
        401 => Err(ClientError::Unauthorized("Bad AccessToken".to_string())),
        400 => {
            let err: SearchErrorResponse = serde_json::from_slice(&raw.body)
                .map_err(|e| ClientError::Protocol(format!("cant unpack error json: {}", e)))?;
            tracing::debug!(code = %err.error, "Bad request");
            if err.error == codes::BAD_ORDER_FIELD {
                Err(ClientError::InvalidArgument(format!(
                    "OrderField {} invalid",
                    order_field
                )))
            } else {
                Err(ClientError::Unknown(format!(
                    "unknown bad request error: {}",
                    err.error
                )))
            }
        }
        500 => Err(ClientError::ServerFault("SearchServer fatal error".to_string())),
        status => Err(ClientError::Unknown(format!("unknown http status: {}", status))),
    }
}
