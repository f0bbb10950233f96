//! UserSearch Client Library
//!
//! HTTP client for the paginated user search endpoint.

mod client;
pub mod transport;

pub use client::{classify, Client, ClientConfig};
pub use transport::{HttpTransport, RawResponse, Transport, TransportError};
pub use usersearch_core::{SearchRequest, SearchResponse, User};

/// Every way a lookup can fail.
///
/// Each variant carries a human-readable message; where the failure has an
/// underlying cause (a transport or decode error) its text is embedded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request violates a precondition, checked locally or by the server
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Unauthorized(String),

    /// The server failed internally
    #[error("{0}")]
    ServerFault(String),

    /// The reply body did not have the expected shape
    #[error("{0}")]
    Protocol(String),

    #[error("{0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
