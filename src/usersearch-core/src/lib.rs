//! UserSearch Core Library
//!
//! The protocol contract shared by the search client and the reference
//! search server:
//! - Wire models and the order field enumeration
//! - Wire constants and query parameter encoding
//! - Look-ahead pagination helpers
//! - Reference server configuration

pub mod config;
pub mod models;
pub mod paging;
pub mod protocol;

// Re-export commonly used types
pub use config::Config;
pub use models::*;
pub use paging::{effective_limit, look_ahead_limit, split_look_ahead};
pub use protocol::{SearchParams, ACCESS_TOKEN_HEADER, MAX_PAGE_SIZE};
