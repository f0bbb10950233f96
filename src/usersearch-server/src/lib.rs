//! usersearch-server - reference behavior of the user search endpoint
//!
//! The search itself is a pure function over an in-memory record set, so
//! it can be driven in-process without a socket:
//!
//! ```rust,no_run
//! use usersearch_core::SearchParams;
//! use usersearch_server::{dataset, handler::{SearchServer, SECRET_KEY}};
//!
//! fn main() -> anyhow::Result<()> {
//!     let server = SearchServer::new(dataset::load("./dataset.json")?);
//!     let params = SearchParams { limit: 5, ..SearchParams::default() };
//!     let reply = server.handle(Some(SECRET_KEY), &params);
//!     assert_eq!(reply.status, 200);
//!     Ok(())
//! }
//! ```
//!
//! # Server Usage
//!
//! Run the binary to serve the search endpoint over HTTP:
//! ```bash
//! usersearch-server
//! ```

pub use usersearch_core;

pub mod api;
pub mod dataset;
pub mod handler;

pub use handler::{Reply, SearchServer, SECRET_KEY};
