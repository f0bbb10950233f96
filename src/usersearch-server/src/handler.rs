//! Reference search behavior as a pure function over an in-memory data set

use serde::Serialize;

use usersearch_core::protocol::codes;
use usersearch_core::{OrderField, SearchParams, User};

use crate::dataset::Record;

/// Shared secret expected in the access token header
pub const SECRET_KEY: &str = "12345";

/// Reply is a status code and a JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self { status, body },
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode reply");
                Self::error(500, codes::INTERNAL_SERVER_ERROR)
            }
        }
    }

    fn error(status: u16, code: &str) -> Self {
        Self {
            status,
            body: format!(r#"{{"Error":"{}"}}"#, code),
        }
    }
}

/// Stateless search over a fixed record set
pub struct SearchServer {
    records: Vec<Record>,
    secret: String,
}

impl SearchServer {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            secret: SECRET_KEY.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Answer one request
    pub fn handle(&self, access_token: Option<&str>, params: &SearchParams) -> Reply {
        if access_token != Some(self.secret.as_str()) {
            tracing::warn!("Rejected request with bad access token");
            return Reply::error(401, codes::UNAUTHORIZED);
        }

        let order_field: OrderField = match params.order_field.parse() {
            Ok(field) => field,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected request");
                return Reply::error(400, codes::BAD_ORDER_FIELD);
            }
        };

        let users = self.search(&params.query, order_field, params.offset, params.limit);
        tracing::debug!(
            query = %params.query,
            order_field = order_field.as_str(),
            offset = params.offset,
            limit = params.limit,
            returned = users.len(),
            "Search complete"
        );
        Reply::json(200, &users)
    }

    /// Filter, sort and slice the records
    pub fn search(&self, query: &str, order_field: OrderField, offset: i64, limit: i64) -> Vec<User> {
        let mut found: Vec<&Record> = if query.is_empty() {
            self.records.iter().collect()
        } else {
            self.records.iter().filter(|r| r.matches(query)).collect()
        };

        // sort_by is stable, ties keep data set order
        match order_field {
            OrderField::Id => found.sort_by_key(|r| r.id),
            OrderField::Age => found.sort_by_key(|r| r.age),
            OrderField::Name => found.sort_by(|a, b| a.first_name.cmp(&b.first_name)),
        }

        let (start, end) = page_bounds(found.len(), offset, limit);
        found[start..end].iter().map(|r| r.to_user()).collect()
    }
}

/// Clamp `[offset, offset + limit)` into `[0, len]`
fn page_bounds(len: usize, offset: i64, limit: i64) -> (usize, usize) {
    let offset = usize::try_from(offset).unwrap_or(0);
    let limit = usize::try_from(limit).unwrap_or(0);
    let start = offset.min(len);
    let end = offset.saturating_add(limit).min(len);
    (start, end)
}
