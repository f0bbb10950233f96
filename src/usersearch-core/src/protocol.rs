//! Wire vocabulary shared by the client and the reference server

use serde::{Deserialize, Serialize};

use crate::models::SearchRequest;

/// Largest page the server will report in a single reply
pub const MAX_PAGE_SIZE: i64 = 25;

/// Request header carrying the shared access token
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

pub const PARAM_QUERY: &str = "query";
pub const PARAM_ORDER_FIELD: &str = "order_field";
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_OFFSET: &str = "offset";

/// Error codes carried in the `Error` field of a reply body
pub mod codes {
    pub const BAD_ORDER_FIELD: &str = "ErrorBadOrderField";
    pub const UNAUTHORIZED: &str = "StatusUnauthorized";
    pub const INTERNAL_SERVER_ERROR: &str = "StatusInternalServerError";
}

/// SearchParams is the request exactly as it crosses the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub order_field: String,
    pub limit: i64,
    pub offset: i64,
}

impl SearchParams {
    /// Build the wire parameters for a request, asking for `limit` rows
    pub fn for_request(req: &SearchRequest, limit: i64) -> Self {
        Self {
            query: req.query.clone(),
            order_field: req.order_field.clone(),
            limit,
            offset: req.offset,
        }
    }

    /// URL query pairs in the order the client sends them
    pub fn to_pairs(&self) -> [(&'static str, String); 4] {
        [
            (PARAM_QUERY, self.query.clone()),
            (PARAM_ORDER_FIELD, self.order_field.clone()),
            (PARAM_LIMIT, self.limit.to_string()),
            (PARAM_OFFSET, self.offset.to_string()),
        ]
    }

    /// Decode URL query pairs.
    ///
    /// Unknown keys are ignored and the first occurrence of a key wins.
    /// A missing or non-numeric `limit`/`offset` decodes as `0`.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = None;
        let mut order_field = None;
        let mut limit = None;
        let mut offset = None;

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                PARAM_QUERY => &mut query,
                PARAM_ORDER_FIELD => &mut order_field,
                PARAM_LIMIT => &mut limit,
                PARAM_OFFSET => &mut offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.as_ref().to_string());
            }
        }

        Self {
            query: query.unwrap_or_default(),
            order_field: order_field.unwrap_or_default(),
            limit: parse_lenient(limit.as_deref()),
            offset: parse_lenient(offset.as_deref()),
        }
    }
}

fn parse_lenient(value: Option<&str>) -> i64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}
