//! Look-ahead pagination.
//!
//! The server has no "has more" signal, so the client asks for one row more
//! than it wants and reports a next page when that extra row shows up.

use crate::protocol::MAX_PAGE_SIZE;

/// Page size after applying the server-side cap
pub fn effective_limit(limit: i64) -> i64 {
    limit.min(MAX_PAGE_SIZE)
}

/// Number of rows to request from the server for a caller-side `limit`
pub fn look_ahead_limit(limit: i64) -> i64 {
    effective_limit(limit) + 1
}

/// Trim a look-ahead overrun.
///
/// `limit` is the caller-side limit; returns the rows to hand back and
/// whether more rows exist beyond them.
pub fn split_look_ahead<T>(mut rows: Vec<T>, limit: i64) -> (Vec<T>, bool) {
    let page = usize::try_from(effective_limit(limit)).unwrap_or(0);
    if rows.len() > page {
        rows.truncate(page);
        (rows, true)
    } else {
        (rows, false)
    }
}
