use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use std::sync::Arc;

use usersearch_core::{SearchParams, ACCESS_TOKEN_HEADER};

use crate::handler::{Reply, SearchServer};

/// Shared application state
pub struct AppState {
    pub server: Arc<SearchServer>,
}

/// Search users
/// GET /?query=..&order_field=..&limit=..&offset=..
#[tracing::instrument(skip(req, state))]
pub async fn search(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map(|q| q.into_inner())
        .unwrap_or_default();
    let params = SearchParams::from_pairs(pairs);

    let token = req
        .headers()
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());

    into_response(state.server.handle(token, &params))
}

fn into_response(reply: Reply) -> HttpResponse {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status)
        .content_type("application/json")
        .body(reply.body)
}

/// Configure API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(search));
}
