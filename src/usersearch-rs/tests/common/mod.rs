#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::Url;
use std::sync::{Arc, Mutex};

use usersearch_core::SearchParams;
use usersearch_rs::{Client, RawResponse, Transport, TransportError};
use usersearch_server::{dataset, SearchServer, SECRET_KEY};

pub const BASE_URL: &str = "http://search.test/";

pub fn fixture_server() -> SearchServer {
    SearchServer::new(dataset::parse(include_str!("../../../usersearch-server/fixtures/dataset.json")).unwrap())
}

/// Feeds the request URL's query string straight into the reference handler
pub struct LoopbackTransport {
    server: SearchServer,
    seen: Mutex<Vec<SearchParams>>,
}

impl LoopbackTransport {
    pub fn new(server: SearchServer) -> Self {
        Self {
            server,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Parameters the server decoded, in request order
    pub fn seen(&self) -> Vec<SearchParams> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for LoopbackTransport {
    async fn get(&self, url: Url, access_token: &str) -> Result<RawResponse, TransportError> {
        let params = SearchParams::from_pairs(url.query_pairs());
        self.seen.lock().unwrap().push(params.clone());
        let reply = self.server.handle(Some(access_token), &params);
        Ok(RawResponse::new(reply.status, reply.body))
    }
}

/// Always answers with the same reply
pub struct ScriptedTransport {
    reply: RawResponse,
}

impl ScriptedTransport {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            reply: RawResponse::new(status, body),
        }
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, _url: Url, _access_token: &str) -> Result<RawResponse, TransportError> {
        Ok(self.reply.clone())
    }
}

/// Fails every request before anything reaches a server
pub struct BrokenTransport;

#[async_trait]
impl Transport for BrokenTransport {
    async fn get(&self, _url: Url, _access_token: &str) -> Result<RawResponse, TransportError> {
        Err(TransportError::Other("connection refused".to_string()))
    }
}

pub fn loopback_client(token: &str) -> (Client, Arc<LoopbackTransport>) {
    let transport = Arc::new(LoopbackTransport::new(fixture_server()));
    let client = Client::with_transport(BASE_URL, token, transport.clone());
    (client, transport)
}

pub fn client() -> Client {
    loopback_client(SECRET_KEY).0
}

pub fn scripted_client(status: u16, body: &str) -> Client {
    Client::with_transport(BASE_URL, SECRET_KEY, Arc::new(ScriptedTransport::new(status, body)))
}
