//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use triplist::fetch::{
    Completions, FetchError, FetchManager, FetchRequest, HttpClient, RequestOptions,
};
use triplist::trips::Trip;
use triplist::ui::app::App;
use triplist::trips::Region;

pub const BASE_URL: &str = "http://trips.test";
pub const ALL_URL: &str = "http://trips.test/trips";
pub const EUROPE_URL: &str = "http://trips.test/trips?loc=europe";
pub const AMERICA_URL: &str = "http://trips.test/trips?loc=america";

pub const PARIS: &str = r#"[{"id":1,"title":"Paris","price":500}]"#;
pub const ROME: &str = r#"[{"id":2,"title":"Rome","price":650}]"#;
pub const NEW_YORK: &str = r#"[{"id":3,"title":"New York","price":900}]"#;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

// -- Scripted client ----------------------------------------------------------

#[derive(Debug)]
pub enum Reply {
    Json(String),
    Status(u16),
}

/// Releases the response of one expected request.
pub struct Gate(oneshot::Sender<Reply>);

impl Gate {
    /// A dropped receiver means the request was aborted; that is fine.
    pub fn json(self, body: &str) {
        let _ = self.0.send(Reply::Json(body.to_string()));
    }

    pub fn status(self, status: u16) {
        let _ = self.0.send(Reply::Status(status));
    }
}

#[derive(Default)]
struct Script {
    pending: HashMap<String, VecDeque<oneshot::Receiver<Reply>>>,
    calls: Vec<String>,
    aborted: Vec<String>,
}

/// Client whose responses are released by the test, in any order.
///
/// Requests with no expectation hang forever.
#[derive(Clone, Default)]
pub struct ScriptedClient {
    script: Arc<Mutex<Script>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an expectation for the next request to `url`.
    pub fn expect(&self, url: &str) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.script
            .lock()
            .pending
            .entry(url.to_string())
            .or_default()
            .push_back(rx);
        Gate(tx)
    }

    pub fn calls(&self) -> Vec<String> {
        self.script.lock().calls.clone()
    }

    /// URLs whose request future was dropped before it completed.
    pub fn aborted(&self) -> Vec<String> {
        self.script.lock().aborted.clone()
    }
}

struct AbortProbe {
    url: String,
    script: Arc<Mutex<Script>>,
    completed: bool,
}

impl Drop for AbortProbe {
    fn drop(&mut self) {
        if !self.completed {
            self.script.lock().aborted.push(self.url.clone());
        }
    }
}

#[async_trait]
impl HttpClient for ScriptedClient {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<u8>, FetchError> {
        let rx = {
            let mut script = self.script.lock();
            script.calls.push(request.url.clone());
            script
                .pending
                .get_mut(&request.url)
                .and_then(VecDeque::pop_front)
        };

        let mut probe = AbortProbe {
            url: request.url.clone(),
            script: Arc::clone(&self.script),
            completed: false,
        };

        let reply = match rx {
            Some(rx) => match rx.await {
                Ok(reply) => reply,
                Err(_) => std::future::pending().await,
            },
            None => std::future::pending().await,
        };
        probe.completed = true;

        match reply {
            Reply::Json(body) => Ok(body.into_bytes()),
            Reply::Status(status) => Err(FetchError::Status {
                url: request.url.clone(),
                status,
                reason: "Scripted".to_string(),
            }),
        }
    }
}

// -- Manager helpers ----------------------------------------------------------

pub type TripManager = FetchManager<Vec<Trip>>;

pub fn make_manager(client: &ScriptedClient) -> (TripManager, Completions<Vec<Trip>>) {
    FetchManager::new(Arc::new(client.clone()), RequestOptions::default())
}

pub fn make_app(client: &ScriptedClient, region: Region) -> (App, Completions<Vec<Trip>>) {
    let (manager, completions) = make_manager(client);
    (App::new(BASE_URL, region, manager), completions)
}

/// Wait for the next settled outcome and feed it to the manager.
/// Returns whether it was applied.
pub async fn settle_next(manager: &mut TripManager, completions: &mut Completions<Vec<Trip>>) -> bool {
    let settled = tokio::time::timeout(Duration::from_secs(2), completions.recv())
        .await
        .expect("timed out waiting for a settled fetch")
        .expect("completion channel closed");
    manager.apply(settled)
}

/// True if nothing settles within `ms`. A closed channel counts as quiet.
pub async fn quiet_for(completions: &mut Completions<Vec<Trip>>, ms: u64) -> bool {
    !matches!(
        tokio::time::timeout(Duration::from_millis(ms), completions.recv()).await,
        Ok(Some(_))
    )
}

/// Poll until `client` has seen a request to `url`.
pub async fn wait_for_call(client: &ScriptedClient, url: &str) {
    for _ in 0..200 {
        if client.calls().iter().any(|call| call == url) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("no request to {} was issued", url);
}

pub fn titles(manager: &TripManager) -> Vec<String> {
    manager
        .state()
        .data
        .as_ref()
        .map(|trips| trips.iter().map(|t| t.title.clone()).collect())
        .unwrap_or_default()
}
