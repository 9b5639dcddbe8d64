//! Owner of the single in-flight request for one subscription.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::ui::mvi::Reducer;

use super::client::{FetchRequest, HttpClient, RequestOptions};
use super::error::FetchError;
use super::intent::FetchIntent;
use super::reducer::FetchReducer;
use super::state::FetchState;

/// Outcome of one request, delivered back to the owning event loop.
#[derive(Debug)]
pub struct Settled<T> {
    generation: u64,
    url: String,
    result: Result<T, FetchError>,
}

impl<T> Settled<T> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Receiving side for settled outcomes. Feed each one to
/// [`FetchManager::apply`].
pub struct Completions<T> {
    rx: mpsc::UnboundedReceiver<Settled<T>>,
}

impl<T> Completions<T> {
    pub async fn recv(&mut self) -> Option<Settled<T>> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<Settled<T>> {
        self.rx.try_recv().ok()
    }
}

struct InFlight {
    generation: u64,
    token: CancellationToken,
}

/// Keeps a [`FetchState`] in sync with the most recently requested URL.
///
/// Requests run as tokio tasks, so `subscribe` and `reload` must be called
/// from within a runtime. All state mutation happens in `subscribe`,
/// `reload` and `apply`, on the caller's loop.
pub struct FetchManager<T> {
    client: Arc<dyn HttpClient>,
    options: RequestOptions,
    state: FetchState<T>,
    url: Option<String>,
    in_flight: Option<InFlight>,
    generation: u64,
    torn_down: bool,
    tx: mpsc::UnboundedSender<Settled<T>>,
}

impl<T> FetchManager<T>
where
    T: DeserializeOwned + Clone + PartialEq + Send + 'static,
{
    pub fn new(client: Arc<dyn HttpClient>, options: RequestOptions) -> (Self, Completions<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let manager = Self {
            client,
            options,
            state: FetchState::default(),
            url: None,
            in_flight: None,
            generation: 0,
            torn_down: false,
            tx,
        };
        (manager, Completions { rx })
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Observe `url`. A change cancels the outstanding request and starts a
    /// new one; the same URL again is a no-op.
    pub fn subscribe(&mut self, url: impl Into<String>) -> &FetchState<T> {
        let url = url.into();
        if !self.torn_down && self.url.as_deref() != Some(url.as_str()) {
            self.restart(url);
        }
        &self.state
    }

    /// Re-issue the request for the current URL.
    pub fn reload(&mut self) -> &FetchState<T> {
        if !self.torn_down {
            if let Some(url) = self.url.clone() {
                self.restart(url);
            }
        }
        &self.state
    }

    /// Apply a settled outcome. Returns false when it was discarded because
    /// its request was superseded, cancelled or the manager was torn down.
    pub fn apply(&mut self, settled: Settled<T>) -> bool {
        if self.torn_down {
            debug!(generation = settled.generation, url = %settled.url, "Discarding outcome after teardown");
            return false;
        }

        let current = matches!(
            &self.in_flight,
            Some(flight) if flight.generation == settled.generation && !flight.token.is_cancelled()
        );
        if !current {
            debug!(
                generation = settled.generation,
                current_generation = self.generation,
                url = %settled.url,
                "Discarding stale fetch outcome"
            );
            return false;
        }

        self.in_flight = None;
        match settled.result {
            Ok(data) => {
                debug!(generation = settled.generation, url = %settled.url, "Fetch settled");
                self.dispatch(FetchIntent::Resolve { data });
            }
            Err(err) => {
                warn!(generation = settled.generation, error = %err, "Fetch failed");
                self.dispatch(FetchIntent::Reject {
                    message: err.user_message().to_string(),
                });
            }
        }
        true
    }

    /// Cancel the outstanding request and stop accepting outcomes.
    pub fn teardown(&mut self) {
        self.cancel_in_flight();
        self.torn_down = true;
    }

    fn dispatch(&mut self, intent: FetchIntent<T>) {
        self.state = FetchReducer::<T>::reduce(std::mem::take(&mut self.state), intent);
    }

    fn cancel_in_flight(&mut self) {
        if let Some(flight) = self.in_flight.take() {
            debug!(generation = flight.generation, "Cancelling superseded fetch");
            flight.token.cancel();
        }
    }

    fn restart(&mut self, url: String) {
        // Cancel before the new request exists: at most one is ever outstanding.
        self.cancel_in_flight();

        self.generation += 1;
        let generation = self.generation;
        let token = CancellationToken::new();
        self.in_flight = Some(InFlight {
            generation,
            token: token.clone(),
        });
        self.url = Some(url.clone());
        self.dispatch(FetchIntent::Start);

        debug!(generation, url = %url, method = %self.options.method, "Fetch issued");

        let request = FetchRequest {
            url,
            options: self.options.clone(),
        };
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!(generation, url = %request.url, "Fetch aborted");
                    return;
                }
                result = client.fetch(&request) => result,
            };

            if token.is_cancelled() {
                debug!(generation, url = %request.url, "Fetch aborted after completion");
                return;
            }

            let result = result.and_then(|body| decode::<T>(&request.url, &body));
            // Receiver gone means the owning loop has exited.
            let _ = tx.send(Settled {
                generation,
                url: request.url,
                result,
            });
        });
    }
}

impl<T> Drop for FetchManager<T> {
    fn drop(&mut self) {
        if let Some(flight) = self.in_flight.take() {
            flight.token.cancel();
        }
    }
}

fn decode<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T, FetchError> {
    serde_json::from_slice(body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}
