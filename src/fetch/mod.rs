//! Cancellable fetch lifecycle.
//!
//! A [`FetchManager`] owns at most one in-flight request tied to a URL and
//! exposes the latest [`FetchState`]. Changing the URL cancels the previous
//! request before the next one starts, and every outcome is tagged with the
//! generation of the request that produced it so a superseded outcome can
//! never overwrite newer state.
//!
//! # Architecture
//!
//! Uses the MVI pattern for the state itself:
//! - `state.rs` - Tri-state result container (pending / data / error)
//! - `intent.rs` - Lifecycle events (Start, Resolve, Reject)
//! - `reducer.rs` - State transitions (pure, no side effects)
//!
//! Side effects (spawning, cancelling, discarding stale outcomes) live in
//! `manager.rs`. The transport is the injected [`HttpClient`] capability.

mod client;
mod error;
mod intent;
mod manager;
mod reducer;
mod state;

pub use client::{ClientTimeouts, FetchRequest, HttpClient, RequestOptions, ReqwestClient};
pub use error::{FetchError, GENERIC_FETCH_ERROR};
pub use intent::FetchIntent;
pub use manager::{Completions, FetchManager, Settled};
pub use reducer::FetchReducer;
pub use state::FetchState;
