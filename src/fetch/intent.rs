//! Intents for the fetch lifecycle.

use crate::ui::mvi::Intent;

/// Lifecycle events dispatched by the manager.
///
/// Cancellation has no intent: a cancelled request never touches state.
#[derive(Debug)]
pub enum FetchIntent<T> {
    /// A new request was issued.
    Start,

    /// The current request succeeded.
    Resolve { data: T },

    /// The current request failed; `message` is user-facing.
    Reject { message: String },
}

impl<T: Send + 'static> Intent for FetchIntent<T> {}
