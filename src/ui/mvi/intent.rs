//! Base trait for intents.

/// Marker trait for intents: key presses, filter changes, settled requests.
pub trait Intent: Send + 'static {}
