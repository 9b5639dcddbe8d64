//! Base trait for UI state.

/// Marker trait for state that a reducer owns.
///
/// States are replaced wholesale on every transition, so they must be
/// cheap to move out with `std::mem::take` (hence `Default`).
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
