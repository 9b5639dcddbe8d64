//! Trip list view state.
//!
//! The view's own state is the active region filter (which determines the
//! URL handed to the fetch manager) and the highlighted row.
//!
//! - `state.rs` - Filter and selection
//! - `intent.rs` - User actions (filter buttons, row navigation)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::TripListIntent;
pub use reducer::TripListReducer;
pub use state::TripListState;
