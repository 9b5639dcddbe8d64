//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of UI state in the crate (the fetch lifecycle and the trip
//! list's own selection) changes only through a reducer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
