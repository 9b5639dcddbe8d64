//! Reducer for the fetch lifecycle.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::FetchState;

/// Pure state transitions. Deciding whether an outcome is still current is
/// the manager's job; the reducer trusts every intent it gets.
pub struct FetchReducer<T>(PhantomData<T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for FetchReducer<T> {
    type State = FetchState<T>;
    type Intent = FetchIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Start => FetchState {
                data: state.data,
                is_pending: true,
                error: None,
            },
            FetchIntent::Resolve { data } => FetchState {
                data: Some(data),
                is_pending: false,
                error: None,
            },
            // Previous data is kept; it is never replaced by partial content.
            FetchIntent::Reject { message } => FetchState {
                data: state.data,
                is_pending: false,
                error: Some(message),
            },
        }
    }
}
