use crate::ui::mvi::Reducer;

use super::intent::TripListIntent;
use super::state::TripListState;

pub struct TripListReducer;

impl Reducer for TripListReducer {
    type State = TripListState;
    type Intent = TripListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TripListIntent::SelectRegion(region) => {
                if region == state.region {
                    state
                } else {
                    TripListState::new(region)
                }
            }
            TripListIntent::CycleRegion => TripListState::new(state.region.next()),
            TripListIntent::MoveUp { rows } => {
                let selected = if rows == 0 {
                    0
                } else if state.selected == 0 {
                    rows - 1
                } else {
                    state.selected.min(rows) - 1
                };
                TripListState { selected, ..state }
            }
            TripListIntent::MoveDown { rows } => {
                let selected = if state.selected + 1 >= rows {
                    0
                } else {
                    state.selected + 1
                };
                TripListState { selected, ..state }
            }
            TripListIntent::Clamp { rows } => TripListState {
                selected: state.selected.min(rows.saturating_sub(1)),
                ..state
            },
        }
    }
}
