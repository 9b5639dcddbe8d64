use crate::trips::Region;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TripListState {
    pub region: Region,
    /// Highlighted row. Always less than the row count when rows exist.
    pub selected: usize,
}

impl UiState for TripListState {}

impl TripListState {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            selected: 0,
        }
    }
}
