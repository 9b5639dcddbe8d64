use crate::trips::Region;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripListIntent {
    /// Filter button pressed.
    SelectRegion(Region),
    /// Tab: advance to the next filter.
    CycleRegion,
    MoveUp { rows: usize },
    MoveDown { rows: usize },
    /// The row count changed (a new list arrived).
    Clamp { rows: usize },
}

impl Intent for TripListIntent {}
