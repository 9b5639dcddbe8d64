use serde::{Deserialize, Serialize};
use std::fmt;

/// Trip identifier as emitted by the backend.
///
/// json-server style backends use either numeric or string ids, so both
/// are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TripId {
    Number(u64),
    Text(String),
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripId::Number(n) => write!(f, "{}", n),
            TripId::Text(s) => f.write_str(s),
        }
    }
}

/// A bookable trip. Owned by the backend; the client only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub title: String,
    pub price: f64,
}

impl Trip {
    /// Price as shown in the list. Whole values render without a fraction.
    pub fn display_price(&self) -> String {
        format!("{}", self.price)
    }
}
