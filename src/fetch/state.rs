//! State for the fetch lifecycle.

use crate::ui::mvi::UiState;

/// Latest result of one logical request stream.
///
/// Phases are mutually exclusive: idle (nothing requested), pending,
/// settled with data, settled with an error. After a failure `data` still
/// holds whatever the last success produced; views must not render it.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub is_pending: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_pending: false,
            error: None,
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for FetchState<T> {}

impl<T> FetchState<T> {
    /// Nothing has been requested yet.
    pub fn is_idle(&self) -> bool {
        !self.is_pending && self.data.is_none() && self.error.is_none()
    }

    /// Data from a successful request, hidden while pending or failed.
    pub fn visible_data(&self) -> Option<&T> {
        if self.is_pending || self.error.is_some() {
            None
        } else {
            self.data.as_ref()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let state = FetchState::<Vec<u32>>::default();
        assert!(state.is_idle());
        assert!(state.visible_data().is_none());
    }

    #[test]
    fn data_hidden_while_pending() {
        let state = FetchState {
            data: Some(vec![1]),
            is_pending: true,
            error: None,
        };
        assert!(!state.is_idle());
        assert!(state.visible_data().is_none());
    }

    #[test]
    fn data_hidden_after_failure() {
        let state = FetchState {
            data: Some(vec![1]),
            is_pending: false,
            error: Some("Could not fetch data".to_string()),
        };
        assert!(state.visible_data().is_none());
    }

    #[test]
    fn data_visible_when_settled() {
        let state = FetchState {
            data: Some(vec![1, 2]),
            is_pending: false,
            error: None,
        };
        assert_eq!(state.visible_data(), Some(&vec![1, 2]));
    }
}
