//! View that writes hand movement to the log

use clockface_core::{Degrees, Hand};
use clockface_widget::{DialState, DialView, rotate_transform};
use log::info;

/// Logs every hand update and remembers the latest dial
#[derive(Debug, Default)]
pub struct LogView {
    state: DialState,
}

impl LogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DialState {
        &self.state
    }
}

impl DialView for LogView {
    fn set_hand(&mut self, hand: Hand, degrees: Degrees) {
        info!("{:>6} hand -> {}", hand, rotate_transform(degrees));
        self.state.set_hand(hand, degrees);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_view_tracks_state() {
        let mut view = LogView::new();
        view.set_hand(Hand::Minute, 264.0);
        view.set_hand(Hand::Minute, -90.0);

        assert_eq!(view.state().minute, Some(-90.0));
        assert_eq!(view.state().updates, 2);
    }
}
