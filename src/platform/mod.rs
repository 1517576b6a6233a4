//! Platform abstraction layer
//!
//! Translates raw browser events into [`InputEvent`]s. The simulation never
//! sees DOM types; `GameLoop::handle_input` feeds these into the tracker.

use crate::sim::InputTracker;

/// A platform-independent input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down (`KeyboardEvent.key`)
    KeyDown(String),
    /// A key went up
    KeyUp(String),
    /// The page lost focus; key-up events may never arrive
    FocusLost,
}

impl InputEvent {
    /// Apply the event to the held-key tracker
    pub fn apply(&self, tracker: &mut InputTracker) {
        match self {
            InputEvent::KeyDown(key) => tracker.key_down(key),
            InputEvent::KeyUp(key) => tracker.key_up(key),
            InputEvent::FocusLost => tracker.release_all(),
        }
    }

    /// Key identifier carried by the event, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            InputEvent::KeyDown(key) | InputEvent::KeyUp(key) => Some(key),
            InputEvent::FocusLost => None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl InputEvent {
    /// Map a DOM `keydown`/`keyup` event
    pub fn from_keyboard(event: &web_sys::KeyboardEvent) -> Option<Self> {
        match event.type_().as_str() {
            "keydown" => Some(InputEvent::KeyDown(event.key())),
            "keyup" => Some(InputEvent::KeyUp(event.key())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::KeyBindings;

    #[test]
    fn test_events_drive_tracker() {
        let bindings = KeyBindings::default();
        let mut tracker = InputTracker::new();

        InputEvent::KeyDown("ArrowLeft".into()).apply(&mut tracker);
        assert!(tracker.snapshot(&bindings).left);

        InputEvent::KeyUp("ArrowLeft".into()).apply(&mut tracker);
        assert!(!tracker.snapshot(&bindings).left);

        InputEvent::KeyDown("d".into()).apply(&mut tracker);
        InputEvent::FocusLost.apply(&mut tracker);
        assert!(!tracker.snapshot(&bindings).right);
    }

    #[test]
    fn test_key_accessor() {
        assert_eq!(InputEvent::KeyUp("a".into()).key(), Some("a"));
        assert_eq!(InputEvent::FocusLost.key(), None);
    }
}
