//! Held-key tracking and key bindings
//!
//! Key events arrive asynchronously from the frame loop and only touch the
//! tracker; the updater reads a `TickInput` snapshot at the start of a tick.

use std::collections::{HashMap, HashSet};

/// Logical actions the updater understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
}

/// Physical key identifier (`KeyboardEvent.key`) to action
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind("ArrowLeft", Action::MoveLeft);
        bindings.bind("a", Action::MoveLeft);
        bindings.bind("ArrowRight", Action::MoveRight);
        bindings.bind("d", Action::MoveRight);
        bindings
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind a key, replacing any previous binding for it
    pub fn bind(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    pub fn action_for(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Set of currently held keys
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: HashSet<String>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        if !self.held.contains(key) {
            self.held.insert(key.to_string());
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(key);
    }

    /// Forget every held key (restart, focus loss)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Resolve held keys into this tick's input
    pub fn snapshot(&self, bindings: &KeyBindings) -> TickInput {
        let mut input = TickInput::default();
        for key in &self.held {
            match bindings.action_for(key) {
                Some(Action::MoveLeft) => input.left = true,
                Some(Action::MoveRight) => input.right = true,
                None => {}
            }
        }
        input
    }
}
