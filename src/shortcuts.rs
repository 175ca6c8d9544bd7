//! Key bindings for the main screen and the actions they trigger.
//!
//! This module connects key bindings with the actions the event handlers
//! perform, so help text and dispatch share one table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the main context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === TIMER ===
    /// Start when stopped, pause when running
    ToggleTimer,
    /// Start the countdown
    StartTimer,
    /// Pause the countdown
    PauseTimer,
    /// Reset to the first focus interval
    ResetTimer,

    // === TASKS ===
    /// Select the previous task (or move the drop target while grabbing)
    SelectPrevious,
    /// Select the next task (or move the drop target while grabbing)
    SelectNext,
    /// Move the selected task one row up
    MoveTaskUp,
    /// Move the selected task one row down
    MoveTaskDown,
    /// Pick up the selected task, or drop it when already grabbed
    GrabTask,
    /// Delete the selected task
    DeleteTask,
    /// Focus the new-task input
    FocusInput,

    // === DISPLAY ===
    /// Flip dark/light mode
    ToggleDisplayMode,

    // === HELP ===
    /// Open or close the help overlay
    ToggleHelp,

    // === GENERAL ===
    /// Cancel a drag or clear the status line
    Cancel,
    /// Leave the application
    Quit,
}

impl Action {
    /// Short label used in hints.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ToggleTimer => "start/pause",
            Self::StartTimer => "start",
            Self::PauseTimer => "pause",
            Self::ResetTimer => "reset",
            Self::SelectPrevious => "previous task",
            Self::SelectNext => "next task",
            Self::MoveTaskUp => "move task up",
            Self::MoveTaskDown => "move task down",
            Self::GrabTask => "grab/drop task",
            Self::DeleteTask => "delete task",
            Self::FocusInput => "add task",
            Self::ToggleDisplayMode => "dark/light",
            Self::ToggleHelp => "help",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Shortcut registry that maps key events to actions.
pub struct ShortcutRegistry {
    bindings: HashMap<KeyBinding, Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry
    }

    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        // === TIMER ===
        self.register(K::Char(' '), M::NONE, Action::ToggleTimer);
        self.register(K::Char('s'), M::NONE, Action::StartTimer);
        self.register(K::Char('p'), M::NONE, Action::PauseTimer);
        self.register(K::Char('r'), M::NONE, Action::ResetTimer);

        // === TASKS ===
        self.register(K::Up, M::NONE, Action::SelectPrevious);
        self.register(K::Down, M::NONE, Action::SelectNext);
        self.register(K::Char('k'), M::NONE, Action::SelectPrevious);
        self.register(K::Char('j'), M::NONE, Action::SelectNext);
        self.register(K::Char('K'), M::SHIFT, Action::MoveTaskUp);
        self.register(K::Char('J'), M::SHIFT, Action::MoveTaskDown);
        // Some terminals report uppercase letters without SHIFT
        self.register(K::Char('K'), M::NONE, Action::MoveTaskUp);
        self.register(K::Char('J'), M::NONE, Action::MoveTaskDown);
        self.register(K::Up, M::SHIFT, Action::MoveTaskUp);
        self.register(K::Down, M::SHIFT, Action::MoveTaskDown);
        self.register(K::Char('m'), M::NONE, Action::GrabTask);
        self.register(K::Char('x'), M::NONE, Action::DeleteTask);
        self.register(K::Delete, M::NONE, Action::DeleteTask);
        self.register(K::Char('a'), M::NONE, Action::FocusInput);
        self.register(K::Char('i'), M::NONE, Action::FocusInput);

        // === DISPLAY ===
        self.register(K::Char('t'), M::NONE, Action::ToggleDisplayMode);

        // === HELP ===
        self.register(K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(K::Char('?'), M::SHIFT, Action::ToggleHelp);

        // === GENERAL ===
        self.register(K::Esc, M::NONE, Action::Cancel);
        self.register(K::Char('q'), M::NONE, Action::Quit);
        self.register(K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register(&mut self, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        self.bindings.insert(KeyBinding::new(code, modifiers), action);
    }

    /// Look up an action for a key event.
    #[must_use]
    pub fn lookup(&self, event: KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyBinding::from_event(event)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_shortcuts() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), Some(Action::ToggleTimer));

        let event = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), Some(Action::ResetTimer));
    }

    #[test]
    fn test_vim_navigation() {
        let registry = ShortcutRegistry::new();

        assert_eq!(
            registry.lookup(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Action::SelectNext)
        );
        assert_eq!(
            registry.lookup(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE)),
            Some(Action::SelectPrevious)
        );
        assert_eq!(
            registry.lookup(KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT)),
            Some(Action::MoveTaskDown)
        );
    }

    #[test]
    fn test_quit_bindings() {
        let registry = ShortcutRegistry::new();

        assert_eq!(
            registry.lookup(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            registry.lookup(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_unbound_key() {
        let registry = ShortcutRegistry::new();
        let event = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(registry.lookup(event), None);
    }
}
