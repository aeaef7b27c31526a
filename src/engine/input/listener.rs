// Keyboard events and listener lifetimes

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Whether a key went down or came up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPhase {
    Pressed,
    Released,
}

/// A single keyboard event as seen by input listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub code: KeyCode,
    pub phase: KeyPhase,
    /// Auto-repeat from a held key
    pub repeat: bool,
    default_prevented: bool,
}

#[cfg(test)]
impl KeyInput {
    pub fn pressed(code: KeyCode) -> Self {
        Self {
            code,
            phase: KeyPhase::Pressed,
            repeat: false,
            default_prevented: false,
        }
    }

    pub fn released(code: KeyCode) -> Self {
        Self {
            code,
            phase: KeyPhase::Released,
            repeat: false,
            default_prevented: false,
        }
    }

    pub fn repeated(code: KeyCode) -> Self {
        Self {
            repeat: true,
            ..Self::pressed(code)
        }
    }
}

impl KeyInput {
    /// Translate a winit key event
    /// Returns None for keys winit could not identify
    pub fn from_winit(event: &KeyEvent) -> Option<Self> {
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        let phase = match event.state {
            ElementState::Pressed => KeyPhase::Pressed,
            ElementState::Released => KeyPhase::Released,
        };
        Some(Self {
            code,
            phase,
            repeat: event.repeat,
            default_prevented: false,
        })
    }

    /// Ask the platform not to run its own behaviour for this key
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Owns a set of key listener registrations
///
/// Events for a phase only reach the owner while that phase is registered.
/// `dispose` drops every registration at once and the handle stays dead after.
#[derive(Debug, Default)]
pub struct ListenerHandle {
    phases: Vec<KeyPhase>,
    disposed: bool,
}

impl ListenerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register for events of `phase`
    pub fn listen(&mut self, phase: KeyPhase) {
        if self.disposed || self.phases.contains(&phase) {
            return;
        }
        self.phases.push(phase);
    }

    pub fn is_listening(&self, phase: KeyPhase) -> bool {
        !self.disposed && self.phases.contains(&phase)
    }

    /// Release every registration
    pub fn dispose(&mut self) {
        self.phases.clear();
        self.disposed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_input_constructors() {
        let down = KeyInput::pressed(KeyCode::Space);
        assert_eq!(down.phase, KeyPhase::Pressed);
        assert!(!down.repeat);
        assert!(!down.default_prevented());

        let up = KeyInput::released(KeyCode::Space);
        assert_eq!(up.phase, KeyPhase::Released);

        let held = KeyInput::repeated(KeyCode::ArrowUp);
        assert_eq!(held.phase, KeyPhase::Pressed);
        assert!(held.repeat);
    }

    #[test]
    fn test_prevent_default() {
        let mut event = KeyInput::pressed(KeyCode::Backspace);
        event.prevent_default();
        assert!(event.default_prevented());
    }

    #[test]
    fn test_listen_and_dispose() {
        let mut handle = ListenerHandle::new();
        handle.listen(KeyPhase::Pressed);
        handle.listen(KeyPhase::Released);
        handle.listen(KeyPhase::Pressed);
        assert_eq!(handle.phases.len(), 2);
        assert!(handle.is_listening(KeyPhase::Pressed));

        handle.dispose();
        assert!(!handle.is_listening(KeyPhase::Pressed));
        assert!(!handle.is_listening(KeyPhase::Released));
    }

    #[test]
    fn test_disposed_handle_refuses_new_listeners() {
        let mut handle = ListenerHandle::new();
        handle.dispose();
        handle.listen(KeyPhase::Pressed);

        assert!(!handle.is_listening(KeyPhase::Pressed));
        assert!(handle.phases.is_empty());
    }
}
