// Input configuration and remapping

use super::action::{self, Action, Axis};
use super::InputError;
use std::collections::{HashMap, HashSet};
use winit::keyboard::KeyCode;

/// Velocity magnitude and ramp timings for directional movement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementTuning {
    /// Velocity reached when a direction is held (units per frame)
    pub speed: f32,
    /// Seconds to ramp up to `speed`
    pub ramp_duration: f32,
    /// Seconds to ramp back to a stand still after release
    pub stop_duration: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 5.0,
            ramp_duration: 0.5,
            stop_duration: 0.5,
        }
    }
}

/// Key mapping and behaviour switches for the input controller
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Key-down bindings, one action per key
    press_bindings: HashMap<KeyCode, Action>,

    /// Key-up bindings, one axis to stop per key
    release_bindings: HashMap<KeyCode, Axis>,

    /// Keys whose platform default is suppressed
    blocked_keys: HashSet<KeyCode>,

    /// Master switch for default suppression
    pub block_defaults: bool,

    pub movement: MovementTuning,

    /// Stop all movement when a session ends instead of carrying it into the next one
    pub reset_movement_on_session_end: bool,
}

impl InputConfig {
    /// An empty configuration: nothing bound, nothing blocked
    pub fn new() -> Self {
        Self {
            press_bindings: HashMap::new(),
            release_bindings: HashMap::new(),
            blocked_keys: HashSet::new(),
            block_defaults: true,
            movement: MovementTuning::default(),
            reset_movement_on_session_end: true,
        }
    }

    /// Bind a key press to an action, replacing any previous binding for that key
    ///
    /// Movement keys also get a release binding for their axis so letting go
    /// of the key stops the ship; any other action clears a stale one.
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.press_bindings.insert(key, action);
        match action.direction() {
            Some(direction) => self.bind_release(key, direction.axis()),
            None => {
                self.release_bindings.remove(&key);
            }
        }
    }

    /// Bind a key release to stopping an axis
    pub fn bind_release(&mut self, key: KeyCode, axis: Axis) {
        self.release_bindings.insert(key, axis);
    }

    /// Remove every binding (press and release) for a key
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.press_bindings.remove(&key);
        self.release_bindings.remove(&key);
    }

    /// Unbind all keys mapped to an action, along with their release bindings
    #[allow(dead_code)]
    pub fn unbind_action(&mut self, action: Action) {
        let keys: Vec<KeyCode> = self
            .press_bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect();
        for key in keys {
            self.unbind_key(key);
        }
    }

    #[allow(dead_code)]
    pub fn block(&mut self, key: KeyCode) {
        self.blocked_keys.insert(key);
    }

    #[allow(dead_code)]
    pub fn unblock(&mut self, key: KeyCode) {
        self.blocked_keys.remove(&key);
    }

    /// Action triggered by pressing `key`
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.press_bindings.get(&key).copied()
    }

    /// Axis stopped by releasing `key`
    pub fn axis_for_release(&self, key: KeyCode) -> Option<Axis> {
        self.release_bindings.get(&key).copied()
    }

    /// Whether key-down on `key` should suppress the platform default
    pub fn is_blocked(&self, key: KeyCode) -> bool {
        self.block_defaults && self.blocked_keys.contains(&key)
    }

    /// Restore the default bindings and block list
    /// Movement tuning and switches are left untouched
    pub fn reset_to_defaults(&mut self) {
        self.press_bindings = action::default_bindings().into_iter().collect();
        self.release_bindings = action::default_release_bindings().into_iter().collect();
        self.blocked_keys = action::default_blocked_keys().into_iter().collect();
    }

    /// Reject tuning values the controller cannot work with
    pub fn validate(&self) -> Result<(), InputError> {
        let tuning = &self.movement;
        if !tuning.speed.is_finite() || tuning.speed <= 0.0 {
            return Err(InputError::InvalidSpeed(tuning.speed));
        }
        for (name, value) in [
            ("ramp", tuning.ramp_duration),
            ("stop", tuning.stop_duration),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(InputError::InvalidDuration { name, value });
            }
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        let mut config = Self::new();
        config.reset_to_defaults();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_bindings() {
        let config = InputConfig::default();
        assert_eq!(config.action_for(KeyCode::Space), Some(Action::Fire));
        assert_eq!(config.action_for(KeyCode::Enter), Some(Action::SwitchLayer));
        assert_eq!(config.action_for(KeyCode::KeyZ), None);
        assert_eq!(
            config.axis_for_release(KeyCode::ArrowUp),
            Some(Axis::Vertical)
        );
        assert_eq!(config.axis_for_release(KeyCode::Space), None);
    }

    #[test]
    fn test_new_config_is_empty() {
        let config = InputConfig::new();
        assert_eq!(config.action_for(KeyCode::Space), None);
        assert!(!config.is_blocked(KeyCode::Space));
    }

    #[test]
    fn test_rebind_key() {
        let mut config = InputConfig::default();
        config.bind(KeyCode::Space, Action::SwitchLayer);

        assert_eq!(config.action_for(KeyCode::Space), Some(Action::SwitchLayer));
    }

    #[test]
    fn test_multiple_keys_per_action() {
        let mut config = InputConfig::default();
        config.bind(KeyCode::KeyA, Action::MoveLeft);

        assert_eq!(config.action_for(KeyCode::KeyA), Some(Action::MoveLeft));
        assert_eq!(config.action_for(KeyCode::ArrowLeft), Some(Action::MoveLeft));
    }

    #[test]
    fn test_bind_movement_adds_release_binding() {
        let mut config = InputConfig::default();
        config.bind(KeyCode::KeyA, Action::MoveLeft);
        config.bind(KeyCode::KeyS, Action::MoveDown);

        assert_eq!(
            config.axis_for_release(KeyCode::KeyA),
            Some(Axis::Horizontal)
        );
        assert_eq!(config.axis_for_release(KeyCode::KeyS), Some(Axis::Vertical));
    }

    #[test]
    fn test_rebind_movement_key_drops_release_binding() {
        let mut config = InputConfig::default();
        config.bind(KeyCode::ArrowUp, Action::Fire);

        assert_eq!(config.action_for(KeyCode::ArrowUp), Some(Action::Fire));
        assert_eq!(config.axis_for_release(KeyCode::ArrowUp), None);
    }

    #[test]
    fn test_unbind_key_removes_press_and_release() {
        let mut config = InputConfig::default();
        config.unbind_key(KeyCode::ArrowLeft);

        assert_eq!(config.action_for(KeyCode::ArrowLeft), None);
        assert_eq!(config.axis_for_release(KeyCode::ArrowLeft), None);
    }

    #[test]
    fn test_unbind_action() {
        let mut config = InputConfig::default();
        config.bind(KeyCode::KeyF, Action::Fire);
        config.unbind_action(Action::Fire);

        assert_eq!(config.action_for(KeyCode::Space), None);
        assert_eq!(config.action_for(KeyCode::KeyF), None);
    }

    #[test]
    fn test_unbind_movement_action_drops_release_bindings() {
        let mut config = InputConfig::default();
        config.unbind_action(Action::MoveRight);

        assert_eq!(config.action_for(KeyCode::ArrowRight), None);
        assert_eq!(config.axis_for_release(KeyCode::ArrowRight), None);
        assert_eq!(
            config.axis_for_release(KeyCode::ArrowLeft),
            Some(Axis::Horizontal)
        );
    }

    #[test]
    fn test_block_defaults_switch() {
        let mut config = InputConfig::default();
        assert!(config.is_blocked(KeyCode::ArrowDown));

        config.block_defaults = false;
        assert!(!config.is_blocked(KeyCode::ArrowDown));
    }

    #[test]
    fn test_block_and_unblock() {
        let mut config = InputConfig::default();
        config.block(KeyCode::Tab);
        config.unblock(KeyCode::Backspace);

        assert!(config.is_blocked(KeyCode::Tab));
        assert!(!config.is_blocked(KeyCode::Backspace));
    }

    #[test]
    fn test_reset_to_defaults_keeps_tuning() {
        let mut config = InputConfig::new();
        config.movement.speed = 8.0;
        config.reset_to_defaults();

        assert_eq!(config.action_for(KeyCode::ArrowUp), Some(Action::MoveUp));
        assert_eq!(config.movement.speed, 8.0);
    }

    #[test]
    fn test_validate_defaults() {
        assert!(InputConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_speed() {
        let mut config = InputConfig::default();
        config.movement.speed = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(InputError::InvalidSpeed(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_duration() {
        let mut config = InputConfig::default();
        config.movement.stop_duration = 0.0;
        assert!(matches!(
            config.validate(),
            Err(InputError::InvalidDuration { name: "stop", .. })
        ));
    }
}
