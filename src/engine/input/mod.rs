// Keyboard input handling
//
// Translates raw key events into ship actions for the duration of a game
// session, keeps movement actuation idempotent and limits firing to one
// request per rendered frame.
//
// ## Architecture
//
// - `action`: Game actions, directions/axes and the default key tables
// - `config`: Key remapping, default suppression and movement tuning
// - `listener`: Keyboard events and listener registrations
// - `movement`: Per-direction movement state
// - `controller`: The controller tying it all together
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputConfig, InputContext, InputController, KeyInput};
//
// let mut controller = InputController::new(context, InputConfig::default(), tweener, bus)?;
//
// // Session manager announces the start of a game
// controller.on_signal(LifecycleSignal::SessionStarted);
//
// // In your event loop, feed keyboard events
// controller.handle_key(&mut KeyInput::pressed(KeyCode::Space));
//
// // Once per rendered frame
// controller.on_frame();
// ```

pub mod action;
pub mod config;
pub mod controller;
pub mod listener;
pub mod movement;

pub use action::Action;
pub use config::InputConfig;
pub use controller::{InputContext, InputController};
pub use listener::KeyInput;

/// Input configuration errors
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Invalid movement speed: {0}")]
    InvalidSpeed(f32),

    #[error("Invalid {name} duration: {value}")]
    InvalidDuration { name: &'static str, value: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        let err = InputError::InvalidDuration {
            name: "ramp",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "Invalid ramp duration: -1");
    }
}
