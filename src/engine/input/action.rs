// Game action definitions and default key tables

use winit::keyboard::KeyCode;

use crate::engine::tween::Property;

/// Everything a key press can ask the player ship to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Fire,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    SwitchLayer,
}

impl Action {
    /// The direction this action moves in, if it is a movement action
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::MoveUp => Some(Direction::Up),
            Self::MoveDown => Some(Direction::Down),
            Self::MoveLeft => Some(Direction::Left),
            Self::MoveRight => Some(Direction::Right),
            Self::Fire | Self::SwitchLayer => None,
        }
    }
}

/// A movement axis, each backed by one velocity property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The velocity property ramped for this axis
    pub fn property(self) -> Property {
        match self {
            Self::Horizontal => Property::XSpeed,
            Self::Vertical => Property::YSpeed,
        }
    }

    /// Both directions lying on this axis
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Self::Horizontal => [Direction::Left, Direction::Right],
            Self::Vertical => [Direction::Up, Direction::Down],
        }
    }
}

/// One of the four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Velocity sign, screen coordinates grow right and down
    pub fn sign(self) -> f32 {
        match self {
            Self::Up | Self::Left => -1.0,
            Self::Down | Self::Right => 1.0,
        }
    }
}

/// Default key-down bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::Space, Action::Fire),
        (KeyCode::ArrowUp, Action::MoveUp),
        (KeyCode::ArrowDown, Action::MoveDown),
        (KeyCode::ArrowRight, Action::MoveRight),
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::Enter, Action::SwitchLayer),
    ]
}

/// Default key-up bindings, releasing a direction stops its whole axis
pub fn default_release_bindings() -> Vec<(KeyCode, Axis)> {
    vec![
        (KeyCode::ArrowUp, Axis::Vertical),
        (KeyCode::ArrowDown, Axis::Vertical),
        (KeyCode::ArrowRight, Axis::Horizontal),
        (KeyCode::ArrowLeft, Axis::Horizontal),
    ]
}

/// Keys whose platform default (page scroll, history back) is suppressed
pub fn default_blocked_keys() -> Vec<KeyCode> {
    vec![
        KeyCode::Backspace,
        KeyCode::Space,
        KeyCode::ArrowLeft,
        KeyCode::ArrowUp,
        KeyCode::ArrowRight,
        KeyCode::ArrowDown,
    ]
}
