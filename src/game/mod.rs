// Game model
//
// - `player`: the controlled ship, its velocities and layer transitions
// - `state`: whether a session is running, and the session driver that
//   announces start/end on the event bus

pub mod player;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

/// Single-threaded shared ownership for model objects
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value for shared ownership
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Unique identifier for an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u32);

pub use player::Player;
pub use state::{GameState, Session};
