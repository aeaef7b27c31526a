// Engine modules: frame timing, message bus, tweening, input

pub mod events;
pub mod frame;
pub mod input;
pub mod tween;
