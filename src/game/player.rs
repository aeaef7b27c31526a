// The player-controlled ship

use glam::Vec2;

use super::ActorId;
use crate::engine::tween::{Property, Tweenable};

/// Time a layer transition takes to complete (seconds)
pub const LAYER_SWITCH_DURATION: f32 = 0.5;

/// Speeds are expressed in world units per frame at this rate
const REFERENCE_FPS: f32 = 60.0;

/// The two depth planes an actor can occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layer {
    #[default]
    Front,
    Back,
}

impl Layer {
    pub fn other(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// The ship the local player flies
#[derive(Debug, Clone)]
pub struct Player {
    pub id: ActorId,
    pub position: Vec2,

    /// Horizontal velocity, animated by the tweener
    pub x_speed: f32,
    /// Vertical velocity, animated by the tweener
    pub y_speed: f32,

    layer: Layer,
    switching: bool,
    switch_elapsed: f32,
}

impl Player {
    pub fn new(id: ActorId, position: Vec2) -> Self {
        Self {
            id,
            position,
            x_speed: 0.0,
            y_speed: 0.0,
            layer: Layer::default(),
            switching: false,
            switch_elapsed: 0.0,
        }
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// True while a layer transition is in progress
    pub fn is_switching(&self) -> bool {
        self.switching
    }

    /// Start moving to the other layer
    /// Ignored while a transition is already running
    pub fn switch_layer(&mut self) {
        if self.switching {
            return;
        }
        self.switching = true;
        self.switch_elapsed = 0.0;
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.x_speed, self.y_speed)
    }

    /// Integrate position and advance any layer transition
    pub fn update(&mut self, dt: f32) {
        self.position += self.velocity() * dt * REFERENCE_FPS;

        if self.switching {
            self.switch_elapsed += dt;
            if self.switch_elapsed >= LAYER_SWITCH_DURATION {
                self.layer = self.layer.other();
                self.switching = false;
                log::debug!("Actor {:?} arrived on layer {:?}", self.id, self.layer);
            }
        }
    }
}

impl Tweenable for Player {
    fn actor_id(&self) -> ActorId {
        self.id
    }

    fn property(&self, property: Property) -> f32 {
        match property {
            Property::XSpeed => self.x_speed,
            Property::YSpeed => self.y_speed,
        }
    }

    fn set_property(&mut self, property: Property, value: f32) {
        match property {
            Property::XSpeed => self.x_speed = value,
            Property::YSpeed => self.y_speed = value,
        }
    }
}
