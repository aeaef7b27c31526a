// Property tweening for actors
//
// Callers ask for a numeric actor property to ramp towards a target over a
// duration; `Tweener` advances the ramps every frame. Only one ramp per
// (actor, property) pair exists at a time, a newer request overwrites the older.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::math::{ease_out_quad, lerp, progress};
use crate::game::ActorId;

/// Animatable numeric actor properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Horizontal velocity
    XSpeed,
    /// Vertical velocity
    YSpeed,
}

/// An actor whose properties can be tweened
pub trait Tweenable {
    fn actor_id(&self) -> ActorId;
    fn property(&self, property: Property) -> f32;
    fn set_property(&mut self, property: Property, value: f32);
}

/// Requests ramps on actor properties
pub trait Animator {
    /// Ramp `property` of `actor` to `target` over `duration` seconds
    fn ramp_to(&mut self, actor: ActorId, property: Property, target: f32, duration: f32);

    /// Cancel any in-flight ramp on `property` of `actor`
    fn kill(&mut self, actor: ActorId, property: Property);
}

impl<A: Animator> Animator for Rc<RefCell<A>> {
    fn ramp_to(&mut self, actor: ActorId, property: Property, target: f32, duration: f32) {
        self.borrow_mut().ramp_to(actor, property, target, duration);
    }

    fn kill(&mut self, actor: ActorId, property: Property) {
        self.borrow_mut().kill(actor, property);
    }
}

/// A single in-flight ramp
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    pub actor: ActorId,
    pub property: Property,
    pub target: f32,
    pub duration: f32,
    elapsed: f32,
    /// Captured on the first update so the ramp starts from the live value
    from: Option<f32>,
}

impl Tween {
    fn new(actor: ActorId, property: Property, target: f32, duration: f32) -> Self {
        Self {
            actor,
            property,
            target,
            duration,
            elapsed: 0.0,
            from: None,
        }
    }

    /// Advance and write the new value, returns true once finished
    fn step(&mut self, dt: f32, actor: &mut dyn Tweenable) -> bool {
        let from = *self
            .from
            .get_or_insert_with(|| actor.property(self.property));
        self.elapsed += dt;

        let t = progress(self.elapsed, self.duration);
        let value = if t >= 1.0 {
            self.target
        } else {
            lerp(from, self.target, ease_out_quad(t))
        };
        actor.set_property(self.property, value);

        t >= 1.0
    }
}

/// Owns and advances all running tweens
#[derive(Debug, Default)]
pub struct Tweener {
    tweens: Vec<Tween>,
}

impl Tweener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every tween targeting `actor` by `dt` seconds
    pub fn update(&mut self, dt: f32, actor: &mut dyn Tweenable) {
        let id = actor.actor_id();
        self.tweens
            .retain_mut(|tween| tween.actor != id || !tween.step(dt, &mut *actor));
    }
}

#[cfg(test)]
impl Tweener {
    /// Target of the running tween on a property, if any
    pub fn target_of(&self, actor: ActorId, property: Property) -> Option<f32> {
        self.tweens
            .iter()
            .find(|t| t.actor == actor && t.property == property)
            .map(|t| t.target)
    }

    pub fn is_tweening(&self, actor: ActorId, property: Property) -> bool {
        self.target_of(actor, property).is_some()
    }

    /// Number of running tweens
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

impl Animator for Tweener {
    fn ramp_to(&mut self, actor: ActorId, property: Property, target: f32, duration: f32) {
        self.kill(actor, property);
        self.tweens
            .push(Tween::new(actor, property, target, duration));
    }

    fn kill(&mut self, actor: ActorId, property: Property) {
        self.tweens
            .retain(|t| !(t.actor == actor && t.property == property));
    }
}
