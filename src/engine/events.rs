// Typed game message bus
//
// Publishers push `GameEvent`s into an `EventSink`; the game loop drains the
// queue once per frame and routes each event to whoever cares about it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::game::ActorId;

/// Session lifecycle transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleSignal {
    /// A game session began, input should be handled
    SessionStarted,
    /// The game is over, input handling must stop
    SessionEnded,
}

/// Everything that travels over the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The actor wants to spawn a bullet this frame
    FireRequested(ActorId),
    /// The actor began moving to the other layer
    LayerSwitchStarted(ActorId),
    Lifecycle(LifecycleSignal),
}

/// Anything that accepts published events
pub trait EventSink {
    fn publish(&mut self, event: GameEvent);
}

impl<S: EventSink> EventSink for Rc<RefCell<S>> {
    fn publish(&mut self, event: GameEvent) {
        self.borrow_mut().publish(event);
    }
}

/// FIFO event queue
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued event in publish order
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.queue.drain(..).collect()
    }
}

#[cfg(test)]
impl EventQueue {
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl EventSink for EventQueue {
    fn publish(&mut self, event: GameEvent) {
        log::trace!("Published {:?}", event);
        self.queue.push_back(event);
    }
}
