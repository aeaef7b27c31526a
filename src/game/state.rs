// Game session state

use super::Shared;
use crate::engine::events::{EventSink, GameEvent, LifecycleSignal};

/// Global game flags read by the input layer
#[derive(Debug, Default)]
pub struct GameState {
    active: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether gameplay input should be processed right now
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Starts and ends game sessions, announcing each transition on the bus
pub struct Session<E: EventSink> {
    game: Shared<GameState>,
    events: E,
    started: u32,
}

impl<E: EventSink> Session<E> {
    pub fn new(game: Shared<GameState>, events: E) -> Self {
        Self {
            game,
            events,
            started: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.game.borrow().is_active()
    }

    /// Begin a session, no-op if one is already running
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.game.borrow_mut().set_active(true);
        self.started += 1;
        log::info!("Session {} started", self.started);
        self.events
            .publish(GameEvent::Lifecycle(LifecycleSignal::SessionStarted));
    }

    /// End the running session, no-op if none is running
    pub fn end(&mut self) {
        if !self.is_running() {
            return;
        }
        self.game.borrow_mut().set_active(false);
        log::info!("Session {} ended", self.started);
        self.events
            .publish(GameEvent::Lifecycle(LifecycleSignal::SessionEnded));
    }

    pub fn toggle(&mut self) {
        if self.is_running() {
            self.end();
        } else {
            self.start();
        }
    }
}
