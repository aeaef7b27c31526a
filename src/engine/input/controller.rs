// Input controller - turns key events into ship actions
//
// Listeners are attached for the length of a game session. Key-down events
// are mapped to actions through the config, key-up events stop an axis.
// Movement is tracked per direction so a held key ramps the velocity once,
// and firing is coalesced to at most one request per rendered frame.

use super::action::{Action, Axis, Direction};
use super::config::InputConfig;
use super::listener::{KeyInput, KeyPhase, ListenerHandle};
use super::movement::MovementState;
use super::InputError;
use crate::engine::events::{EventSink, GameEvent, LifecycleSignal};
use crate::engine::frame::FrameScheduler;
use crate::engine::tween::Animator;
use crate::game::{ActorId, GameState, Player, Shared};
use winit::keyboard::KeyCode;

/// The session objects the controller reads from and acts on
#[derive(Debug, Clone)]
pub struct InputContext {
    pub game: Shared<GameState>,
    pub player: Shared<Player>,
}

/// Continuations run at the next frame boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameTask {
    ReleaseFire,
}

pub struct InputController<A: Animator, E: EventSink> {
    game: Shared<GameState>,
    player: Shared<Player>,
    config: InputConfig,

    /// Ramps velocity properties on the player
    animator: A,

    /// Receives fire and layer-switch requests
    events: E,

    movement: MovementState,

    /// Set from a fire request until the next frame boundary
    firing: bool,

    frames: FrameScheduler<FrameTask>,

    /// Present only while a session is running
    listeners: Option<ListenerHandle>,
}

impl<A: Animator, E: EventSink> InputController<A, E> {
    /// Create a controller for a session context
    /// No listeners are attached until `attach` is called
    pub fn new(
        context: InputContext,
        config: InputConfig,
        animator: A,
        events: E,
    ) -> Result<Self, InputError> {
        config.validate()?;

        Ok(Self {
            game: context.game,
            player: context.player,
            config,
            animator,
            events,
            movement: MovementState::new(),
            firing: false,
            frames: FrameScheduler::new(),
            listeners: None,
        })
    }

    /// Start listening for key events
    pub fn attach(&mut self) {
        if self.listeners.is_some() {
            log::trace!("Input listeners already attached");
            return;
        }

        let mut handle = ListenerHandle::new();
        handle.listen(KeyPhase::Pressed);
        handle.listen(KeyPhase::Released);
        self.listeners = Some(handle);
        log::info!("Input listeners attached");
    }

    /// Stop listening for key events
    /// No event is processed after this returns
    pub fn detach(&mut self) {
        let Some(mut handle) = self.listeners.take() else {
            log::trace!("Input listeners already detached");
            return;
        };
        handle.dispose();
        log::info!("Input listeners detached");

        if self.config.reset_movement_on_session_end {
            self.cancel_horizontal();
            self.cancel_vertical();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.listeners.is_some()
    }

    /// React to a session lifecycle transition
    pub fn on_signal(&mut self, signal: LifecycleSignal) {
        match signal {
            LifecycleSignal::SessionStarted => self.attach(),
            LifecycleSignal::SessionEnded => self.detach(),
        }
    }

    /// Feed a keyboard event, ignored unless a listener for its phase is attached
    pub fn handle_key(&mut self, event: &mut KeyInput) {
        let listening = self
            .listeners
            .as_ref()
            .is_some_and(|handle| handle.is_listening(event.phase));
        if !listening {
            return;
        }
        log::trace!(
            "Key {:?} {:?}{}",
            event.code,
            event.phase,
            if event.repeat { " (repeat)" } else { "" }
        );

        match event.phase {
            KeyPhase::Pressed => self.handle_key_down(event),
            KeyPhase::Released => self.handle_key_up(event.code),
        }
    }

    fn handle_key_down(&mut self, event: &mut KeyInput) {
        // Suppress defaults before the active check so menus don't scroll either
        if self.config.is_blocked(event.code) {
            event.prevent_default();
        }

        if !self.game.borrow().is_active() {
            return;
        }

        if let Some(action) = self.config.action_for(event.code) {
            self.dispatch(action);
        }
    }

    fn handle_key_up(&mut self, code: KeyCode) {
        match self.config.axis_for_release(code) {
            Some(Axis::Horizontal) => self.cancel_horizontal(),
            Some(Axis::Vertical) => self.cancel_vertical(),
            None => {}
        }
    }

    /// Run a single action with default parameters
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("Dispatching {:?}", action);
        match action {
            Action::Fire => self.fire(),
            Action::SwitchLayer => self.switch_layer(),
            Action::MoveUp => self.up(),
            Action::MoveDown => self.down(),
            Action::MoveLeft => self.left(),
            Action::MoveRight => self.right(),
        }
    }

    /// Request a bullet, at most once per rendered frame
    pub fn fire(&mut self) {
        if self.firing {
            log::trace!("Fire coalesced into the current frame");
            return;
        }
        self.firing = true;
        let actor = self.actor();
        self.events.publish(GameEvent::FireRequested(actor));
        self.frames.schedule_next_frame(FrameTask::ReleaseFire);
    }

    /// Move the player to the other layer unless it is already on its way
    pub fn switch_layer(&mut self) {
        let actor = {
            let mut player = self.player.borrow_mut();
            if player.is_switching() {
                log::trace!("Layer switch already in progress");
                return;
            }
            player.switch_layer();
            player.id
        };
        self.events.publish(GameEvent::LayerSwitchStarted(actor));
    }

    /// Start moving in `direction`, ramping up over `duration` seconds
    ///
    /// Does nothing if the direction is already active. With `kill_existing`
    /// any running ramp on the axis is cancelled before the new one starts.
    pub fn move_in(&mut self, direction: Direction, duration: f32, kill_existing: bool) {
        if !self.movement.activate(direction) {
            return;
        }

        let actor = self.actor();
        let property = direction.axis().property();
        if kill_existing {
            self.animator.kill(actor, property);
        }
        let target = direction.sign() * self.config.movement.speed;
        self.animator.ramp_to(actor, property, target, duration);
    }

    pub fn move_up(&mut self, duration: f32, kill_existing: bool) {
        self.move_in(Direction::Up, duration, kill_existing);
    }

    pub fn move_down(&mut self, duration: f32, kill_existing: bool) {
        self.move_in(Direction::Down, duration, kill_existing);
    }

    pub fn move_left(&mut self, duration: f32, kill_existing: bool) {
        self.move_in(Direction::Left, duration, kill_existing);
    }

    pub fn move_right(&mut self, duration: f32, kill_existing: bool) {
        self.move_in(Direction::Right, duration, kill_existing);
    }

    pub fn up(&mut self) {
        self.move_up(self.config.movement.ramp_duration, false);
    }

    pub fn down(&mut self) {
        self.move_down(self.config.movement.ramp_duration, false);
    }

    pub fn left(&mut self) {
        self.move_left(self.config.movement.ramp_duration, false);
    }

    pub fn right(&mut self) {
        self.move_right(self.config.movement.ramp_duration, false);
    }

    /// Ease horizontal velocity back to zero
    pub fn cancel_horizontal(&mut self) {
        self.cancel_axis(Axis::Horizontal);
    }

    /// Ease vertical velocity back to zero
    pub fn cancel_vertical(&mut self) {
        self.cancel_axis(Axis::Vertical);
    }

    fn cancel_axis(&mut self, axis: Axis) {
        if !self.movement.cancel(axis) {
            return;
        }
        let actor = self.actor();
        let duration = self.config.movement.stop_duration;
        self.animator.ramp_to(actor, axis.property(), 0.0, duration);
    }

    /// Cross a rendered-frame boundary
    pub fn on_frame(&mut self) {
        for task in self.frames.advance() {
            match task {
                FrameTask::ReleaseFire => self.firing = false,
            }
        }
    }

    fn actor(&self) -> ActorId {
        self.player.borrow().id
    }

    pub fn movement(&self) -> &MovementState {
        &self.movement
    }
}

#[cfg(test)]
impl<A: Animator, E: EventSink> InputController<A, E> {
    /// True from a fire request until the next frame boundary
    pub fn is_firing(&self) -> bool {
        self.firing
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }
}
