use anyhow::Result;
use glam::Vec2;
use log::info;
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::events::{EventQueue, GameEvent};
use engine::frame::FrameClock;
use engine::input::{Action, InputConfig, InputContext, InputController, KeyInput};
use engine::tween::Tweener;
use game::{shared, ActorId, GameState, Player, Session, Shared};

type Controller = InputController<Shared<Tweener>, Shared<EventQueue>>;

/// Hand queued events to their consumers
fn route_events(
    bus: &Shared<EventQueue>,
    controller: &mut Controller,
    player: &Shared<Player>,
) {
    // Drain first, the controller publishes into the same queue
    let events = bus.borrow_mut().drain();
    for event in events {
        match event {
            GameEvent::Lifecycle(signal) => controller.on_signal(signal),
            GameEvent::FireRequested(actor) => {
                info!("Bullet fired by {:?}", actor);
            }
            GameEvent::LayerSwitchStarted(actor) => {
                info!(
                    "{:?} switching to {:?} layer",
                    actor,
                    player.borrow().layer()
                );
            }
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Layer Shooter...");

    let game = shared(GameState::new());
    let player = shared(Player::new(ActorId(1), Vec2::ZERO));
    let tweener = shared(Tweener::new());
    let bus = shared(EventQueue::new());

    let mut config = InputConfig::default();
    config.bind(KeyCode::KeyW, Action::MoveUp);
    config.bind(KeyCode::KeyA, Action::MoveLeft);
    config.bind(KeyCode::KeyS, Action::MoveDown);
    config.bind(KeyCode::KeyD, Action::MoveRight);

    let mut session = Session::new(game.clone(), bus.clone());
    let mut controller: Controller = InputController::new(
        InputContext {
            game,
            player: player.clone(),
        },
        config,
        tweener.clone(),
        bus.clone(),
    )?;
    let mut clock = FrameClock::new();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Layer Shooter")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created, press Escape to start or end a session");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                if event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                    && event.state == ElementState::Pressed
                    && !event.repeat
                {
                    session.toggle();
                    route_events(&bus, &mut controller, &player);
                    log::debug!("Input attached: {}", controller.is_attached());
                } else if let Some(mut input) = KeyInput::from_winit(&event) {
                    controller.handle_key(&mut input);
                    if input.default_prevented() {
                        log::trace!("Suppressed default for {:?}", input.code);
                    }
                }
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let dt = clock.begin_frame();
                controller.on_frame();

                {
                    let mut player = player.borrow_mut();
                    tweener.borrow_mut().update(dt, &mut *player);
                    player.update(dt);
                }

                route_events(&bus, &mut controller, &player);

                if clock.frame_count() % 600 == 0 {
                    let movement = controller.movement();
                    log::debug!(
                        "{:.1} fps, player at {:?}, moving {:?}",
                        clock.fps(),
                        player.borrow().position,
                        if movement.is_idle() {
                            Vec::new()
                        } else {
                            movement.active_directions()
                        }
                    );
                }
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
