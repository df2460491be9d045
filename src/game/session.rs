use log::{debug, info};

use super::{
    action::{Command, Direction},
    config::GameConfig,
    engine::{GameEngine, TickOutcome},
    state::{CollisionType, GamePhase, GameState},
};
use crate::audio::{SoundCue, SoundSink};

/// Something a command or tick changed, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Turned(Direction),
    AteFruit,
    Died(CollisionType),
    Quit,
}

/// The Start / Playing / GameOver state machine.
///
/// Owns the simulation state and routes commands to it. Sound cues go to
/// the sink `S`, which keeps this type free of any audio backend.
pub struct GameSession<S: SoundSink> {
    engine: GameEngine,
    state: GameState,
    sounds: S,
    running: bool,
}

impl<S: SoundSink> GameSession<S> {
    pub fn new(config: GameConfig, sounds: S) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.initial_state();

        Self {
            engine,
            state,
            sounds,
            running: true,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    /// False once a quit was requested
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn sounds(&self) -> &S {
        &self.sounds
    }

    /// Route an input command to its handler
    pub fn handle(&mut self, command: Command) -> Option<GameEvent> {
        match command {
            Command::Begin => self.handle_begin(),
            Command::Turn(direction) => self.handle_direction(direction),
            Command::Quit => Some(self.handle_quit()),
        }
    }

    /// Start a fresh round from the start or game-over screen
    pub fn handle_begin(&mut self) -> Option<GameEvent> {
        if self.state.is_playing() {
            return None;
        }

        self.engine.reset(&mut self.state);
        self.state.phase = GamePhase::Playing;
        info!("Round started");
        Some(GameEvent::Started)
    }

    /// Steer the snake; reversals are dropped without a sound
    pub fn handle_direction(&mut self, direction: Direction) -> Option<GameEvent> {
        if !self.state.is_playing() {
            return None;
        }

        // Check the heading actually travelled too, not only the pending one
        if direction.is_opposite(self.state.direction)
            || direction.is_opposite(self.state.last_moved)
        {
            debug!("Ignored reversal to {direction:?}");
            return None;
        }

        self.state.direction = direction;
        self.sounds.play(SoundCue::DirectionChange);
        Some(GameEvent::Turned(direction))
    }

    /// Stop the session loop
    pub fn handle_quit(&mut self) -> GameEvent {
        self.running = false;
        info!("Quit requested");
        GameEvent::Quit
    }

    /// Advance the simulation one step
    pub fn tick(&mut self) -> Option<GameEvent> {
        match self.engine.tick(&mut self.state) {
            TickOutcome::Idle | TickOutcome::Moved => None,
            TickOutcome::AteFruit => Some(GameEvent::AteFruit),
            TickOutcome::Collided(collision) => {
                self.sounds.play(SoundCue::GameOver);
                info!(
                    "Game over ({collision:?}) with score {}",
                    self.state.score
                );
                Some(GameEvent::Died(collision))
            }
        }
    }
}
