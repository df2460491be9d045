//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Sound is reached only through the `SoundSink` trait.

pub mod action;
pub mod config;
pub mod engine;
pub mod fruit;
pub mod grid;
pub mod session;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, TickOutcome};
pub use fruit::{FruitPlacement, FruitSpawner};
pub use grid::{Cell, Grid, PixelRect};
pub use session::{GameEvent, GameSession};
pub use snake::Snake;
pub use state::{
    CollisionType, DEFAULT_DIRECTION, GamePhase, GameState, SCORE_PER_FRUIT, SNAKE_ORIGIN,
};
