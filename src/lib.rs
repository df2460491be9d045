//! Terminal Snake
//!
//! This library provides:
//! - Core game logic and the Start/Playing/GameOver state machine (game module)
//! - Optional art and sound assets (assets, audio modules)
//! - TUI rendering and keyboard input (render, input modules)
//! - The interactive terminal loop (app module)

pub mod app;
pub mod assets;
pub mod audio;
pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod render;
