//! Terminal front end: configuration and the interactive loop

pub mod config;
pub mod runner;

pub use config::AppConfig;
pub use runner::App;
