use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{MissedTickBehavior, interval};

use super::config::AppConfig;
use crate::assets::Assets;
use crate::audio::AudioPlayer;
use crate::game::{GameEvent, GameSession};
use crate::input::InputHandler;
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Interactive terminal session: input, ticks, drawing and sound
pub struct App {
    session: GameSession<AudioPlayer>,
    assets: Assets,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let assets = Assets::load(&config.asset_dir);
        let audio = AudioPlayer::new(&config.asset_dir, config.muted);

        Self {
            session: GameSession::new(config.game.clone(), audio),
            assets,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Restore even when the loop failed
        self.cleanup_terminal(&mut terminal)?;

        info!(
            "Session over: {} games, best score {}",
            self.metrics.games_played, self.metrics.high_score
        );
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.session.config().tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while self.session.is_running() {
            self.metrics.update();
            terminal
                .draw(|frame| {
                    self.renderer
                        .render(frame, self.session.state(), &self.metrics, &self.assets);
                })
                .context("Failed to draw frame")?;

            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => {
                            self.session.handle_quit();
                        }
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    let event = self.session.tick();
                    self.record(event);
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.session.handle_quit();
                }
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            if let Some(command) = self.input_handler.handle_key_event(key) {
                let event = self.session.handle(command);
                self.record(event);
            }
        }
    }

    /// Keep the stats in step with what the session reports
    fn record(&mut self, event: Option<GameEvent>) {
        match event {
            Some(GameEvent::Started) => self.metrics.on_game_start(),
            Some(GameEvent::AteFruit) => self.metrics.on_fruit(),
            Some(GameEvent::Died(_)) => self.metrics.on_game_over(self.session.state().score),
            Some(GameEvent::Turned(_)) | Some(GameEvent::Quit) | None => {}
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
