use std::time::{Duration, Instant};

/// In-memory statistics for the current program run
pub struct GameMetrics {
    pub round_started: Option<Instant>,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    pub fruit_eaten: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            round_started: None,
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            fruit_eaten: 0,
        }
    }

    /// Advance the round clock; frozen between rounds
    pub fn update(&mut self) {
        if let Some(started) = self.round_started {
            self.elapsed_time = started.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.round_started = Some(Instant::now());
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_fruit(&mut self) {
        self.fruit_eaten += 1;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.round_started = None;
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
