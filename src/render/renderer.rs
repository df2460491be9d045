use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::assets::{Artwork, Assets};
use crate::game::{Cell, GamePhase, GameState};
use crate::metrics::GameMetrics;

/// Terminal columns used to draw one grid cell
const CELL_WIDTH: u16 = 2;

/// Draws the current game state. Never mutates it.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        metrics: &GameMetrics,
        assets: &Assets,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0], state, metrics);

        let board = centered(chunks[1], board_width(state), board_height(state));
        let body = match state.phase {
            GamePhase::Start => self.render_start(assets.start.as_ref()),
            GamePhase::Playing => self.render_grid(state, assets.background.as_ref()),
            GamePhase::GameOver => self.render_game_over(state, assets.game_over.as_ref()),
        };
        frame.render_widget(body, board);

        let controls = self.render_controls(state.phase);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_header(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &GameState,
        metrics: &GameMetrics,
    ) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        // In-game score sits top-left
        if state.phase == GamePhase::Playing {
            let score = Paragraph::new(Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Moves: ", Style::default().fg(Color::Yellow)),
                Span::styled(state.steps.to_string(), Style::default().fg(Color::White)),
            ]))
            .alignment(Alignment::Left);
            frame.render_widget(score, halves[0]);
        }

        let stats = Paragraph::new(Line::from(vec![
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("  "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("  "),
            Span::styled("Fruit: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.fruit_eaten.to_string(), Style::default().fg(Color::White)),
            Span::raw("  "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(stats, halves[1]);
    }

    fn render_grid(&self, state: &GameState, background: Option<&Artwork>) -> Paragraph<'static> {
        let mut lines = Vec::new();

        for y in 0..state.grid.rows() {
            let mut spans = Vec::new();

            for x in 0..state.grid.columns() {
                let cell = Cell::new(x, y);

                let span = if cell == state.snake.head() {
                    // Snake head - distinct color
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if cell == state.fruit {
                    // Fruit stays visible even on top of the body
                    Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.contains(cell) {
                    Span::styled("□ ", Style::default().fg(Color::White))
                } else {
                    self.background_span(background, x, y)
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn background_span(&self, background: Option<&Artwork>, x: i32, y: i32) -> Span<'static> {
        match background {
            Some(art) => Span::styled(
                art.slice(
                    y as usize,
                    x as usize * CELL_WIDTH as usize,
                    CELL_WIDTH as usize,
                ),
                Style::default().fg(Color::DarkGray),
            ),
            None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
        }
    }

    fn render_start(&self, art: Option<&Artwork>) -> Paragraph<'static> {
        let mut text = art_lines(art, "S N A K E", Color::Green);
        text.push(Line::from(""));
        text.push(prompt_line("start"));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_game_over(&self, state: &GameState, art: Option<&Artwork>) -> Paragraph<'static> {
        let mut text = art_lines(art, "GAME OVER", Color::Red);
        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Your Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        text.push(Line::from(""));
        text.push(prompt_line("play again"));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, phase: GamePhase) -> Paragraph<'static> {
        let text = match phase {
            GamePhase::Playing => Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            GamePhase::Start | GamePhase::GameOver => Line::from(vec![
                Span::styled("Space", Style::default().fg(Color::Green)),
                Span::raw(" to play | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        };

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn board_width(state: &GameState) -> u16 {
    state.grid.columns() as u16 * CELL_WIDTH + 2
}

fn board_height(state: &GameState) -> u16 {
    state.grid.rows() as u16 + 2
}

/// A `width` x `height` rect in the middle of `area`, clipped to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Art lines, or a bold title when the art is missing
fn art_lines(art: Option<&Artwork>, fallback: &str, color: Color) -> Vec<Line<'static>> {
    match art {
        Some(art) => art
            .lines()
            .iter()
            .map(|line| Line::from(Span::styled(line.clone(), Style::default().fg(color))))
            .collect(),
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                fallback.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ],
    }
}

fn prompt_line(action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::Gray)),
        Span::styled(
            "Space",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" to {action} or "), Style::default().fg(Color::Gray)),
        Span::styled(
            "Q",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to quit", Style::default().fg(Color::Gray)),
    ])
}
