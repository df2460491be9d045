use super::action::Direction;
use super::grid::{Cell, Grid};
use super::snake::Snake;

/// Where every new round starts
pub const SNAKE_ORIGIN: Cell = Cell::new(10, 10);
/// Heading of a fresh snake
pub const DEFAULT_DIRECTION: Direction = Direction::Right;
/// Points awarded per fruit
pub const SCORE_PER_FRUIT: u32 = 10;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the first round
    Start,
    Playing,
    GameOver,
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete simulation state.
///
/// Holds no presentation resources, so it can be driven and inspected
/// without a terminal or audio device.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub fruit: Cell,
    /// Heading used on the next tick
    pub direction: Direction,
    /// Heading of the last completed move
    pub last_moved: Direction,
    pub score: u32,
    pub steps: u32,
    pub phase: GamePhase,
}

impl GameState {
    /// Create a new game state on the start screen
    pub fn new(grid: Grid, snake: Snake, fruit: Cell, direction: Direction) -> Self {
        Self {
            grid,
            snake,
            fruit,
            direction,
            last_moved: direction,
            score: 0,
            steps: 0,
            phase: GamePhase::Start,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Check if a cell is within the grid bounds
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        self.grid.contains(cell)
    }
}
