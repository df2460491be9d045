use log::debug;

use super::{
    config::GameConfig,
    fruit::FruitSpawner,
    grid::Grid,
    snake::Snake,
    state::{CollisionType, DEFAULT_DIRECTION, GamePhase, GameState, SCORE_PER_FRUIT, SNAKE_ORIGIN},
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing moved
    Idle,
    /// Moved one cell without eating
    Moved,
    /// Moved onto the fruit and grew
    AteFruit,
    /// The move ended the game
    Collided(CollisionType),
}

/// Advances the simulation one cell per tick
pub struct GameEngine {
    config: GameConfig,
    spawner: FruitSpawner,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let spawner = FruitSpawner::new(config.fruit_placement, config.seed);
        Self { config, spawner }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh state sitting on the start screen
    pub fn initial_state(&mut self) -> GameState {
        let grid = Grid::default();
        let snake = Snake::new(SNAKE_ORIGIN);
        let fruit = self.spawner.spawn(&grid, &snake);

        GameState::new(grid, snake, fruit, DEFAULT_DIRECTION)
    }

    /// Put the round back to its opening position. The phase is left alone.
    pub fn reset(&mut self, state: &mut GameState) {
        state.snake = Snake::new(SNAKE_ORIGIN);
        state.direction = DEFAULT_DIRECTION;
        state.last_moved = DEFAULT_DIRECTION;
        state.score = 0;
        state.steps = 0;
        state.fruit = self.spawner.spawn(&state.grid, &state.snake);
    }

    /// Execute one step of the game
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if !state.is_playing() {
            return TickOutcome::Idle;
        }

        let new_head = state.snake.head().moved_in_direction(state.direction);

        // Leave the body untouched when running off the board
        if !state.is_in_bounds(new_head) {
            state.phase = GamePhase::GameOver;
            debug!("Hit the wall at ({}, {})", new_head.x, new_head.y);
            return TickOutcome::Collided(CollisionType::Wall);
        }

        state.snake.push_head(new_head);
        state.last_moved = state.direction;
        state.steps += 1;

        let ate_fruit = new_head == state.fruit;
        if ate_fruit {
            state.score += SCORE_PER_FRUIT;
            state.fruit = self.spawner.spawn(&state.grid, &state.snake);
        } else {
            state.snake.pop_tail();
        }

        // Checked after growth too: eating into the tail is still fatal
        if state.snake.collides_with_body(new_head) {
            state.phase = GamePhase::GameOver;
            debug!("Bit itself at ({}, {})", new_head.x, new_head.y);
            return TickOutcome::Collided(CollisionType::SelfCollision);
        }

        if ate_fruit {
            TickOutcome::AteFruit
        } else {
            TickOutcome::Moved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Direction, FruitPlacement, FruitSpawner};

    fn playing_state(engine: &mut GameEngine, cells: Vec<Cell>, direction: Direction) -> GameState {
        let mut state = engine.initial_state();
        state.snake = Snake::from_cells(cells).unwrap();
        state.direction = direction;
        state.last_moved = direction;
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_initial_state() {
        let mut engine = GameEngine::new(GameConfig::seeded(1));
        let state = engine.initial_state();

        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.snake.cells(), &[SNAKE_ORIGIN]);
        assert_eq!(state.direction, Direction::Right);
        assert!(state.is_in_bounds(state.fruit));
    }

    #[test]
    fn test_tick_outside_playing_is_noop() {
        let mut engine = GameEngine::new(GameConfig::seeded(1));
        let mut state = engine.initial_state();
        let before = state.clone();

        assert_eq!(engine.tick(&mut state), TickOutcome::Idle);
        assert_eq!(state, before);

        state.phase = GamePhase::GameOver;
        let before = state.clone();
        assert_eq!(engine.tick(&mut state), TickOutcome::Idle);
        assert_eq!(state, before);
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = GameEngine::new(GameConfig::seeded(1));
        let mut state = playing_state(&mut engine, vec![Cell::new(10, 10)], Direction::Right);
        state.fruit = Cell::new(0, 0);

        assert_eq!(engine.tick(&mut state), TickOutcome::Moved);
        assert_eq!(state.snake.cells(), &[Cell::new(11, 10)]);
        assert_eq!(state.steps, 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_eating_fruit_grows_and_scores() {
        let mut engine = GameEngine::new(GameConfig::seeded(5));
        let mut state = playing_state(&mut engine, vec![Cell::new(10, 10)], Direction::Right);
        state.fruit = Cell::new(11, 10);

        // Replay the spawner to know where the next fruit must land
        let mut replay = FruitSpawner::new(FruitPlacement::Uniform, Some(5));
        let _initial = replay.spawn(&state.grid, &state.snake);
        let expected_fruit = replay.spawn(&state.grid, &state.snake);

        assert_eq!(engine.tick(&mut state), TickOutcome::AteFruit);
        assert_eq!(state.snake.cells(), &[Cell::new(11, 10), Cell::new(10, 10)]);
        assert_eq!(state.score, 10);
        assert_eq!(state.fruit, expected_fruit);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_length_grows_only_on_fruit() {
        let mut engine = GameEngine::new(GameConfig::seeded(2));
        let mut state = playing_state(&mut engine, vec![Cell::new(0, 5)], Direction::Right);

        for x in 1..30 {
            let len_before = state.snake.len();
            let on_fruit = x % 3 == 0;
            state.fruit = if on_fruit { Cell::new(x, 5) } else { Cell::new(x, 20) };

            engine.tick(&mut state);

            assert_eq!(state.phase, GamePhase::Playing);
            if on_fruit {
                assert_eq!(state.snake.len(), len_before + 1);
            } else {
                assert_eq!(state.snake.len(), len_before);
            }
        }
    }

    #[test]
    fn test_wall_collision_leaves_snake_untouched() {
        let mut engine = GameEngine::new(GameConfig::seeded(1));
        let mut state = playing_state(&mut engine, vec![Cell::new(0, 0)], Direction::Left);
        let snake_before = state.snake.clone();

        let outcome = engine.tick(&mut state);

        assert_eq!(outcome, TickOutcome::Collided(CollisionType::Wall));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.snake, snake_before);
    }

    #[test]
    fn test_every_wall_is_fatal() {
        let cases = [
            (Cell::new(0, 7), Direction::Left),
            (Cell::new(31, 7), Direction::Right),
            (Cell::new(7, 0), Direction::Up),
            (Cell::new(7, 23), Direction::Down),
        ];

        for (head, direction) in cases {
            let mut engine = GameEngine::new(GameConfig::seeded(1));
            let mut state = playing_state(&mut engine, vec![head], direction);

            assert_eq!(
                engine.tick(&mut state),
                TickOutcome::Collided(CollisionType::Wall)
            );
            assert_eq!(state.snake.cells(), &[head]);
        }
    }

    #[test]
    fn test_self_collision() {
        let mut engine = GameEngine::new(GameConfig::seeded(1));
        // Head at (5,5) turning down into (5,6), which stays occupied after the tail moves
        let mut state = playing_state(
            &mut engine,
            vec![
                Cell::new(5, 5),
                Cell::new(4, 5),
                Cell::new(4, 6),
                Cell::new(5, 6),
                Cell::new(6, 6),
            ],
            Direction::Down,
        );
        state.fruit = Cell::new(20, 20);

        let outcome = engine.tick(&mut state);

        assert_eq!(outcome, TickOutcome::Collided(CollisionType::SelfCollision));
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_following_own_tail_is_safe() {
        let mut engine = GameEngine::new(GameConfig::seeded(1));
        // A 2x2 loop: the head moves into the cell the tail is leaving
        let mut state = playing_state(
            &mut engine,
            vec![
                Cell::new(5, 5),
                Cell::new(6, 5),
                Cell::new(6, 6),
                Cell::new(5, 6),
            ],
            Direction::Down,
        );
        state.fruit = Cell::new(20, 20);

        assert_eq!(engine.tick(&mut state), TickOutcome::Moved);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.snake.head(), Cell::new(5, 6));
    }

    #[test]
    fn test_eating_into_tail_is_fatal() {
        let mut engine = GameEngine::new(GameConfig::seeded(1));
        let mut state = playing_state(
            &mut engine,
            vec![
                Cell::new(5, 5),
                Cell::new(6, 5),
                Cell::new(6, 6),
                Cell::new(5, 6),
            ],
            Direction::Down,
        );
        // Fruit on the tail keeps the tail in place, so the head lands on it
        state.fruit = Cell::new(5, 6);

        let outcome = engine.tick(&mut state);

        assert_eq!(outcome, TickOutcome::Collided(CollisionType::SelfCollision));
        assert_eq!(state.score, 10);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(GameConfig::seeded(4));
        let mut state = playing_state(
            &mut engine,
            vec![Cell::new(3, 3), Cell::new(3, 4)],
            Direction::Up,
        );
        state.score = 40;
        state.steps = 12;

        engine.reset(&mut state);

        assert_eq!(state.snake.cells(), &[SNAKE_ORIGIN]);
        assert_eq!(state.direction, DEFAULT_DIRECTION);
        assert_eq!(state.last_moved, DEFAULT_DIRECTION);
        assert_eq!(state.score, 0);
        assert_eq!(state.steps, 0);
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
