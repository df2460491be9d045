use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::grid::{Cell, Grid};
use super::snake::Snake;

/// How a new fruit cell is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FruitPlacement {
    /// Any cell of the grid, including ones under the snake
    #[default]
    Uniform,
    /// Any cell not occupied by the snake
    AvoidSnake,
}

/// Picks fruit cells from a seedable random source
pub struct FruitSpawner {
    rng: StdRng,
    placement: FruitPlacement,
}

impl FruitSpawner {
    /// Create a spawner; without a seed the RNG is seeded from the OS
    pub fn new(placement: FruitPlacement, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, placement }
    }

    /// Choose the next fruit cell
    pub fn spawn(&mut self, grid: &Grid, snake: &Snake) -> Cell {
        match self.placement {
            FruitPlacement::Uniform => self.spawn_uniform(grid),
            FruitPlacement::AvoidSnake => self.spawn_avoid_snake(grid, snake),
        }
    }

    fn spawn_uniform(&mut self, grid: &Grid) -> Cell {
        let x = self.rng.gen_range(0..grid.columns());
        let y = self.rng.gen_range(0..grid.rows());
        Cell::new(x, y)
    }

    fn spawn_avoid_snake(&mut self, grid: &Grid, snake: &Snake) -> Cell {
        let free: Vec<Cell> = grid.cells().filter(|cell| !snake.contains(*cell)).collect();

        match free.choose(&mut self.rng) {
            Some(cell) => *cell,
            // Snake fills the board; nothing better to offer
            None => self.spawn_uniform(grid),
        }
    }
}
