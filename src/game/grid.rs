use super::action::Direction;

/// Edge length of one grid cell, in pixels
pub const CELL_SIZE: i32 = 20;
/// Playfield width, in pixels
pub const PLAYFIELD_WIDTH: i32 = 640;
/// Playfield height, in pixels
pub const PLAYFIELD_HEIGHT: i32 = 480;

/// A cell on the game grid, in grid coordinates (not pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Pixel-space rectangle covered by a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Fixed playfield geometry.
///
/// The playfield is described in pixels and divided into square cells;
/// everything in the simulation works on whole cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cell_size: i32,
    width_px: i32,
    height_px: i32,
}

impl Grid {
    pub const fn new(cell_size: i32, width_px: i32, height_px: i32) -> Self {
        Self {
            cell_size,
            width_px,
            height_px,
        }
    }

    /// Number of whole cells across
    pub fn columns(&self) -> i32 {
        self.width_px / self.cell_size
    }

    /// Number of whole cells down
    pub fn rows(&self) -> i32 {
        self.height_px / self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.columns() * self.rows()) as usize
    }

    /// Check if a cell lies within [0, columns) x [0, rows)
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.columns() && cell.y >= 0 && cell.y < self.rows()
    }

    /// Map a pixel coordinate to the cell under it
    pub fn cell_at(&self, px: i32, py: i32) -> Option<Cell> {
        if px < 0 || py < 0 {
            return None;
        }
        let cell = Cell::new(px / self.cell_size, py / self.cell_size);
        self.contains(cell).then_some(cell)
    }

    /// Pixel rectangle covered by a cell
    pub fn cell_rect(&self, cell: Cell) -> PixelRect {
        PixelRect {
            x: cell.x * self.cell_size,
            y: cell.y * self.cell_size,
            width: self.cell_size,
            height: self.cell_size,
        }
    }

    /// Every cell of the grid, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let columns = self.columns();
        (0..self.rows()).flat_map(move |y| (0..columns).map(move |x| Cell::new(x, y)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(CELL_SIZE, PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)
    }
}
