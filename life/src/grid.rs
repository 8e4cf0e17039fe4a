// grid.rs - Fixed-size Game of Life grid with a clipped (non-wrapping) border

use crate::error::{LifeError, Result};

// Default playing area, large enough for every built-in preset
pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 50;

// Relative positions of the 8 neighbours at Chebyshev distance 1
const NEIGHBOURS: [(i32, i32); 8] = [
    (-1,-1),(0,-1),(1,-1),(-1,0),
    (1,0),(-1,1),(0,1),(1,1)
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
}

/// Outcome of one generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepResult {
    pub changed_count: usize,
    pub births: usize,
    pub deaths: usize,
}

/// Every coordinate in `[0, width) x [0, height)` owns exactly one cell,
/// stored row-major at `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let mut grid = Self { width: 0, height: 0, cells: Vec::new() };
        grid.initialize(width, height)?;
        Ok(grid)
    }

    /// Replaces the contents with a fully dead `width x height` grid.
    /// On error the previous contents are kept.
    pub fn initialize(&mut self, width: usize, height: usize) -> Result<()> {
        let fits = |side: usize| side > 0 && side <= i32::MAX as usize;
        if !fits(width) || !fits(height) {
            return Err(LifeError::InvalidDimension { width, height });
        }
        let len = width.checked_mul(height)
            .ok_or(LifeError::InvalidDimension { width, height })?;

        self.width = width;
        self.height = height;
        self.cells = vec![Cell::default(); len];
        Ok(())
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if !self.contains(x, y) {
            return Err(LifeError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok(y as usize * self.width + x as usize)
    }

    pub fn is_alive(&self, x: i32, y: i32) -> Result<bool> {
        Ok(self.cells[self.index(x, y)?].alive)
    }

    pub fn set_alive(&mut self, x: i32, y: i32, alive: bool) -> Result<()> {
        let i = self.index(x, y)?;
        self.cells[i].alive = alive;
        Ok(())
    }

    /// Live cells among the 8 surrounding positions. Positions past the edge
    /// do not exist and count as nothing.
    pub fn count_live_neighbors(&self, x: i32, y: i32) -> Result<u8> {
        self.index(x, y)?;
        Ok(self.neighbours_of(x, y))
    }

    // Caller guarantees (x, y) is inside the grid
    fn neighbours_of(&self, x: i32, y: i32) -> u8 {
        let mut count = 0;
        for &(dx, dy) in &NEIGHBOURS {
            let (nx, ny) = (x + dx, y + dy);
            if self.contains(nx, ny) && self.cells[ny as usize * self.width + nx as usize].alive {
                count += 1;
            }
        }
        count
    }

    /// Advances one generation under B3/S23. All next states are decided
    /// from the current generation before any cell is flipped.
    pub fn step(&mut self) -> StepResult {
        let mut to_kill = Vec::new();
        let mut to_summon = Vec::new();

        for (i, cell) in self.cells.iter().enumerate() {
            let x = (i % self.width) as i32;
            let y = (i / self.width) as i32;
            let count = self.neighbours_of(x, y);

            match (cell.alive, count) {
                (true, 2) | (true, 3) => {}           // Survival
                (true, _)             => to_kill.push(i),
                (false, 3)            => to_summon.push(i),
                (false, _)            => {}           // Stays dead
            }
        }

        for &i in &to_kill { self.cells[i].alive = false; }
        for &i in &to_summon { self.cells[i].alive = true; }

        StepResult {
            changed_count: to_kill.len() + to_summon.len(),
            births: to_summon.len(),
            deaths: to_kill.len(),
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// Every cell with its coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate()
            .map(move |(i, &cell)| ((i % width) as i32, (i / width) as i32, cell))
    }

    pub fn alive_cells(&self) -> Vec<(i32, i32)> {
        self.cells()
            .filter(|(_, _, cell)| cell.alive)
            .map(|(x, y, _)| (x, y))
            .collect()
    }
}
