// controller.rs - Owns one grid and drives it through Idle/Running

use std::time::Duration;

use crate::error::{LifeError, Result};
use crate::grid::{Grid, StepResult};
use crate::logging::{log_event, log_info};
use crate::presets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running { interval: Duration },
}

/// What a single timer tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; the tick was ignored.
    Idle,
    /// Cells changed and the generation counter moved on.
    Advanced(StepResult),
    /// Nothing changed, so the run stopped itself.
    Settled,
}

/// One simulation session. Whatever composes the program owns it and hands
/// references to the render and input sides.
#[derive(Debug, Clone)]
pub struct Controller {
    grid: Grid,
    state: RunState,
    generation: u64,
}

impl Controller {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            state: RunState::Idle,
            generation: 0,
        })
    }

    /// Fresh dead grid, generation 0, and any active run stopped.
    pub fn reset(&mut self, width: usize, height: usize) -> Result<()> {
        let grid = Grid::new(width, height)?;
        self.stop();
        self.grid = grid;
        self.generation = 0;
        log_event(&format!("reset to a {}x{} grid", width, height));
        Ok(())
    }

    /// Brings every cell of the named preset to life. The preset is checked
    /// against the grid first, so a failure leaves the grid untouched.
    pub fn seed_preset(&mut self, name: &str) -> Result<()> {
        let preset = presets::find(name)?;
        if let Some(&(x, y)) = preset.cells.iter().find(|&&(x, y)| !self.grid.contains(x, y)) {
            return Err(LifeError::OutOfBounds {
                x, y,
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }
        for &(x, y) in preset.cells {
            self.grid.set_alive(x, y, true)?;
        }
        log_event(&format!("seeded `{}` ({} cells)", preset.name, preset.cells.len()));
        Ok(())
    }

    /// Enters Running with the given tick period. While already running this
    /// only changes the period.
    pub fn start(&mut self, interval_ms: u64) -> Result<()> {
        if interval_ms == 0 {
            return Err(LifeError::InvalidInterval);
        }
        let interval = Duration::from_millis(interval_ms);
        if self.state == RunState::Idle {
            log_event(&format!("started at generation {} ({} ms/tick)", self.generation, interval_ms));
        }
        self.state = RunState::Running { interval };
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            log_event(&format!("stopped at generation {}", self.generation));
        }
        self.state = RunState::Idle;
    }

    /// Returns the cell's new state.
    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Result<bool> {
        let alive = !self.grid.is_alive(x, y)?;
        self.grid.set_alive(x, y, alive)?;
        Ok(alive)
    }

    /// Runs one step if the controller is running. A step that changes no
    /// cell stops the run.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }
        let result = self.grid.step();
        if result.changed_count == 0 {
            log_info(&format!("population settled at {} cells", self.grid.population()));
            self.stop();
            return TickOutcome::Settled;
        }
        self.generation += 1;
        TickOutcome::Advanced(result)
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn generation(&self) -> u64 { self.generation }
    pub fn state(&self) -> RunState { self.state }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running { .. })
    }

    pub fn interval(&self) -> Option<Duration> {
        match self.state {
            RunState::Running { interval } => Some(interval),
            RunState::Idle => None,
        }
    }
}
