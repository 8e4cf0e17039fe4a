//! Conway's Game of Life on a fixed, clipped grid.
//!
//! [`Grid`] holds the cells and applies B3/S23; [`Controller`] owns one grid
//! and steps it while running. The GUI front-end supplies painting, clicks
//! and the timer through [`render`] and [`ticker`].

pub mod controller;
pub mod error;
pub mod grid;
pub mod logging;
pub mod presets;
pub mod render;
pub mod ticker;

pub use controller::{Controller, RunState, TickOutcome};
pub use error::{LifeError, Result};
pub use grid::{Cell, Grid, StepResult};
pub use presets::Preset;
pub use render::{CellLayout, CellPainter, CellRect};
pub use ticker::Ticker;
