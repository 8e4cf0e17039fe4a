// render.rs - Pixel placement of cells, independent of any GUI toolkit

use crate::grid::Grid;

/// Pixel rectangle relative to the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Anything that can fill a cell rectangle in one of two colours.
pub trait CellPainter {
    fn fill_cell(&mut self, rect: CellRect, alive: bool);
}

/// Cell `(x, y)` sits at `(x * pitch, y * pitch)` and is `size` pixels
/// square; the rest of the pitch is gutter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    pub pitch: f32,
    pub size: f32,
}

impl Default for CellLayout {
    fn default() -> Self {
        Self { pitch: 10.0, size: 9.0 }
    }
}

impl CellLayout {
    pub fn cell_rect(&self, x: i32, y: i32) -> CellRect {
        CellRect {
            x: x as f32 * self.pitch,
            y: y as f32 * self.pitch,
            width: self.size,
            height: self.size,
        }
    }

    /// Canvas size in pixels for the given grid.
    pub fn canvas_size(&self, grid: &Grid) -> (f32, f32) {
        (grid.width() as f32 * self.pitch, grid.height() as f32 * self.pitch)
    }

    /// Grid cell under a canvas pixel, or `None` when the pixel lies outside
    /// the grid. Gutter pixels belong to the cell on their left/top.
    pub fn cell_at(&self, px: f32, py: f32, grid: &Grid) -> Option<(i32, i32)> {
        if !(px.is_finite() && py.is_finite()) || px < 0.0 || py < 0.0 {
            return None;
        }
        let x = (px / self.pitch).floor();
        let y = (py / self.pitch).floor();
        if x >= grid.width() as f32 || y >= grid.height() as f32 {
            return None;
        }
        Some((x as i32, y as i32))
    }
}

/// Hands every cell of the grid to the painter.
pub fn paint_grid<P: CellPainter>(grid: &Grid, layout: &CellLayout, painter: &mut P) {
    for (x, y, cell) in grid.cells() {
        painter.fill_cell(layout.cell_rect(x, y), cell.alive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(CellRect, bool)>,
    }

    impl CellPainter for Recorder {
        fn fill_cell(&mut self, rect: CellRect, alive: bool) {
            self.calls.push((rect, alive));
        }
    }

    #[test]
    fn placement_matches_pitch() {
        let layout = CellLayout::default();
        assert_eq!(layout.cell_rect(3, 2), CellRect { x: 30.0, y: 20.0, width: 9.0, height: 9.0 });
        let grid = Grid::new(8, 5).unwrap();
        assert_eq!(layout.canvas_size(&grid), (80.0, 50.0));
    }

    #[test]
    fn click_maps_back_to_cell() {
        let layout = CellLayout::default();
        let grid = Grid::new(8, 5).unwrap();
        assert_eq!(layout.cell_at(0.0, 0.0, &grid), Some((0, 0)));
        assert_eq!(layout.cell_at(34.5, 21.0, &grid), Some((3, 2)));
        assert_eq!(layout.cell_at(39.9, 29.9, &grid), Some((3, 2)));
        assert_eq!(layout.cell_at(79.9, 49.9, &grid), Some((7, 4)));

        for &(x, y) in &[(0, 0), (5, 1), (7, 4)] {
            let rect = layout.cell_rect(x, y);
            assert_eq!(layout.cell_at(rect.x + 4.0, rect.y + 4.0, &grid), Some((x, y)));
        }
    }

    #[test]
    fn clicks_off_canvas_are_filtered() {
        let layout = CellLayout::default();
        let grid = Grid::new(8, 5).unwrap();
        assert_eq!(layout.cell_at(-0.5, 10.0, &grid), None);
        assert_eq!(layout.cell_at(10.0, -3.0, &grid), None);
        assert_eq!(layout.cell_at(80.0, 10.0, &grid), None);
        assert_eq!(layout.cell_at(10.0, 50.0, &grid), None);
        assert_eq!(layout.cell_at(f32::NAN, 10.0, &grid), None);
    }

    #[test]
    fn paints_every_cell_once() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set_alive(2, 1, true).unwrap();
        let layout = CellLayout { pitch: 20.0, size: 18.0 };
        let mut recorder = Recorder::default();

        paint_grid(&grid, &layout, &mut recorder);

        assert_eq!(recorder.calls.len(), 12);
        let alive: Vec<_> = recorder.calls.iter().filter(|(_, alive)| *alive).collect();
        assert_eq!(alive.len(), 1);
        assert_eq!(alive[0].0, CellRect { x: 40.0, y: 20.0, width: 18.0, height: 18.0 });
    }
}
