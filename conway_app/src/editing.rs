// editing.rs - Painting cells with the mouse

use conway::{Cell, Grid};

/// What a stroke does to the cells it passes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    MakeDead,
    MakeAlive,
}

impl PaintMode {
    pub fn target(self) -> Cell {
        match self {
            PaintMode::MakeDead => Cell::Dead,
            PaintMode::MakeAlive => Cell::Alive,
        }
    }
}

impl From<Cell> for PaintMode {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Dead => PaintMode::MakeDead,
            Cell::Alive => PaintMode::MakeAlive,
        }
    }
}

/// A press flips the cell under the pointer and fixes the stroke's mode;
/// dragging then paints that same state until release.
#[derive(Debug, Clone)]
pub struct Brush {
    enabled: bool,
    stroke: Option<PaintMode>,
}

impl Brush {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, stroke: None }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.stroke = None;
        }
    }

    pub fn is_painting(&self) -> bool {
        self.stroke.is_some()
    }

    /// Returns true if the grid changed. Presses off the grid start nothing.
    pub fn press(&mut self, grid: &mut Grid, cell: Option<(i32, i32)>) -> bool {
        let Some((x, y)) = cell else {
            return false;
        };
        if !self.enabled || !grid.contains(x, y) {
            return false;
        }

        let target = grid.get_cell(x, y).toggled();
        self.stroke = Some(PaintMode::from(target));
        grid.set_cell(x, y, target);
        true
    }

    /// Continues the current stroke. Returns true if the grid changed.
    pub fn drag(&mut self, grid: &mut Grid, cell: Option<(i32, i32)>) -> bool {
        let (Some(mode), Some((x, y))) = (self.stroke, cell) else {
            return false;
        };
        if !grid.contains(x, y) || grid.get_cell(x, y) == mode.target() {
            return false;
        }
        grid.set_cell(x, y, mode.target());
        true
    }

    pub fn release(&mut self) {
        self.stroke = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_toggles_and_sets_mode() {
        let mut grid = Grid::new(5, 5);
        let mut brush = Brush::new(true);

        assert!(brush.press(&mut grid, Some((2, 2))));
        assert_eq!(grid.get_cell(2, 2), Cell::Alive);
        assert!(brush.is_painting());

        // Painting alive over an alive cell is a no-op.
        assert!(!brush.drag(&mut grid, Some((2, 2))));
        assert!(brush.drag(&mut grid, Some((3, 2))));
        assert_eq!(grid.population(), 2);
        brush.release();

        // Pressing a live cell starts an erasing stroke.
        assert!(brush.press(&mut grid, Some((3, 2))));
        assert!(brush.drag(&mut grid, Some((2, 2))));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn presses_off_the_grid_are_ignored() {
        let mut grid = Grid::new(4, 4);
        let mut brush = Brush::new(true);
        assert!(!brush.press(&mut grid, None));
        assert!(!brush.press(&mut grid, Some((-1, 0))));
        assert!(!brush.press(&mut grid, Some((4, 1))));
        assert!(!brush.is_painting());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn dragging_off_the_grid_does_not_clamp_onto_the_edge() {
        let mut grid = Grid::new(4, 4);
        let mut brush = Brush::new(true);
        brush.press(&mut grid, Some((0, 0)));
        assert!(!brush.drag(&mut grid, Some((7, 1))));
        assert!(!brush.drag(&mut grid, None));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn disabled_brush_does_nothing() {
        let mut grid = Grid::new(4, 4);
        let mut brush = Brush::new(false);
        assert!(!brush.press(&mut grid, Some((1, 1))));
        assert!(!brush.drag(&mut grid, Some((1, 1))));
        assert_eq!(grid.population(), 0);

        brush.set_enabled(true);
        brush.press(&mut grid, Some((1, 1)));
        brush.set_enabled(false);
        assert!(!brush.is_painting());
    }

    #[test]
    fn drag_without_press_does_nothing() {
        let mut grid = Grid::new(4, 4);
        let mut brush = Brush::new(true);
        assert!(!brush.drag(&mut grid, Some((1, 1))));
        assert_eq!(grid.population(), 0);
    }
}
