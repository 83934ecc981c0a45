// grid.rs - Double-buffered Game of Life grid

use std::hash::{DefaultHasher, Hash, Hasher};

use log::debug;
use rand::Rng;

use crate::buffer::DoubleBuffer;
use crate::cell::Cell;
use crate::coords::{clamp_index, wrap_index};
use crate::kernel::Kernel;
use crate::patterns::{GLIDER, Pattern};

/// A rectangular field of cells, stored row-major (`y * width + x`).
///
/// Every operation is total: out-of-range coordinates are clamped or
/// wrapped, never rejected, and dimensions are never smaller than 1x1.
///
/// The grid is not internally synchronised. A driver that advances it from
/// another thread must serialise all access, e.g. behind one mutex held for
/// the whole of [`Grid::advance_generation`].
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    wrap: bool,
    cells: DoubleBuffer<Cell>,
}

fn clamp_dimension(v: i32) -> usize {
    v.max(1) as usize
}

impl Grid {
    /// An all-dead grid. Dimensions below 1 are raised to 1.
    pub fn new(width: i32, height: i32) -> Self {
        let width = clamp_dimension(width);
        let height = clamp_dimension(height);
        Self {
            width,
            height,
            wrap: false,
            cells: DoubleBuffer::new(width * height, Cell::Dead),
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    /// Toroidal (true) or bounded (false) topology for the next sweeps.
    pub fn set_wrap(&mut self, enabled: bool) {
        self.wrap = enabled;
    }

    /// The live generation in row-major order.
    pub fn cells(&self) -> &[Cell] {
        self.cells.live()
    }

    pub fn population(&self) -> usize {
        self.cells().iter().filter(|c| c.is_alive()).count()
    }

    /// Reads a cell, wrapping coordinates one step past any edge.
    ///
    /// The wrap happens whatever the wrap mode is set to; the mode only
    /// decides whether the sweep looks across the edges.
    pub fn get_cell(&self, x: i32, y: i32) -> Cell {
        self.cells.live()[wrap_index(x, y, self.width, self.height)]
    }

    /// Writes a cell. Coordinates past the right/bottom edge clamp to it;
    /// any negative coordinate writes the origin cell.
    pub fn set_cell(&mut self, x: i32, y: i32, state: Cell) {
        let i = clamp_index(x, y, self.width, self.height);
        self.cells.live_mut()[i] = state;
    }

    /// Flips a cell, addressed the same way as [`Grid::set_cell`].
    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Cell {
        let i = clamp_index(x, y, self.width, self.height);
        let cell = &mut self.cells.live_mut()[i];
        *cell = cell.toggled();
        *cell
    }

    /// Changes the grid size. Destructive:
    ///
    /// * a smaller cell count truncates the buffer, so the surviving cells are
    ///   the first `width * height` of the old row-major order, not the old
    ///   top-left rectangle;
    /// * an equal or larger cell count resets every cell to dead.
    pub fn resize(&mut self, new_width: i32, new_height: i32) {
        let width = clamp_dimension(new_width);
        let height = clamp_dimension(new_height);
        let len = width * height;

        if len < self.cells.len() {
            self.cells.truncate(len);
        } else {
            self.cells.reset(len, Cell::Dead);
        }

        debug!(
            "grid resized {}x{} -> {}x{}",
            self.width, self.height, width, height
        );
        self.width = width;
        self.height = height;
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        debug!("grid cleared ({}x{})", self.width, self.height);
    }

    /// Places a glider one cell in from the top-left corner. Grids smaller
    /// than 4x4 are left alone.
    pub fn seed_glider(&mut self) {
        if self.width < 4 || self.height < 4 {
            return;
        }
        self.stamp(&GLIDER, 1, 1);
        debug!("glider seeded");
    }

    /// Sets every pattern cell that lands inside the grid alive. Cells that
    /// would fall outside are dropped rather than clamped onto the edge.
    pub fn stamp(&mut self, pattern: &Pattern, origin_x: i32, origin_y: i32) {
        for &(dx, dy) in pattern.cells {
            let x = origin_x.saturating_add(dx);
            let y = origin_y.saturating_add(dy);
            if self.contains(x, y) {
                self.set_cell(x, y, Cell::Alive);
            }
        }
    }

    /// Makes each cell alive with probability `density` (clamped to 0..=1).
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let p = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        for cell in self.cells.live_mut() {
            *cell = Cell::from(rng.gen_bool(p));
        }
    }

    /// Hash of the size and live cells, for spotting repeated generations.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.width.hash(&mut hasher);
        self.height.hash(&mut hasher);
        self.cells().hash(&mut hasher);
        hasher.finish()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Computes the next generation into the staging buffer, then publishes it.
    ///
    /// Each row is swept left to right with one [`Kernel`]. The kernel starts
    /// with the column left of x = 0 (dead unless wrapping) and column 0; at
    /// every x only column x + 1 is read, then the window shifts. Every column
    /// is therefore read once per row instead of nine lookups per cell.
    pub fn advance_generation(&mut self) {
        self.cells.prepare_staging();

        let width = self.width;
        let (live, next) = self.cells.split();
        let sampler = Sampler {
            cells: live,
            width,
            height: self.height,
            wrap: self.wrap,
        };

        for (y, row) in next.chunks_exact_mut(width).enumerate() {
            let y = y as i32;

            let mut kernel = Kernel::new();
            kernel.set_column(0, sampler.column(-1, y));
            kernel.set_column(1, sampler.column(0, y));

            for (x, out) in row.iter_mut().enumerate() {
                // Lookahead: the column entering on the right.
                kernel.set_column(2, sampler.column(x as i32 + 1, y));
                *out = kernel.compute_next_state();
                kernel.shift_left();
            }
        }

        self.cells.swap();
    }
}

/// Read-only view of the live buffer used while the staging buffer is
/// borrowed mutably.
struct Sampler<'a> {
    cells: &'a [Cell],
    width: usize,
    height: usize,
    wrap: bool,
}

impl Sampler<'_> {
    /// A cell, or dead for anything outside a bounded grid.
    #[inline]
    fn sample(&self, x: i32, y: i32) -> Cell {
        let inside = x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height;
        if inside {
            self.cells[y as usize * self.width + x as usize]
        } else if self.wrap {
            self.cells[wrap_index(x, y, self.width, self.height)]
        } else {
            Cell::Dead
        }
    }

    /// Rows y - 1, y, y + 1 of column x.
    #[inline]
    fn column(&self, x: i32, y: i32) -> [Cell; 3] {
        [self.sample(x, y - 1), self.sample(x, y), self.sample(x, y + 1)]
    }
}
