// kernel.rs - 3x3 neighbourhood window used by the generation sweep

use crate::cell::Cell;

/// A 3x3 snapshot of one cell and its eight neighbours.
///
/// Slots are numbered row by row, the subject cell sitting in slot 4:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
///
/// The grid sweep keeps one kernel per row and slides it to the right with
/// [`Kernel::shift_left`], filling only the freshly exposed right column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Kernel {
    rows: [[Cell; 3]; 3],
}

impl Kernel {
    pub const CENTER: usize = 4;

    /// All nine slots dead.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: [Cell; 9]) -> Self {
        let mut kernel = Self::new();
        for (i, cell) in slots.into_iter().enumerate() {
            kernel.set_slot(i, cell);
        }
        kernel
    }

    /// Reads slot `i` (0..9). Panics on an out-of-range slot.
    #[inline]
    pub fn slot(&self, i: usize) -> Cell {
        self.rows[i / 3][i % 3]
    }

    #[inline]
    pub fn set_slot(&mut self, i: usize, cell: Cell) {
        self.rows[i / 3][i % 3] = cell;
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.rows[row][col]
    }

    /// Column `col` as `[top, middle, bottom]`.
    pub fn column(&self, col: usize) -> [Cell; 3] {
        [self.rows[0][col], self.rows[1][col], self.rows[2][col]]
    }

    pub fn set_column(&mut self, col: usize, cells: [Cell; 3]) {
        for (row, cell) in self.rows.iter_mut().zip(cells) {
            row[col] = cell;
        }
    }

    #[inline]
    pub fn center(&self) -> Cell {
        self.rows[1][1]
    }

    pub fn slots(&self) -> [Cell; 9] {
        let mut out = [Cell::Dead; 9];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.slot(i);
        }
        out
    }

    /// Live cells among the eight neighbours (the centre is not counted).
    pub fn alive_neighbours(&self) -> u8 {
        let total: u8 = self.rows.iter().flatten().map(|c| c.as_count()).sum();
        total - self.center().as_count()
    }

    /// Moves every column one to the left; the right column becomes dead.
    ///
    /// ```text
    /// 0 1 2    1 2 .
    /// 3 4 5 -> 4 5 .
    /// 6 7 8    7 8 .
    /// ```
    pub fn shift_left(&mut self) {
        for row in self.rows.iter_mut() {
            row[0] = row[1];
            row[1] = row[2];
            row[2] = Cell::Dead;
        }
    }

    /// The next state of the centre cell under B3/S23.
    pub fn compute_next_state(&self) -> Cell {
        match (self.center(), self.alive_neighbours()) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
            (Cell::Dead, 3) => Cell::Alive,                     // Birth
            _ => Cell::Dead,                                    // Under/overpopulation
        }
    }
}
