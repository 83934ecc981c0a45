//! Conway's Game of Life engine.
//!
//! A [`Grid`] holds a double-buffered field of [`Cell`]s and advances it one
//! generation at a time by sliding a 3x3 [`Kernel`] along each row. Rendering,
//! input handling and timing belong to the caller.

pub mod buffer;
pub mod cell;
pub mod coords;
pub mod grid;
pub mod history;
pub mod kernel;
pub mod patterns;

pub use buffer::DoubleBuffer;
pub use cell::Cell;
pub use grid::Grid;
pub use history::CycleDetector;
pub use kernel::Kernel;
pub use patterns::{PATTERNS, Pattern};
