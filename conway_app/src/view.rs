// view.rs - Pan and zoom transform between screen space and grid cells

use std::ops::Range;

use egui::{Pos2, Rect, Vec2, vec2};

use crate::settings::{MAX_ZOOM, MIN_ZOOM};

/// Wheel delta that changes the zoom by one point.
const WHEEL_STEP: f32 = 20.0;

/// The grid is drawn centred on the canvas, moved by `offset`, with each
/// cell `zoom` points wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub zoom: f32,
    pub offset: Vec2,
}

impl Default for View {
    fn default() -> Self {
        Self::new(20.0)
    }
}

impl View {
    pub fn new(zoom: f32) -> Self {
        Self {
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            offset: Vec2::ZERO,
        }
    }

    /// Screen rectangle covered by a grid of `dims` cells.
    pub fn grid_rect(&self, canvas: Rect, dims: (usize, usize)) -> Rect {
        let size = vec2(dims.0 as f32, dims.1 as f32) * self.zoom;
        Rect::from_center_size(canvas.center() + self.offset, size)
    }

    pub fn cell_rect(&self, grid_rect: Rect, x: usize, y: usize) -> Rect {
        let min = grid_rect.min + vec2(x as f32, y as f32) * self.zoom;
        Rect::from_min_size(min, Vec2::splat(self.zoom))
    }

    /// The cell under `pos`, or `None` when `pos` is off the grid.
    pub fn screen_to_cell(
        &self,
        canvas: Rect,
        dims: (usize, usize),
        pos: Pos2,
    ) -> Option<(i32, i32)> {
        let rel = (pos - self.grid_rect(canvas, dims).min) / self.zoom;
        let (x, y) = (rel.x.floor(), rel.y.floor());
        let inside = x >= 0.0 && y >= 0.0 && x < dims.0 as f32 && y < dims.1 as f32;
        inside.then_some((x as i32, y as i32))
    }

    /// Applies a mouse wheel delta. The offset scales with the zoom so the
    /// grid does not jump around the canvas centre.
    pub fn zoom_by(&mut self, wheel_delta: f32) {
        let old = self.zoom;
        self.zoom = (self.zoom + wheel_delta / WHEEL_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
        if self.zoom != old {
            self.offset *= self.zoom / old;
        }
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Columns and rows worth drawing: those overlapping the canvas plus a
    /// two-cell margin.
    pub fn visible_range(
        &self,
        canvas: Rect,
        dims: (usize, usize),
    ) -> (Range<usize>, Range<usize>) {
        let grid = self.grid_rect(canvas, dims);
        let shown = canvas.expand(2.0 * self.zoom);

        let axis = |lo: f32, hi: f32, origin: f32, len: usize| {
            let first = ((lo - origin) / self.zoom).floor().clamp(0.0, len as f32) as usize;
            let last = ((hi - origin) / self.zoom).ceil().clamp(0.0, len as f32) as usize;
            first..last.max(first)
        };

        (
            axis(shown.min.x, shown.max.x, grid.min.x, dims.0),
            axis(shown.min.y, shown.max.y, grid.min.y, dims.1),
        )
    }
}
