// coords.rs - Coordinate to buffer index policies
//
// Two lookups that are easy to confuse, kept as separate functions:
// writes clamp, neighbour reads wrap.

/// Row-major index for `(x, y)` with out-of-range coordinates clamped.
///
/// Coordinates past the right or bottom edge clamp to the last column/row.
/// A negative coordinate in either axis collapses to index 0 (the origin),
/// not to column 0 of the same row. Callers needing strict bounds must
/// validate before calling.
pub fn clamp_index(x: i32, y: i32, width: usize, height: usize) -> usize {
    let x = (x as i64).min(width as i64 - 1);
    let y = (y as i64).min(height as i64 - 1);

    if x < 0 || y < 0 {
        return 0;
    }

    y as usize * width + x as usize
}

/// Wraps a coordinate one step around the grid edges.
///
/// `-1` maps to the last column/row and `width`/`height` map to 0. Any other
/// out-of-range value is left for [`clamp_index`] to deal with.
pub fn wrap_coords(x: i32, y: i32, width: usize, height: usize) -> (i32, i32) {
    (wrap_axis(x, width), wrap_axis(y, height))
}

fn wrap_axis(v: i32, len: usize) -> i32 {
    if v < 0 {
        len as i32 - 1
    } else if v as usize >= len {
        0
    } else {
        v
    }
}

/// Wrap-aware index: [`wrap_coords`] followed by [`clamp_index`].
pub fn wrap_index(x: i32, y: i32, width: usize, height: usize) -> usize {
    let (x, y) = wrap_coords(x, y, width, height);
    clamp_index(x, y, width, height)
}
