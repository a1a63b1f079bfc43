use crate::core::data::resolution::Resolution;

/// Cyclic shift of a row-major raster by `dy` rows and `dx` columns.
///
/// The element at `(row, col)` moves to `(row + dy, col + dx)` modulo the raster
/// size, so whatever leaves one edge re-enters on the opposite one.
#[must_use]
pub fn roll_2d<T: Copy>(data: &[T], resolution: Resolution, dx: i32, dy: i32) -> Vec<T> {
    let width = i64::from(resolution.width());
    let height = i64::from(resolution.height());

    debug_assert_eq!(data.len(), resolution.size());

    (0..height)
        .flat_map(|row| (0..width).map(move |col| (row, col)))
        .map(|(row, col)| {
            let source_row = (row - i64::from(dy)).rem_euclid(height);
            let source_col = (col - i64::from(dx)).rem_euclid(width);
            data[(source_row * width + source_col) as usize]
        })
        .collect()
}
