//! Generic field-of-view computation.
//!
//! The algorithm knows nothing about maps. It walks cells as offsets from the
//! origin and asks a callback whether each cell blocks light.

mod shadowcast;
pub use shadowcast::Shadowcast;

/// Iterate over cells visible from the origin within `radius`.
///
/// `blocks_light` gets offsets relative to the origin. Opaque cells that are
/// visible are themselves included in the output, cells behind them are not.
/// The radius is measured in Chebyshev distance, so the area covered by an
/// unobstructed view is a square.
///
/// ```
/// let cells: Vec<[i32; 2]> = fov::field_of_view(1, |_| false).collect();
/// assert_eq!(cells.len(), 9);
/// ```
pub fn field_of_view<F>(radius: i32, blocks_light: F) -> Shadowcast<F>
where
    F: FnMut([i32; 2]) -> bool,
{
    Shadowcast::new(radius, blocks_light)
}
