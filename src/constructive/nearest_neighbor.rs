//! Nearest-neighbor tour construction.
//!
//! Starting from a given place, always move to the closest place not yet
//! visited. The result is an open path, not a loop.
//!
//! # Complexity
//!
//! O(n²) where n = number of places.

use crate::distance::DistanceMatrix;

/// Builds an initial visiting order by greedy nearest-neighbor selection.
///
/// Ties go to the lowest index. A `start` outside the matrix is treated as 0.
/// Returns `[0]` for a single place and an empty tour for none.
///
/// If at some step no unvisited place can be chosen (only possible when every
/// remaining cost is NaN) construction stops and the partial tour is returned.
///
/// # Examples
///
/// ```
/// use trip_route::distance::DistanceMatrix;
/// use trip_route::constructive::nearest_neighbor;
///
/// // 0 —1— 2 —1— 1, with 0→1 = 2
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 2.0, 1.0,
///     2.0, 0.0, 1.0,
///     1.0, 1.0, 0.0,
/// ]).unwrap();
/// assert_eq!(nearest_neighbor(&dm, 0), vec![0, 2, 1]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = distances.size();
    if n <= 1 {
        return (0..n).collect();
    }
    let start = if start < n { start } else { 0 };

    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut tour = Vec::with_capacity(n);
    tour.push(start);
    let mut current = start;

    while !unvisited.is_empty() {
        let Some(next) = distances.nearest_neighbor(current, &unvisited) else {
            break;
        };
        unvisited.retain(|&i| i != next);
        tour.push(next);
        current = next;
    }

    tour
}
