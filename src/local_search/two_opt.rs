//! 2-opt improvement of an open visiting path.
//!
//! # Algorithm
//!
//! For each pair of positions `i < j` with `j >= i + 2`, compare the edges
//! leaving `i` and `j` with the edges obtained by reversing `route[i+1..=j]`:
//!
//! ```text
//! old = d(r[i], r[i+1]) + d(r[j], r[next(j)])
//! new = d(r[i], r[j])   + d(r[i+1], r[next(j)])
//! ```
//!
//! If `new < old`, reverse the segment and keep scanning. Full passes repeat
//! until one makes no change (first-improvement strategy).
//!
//! `next(j)` is `j + 1`, except at the last position where it depends on
//! [`TwoOptClosure`]: `Wrapped` uses position 0 as if the path were a loop,
//! `Open` drops the second edge entirely.
//!
//! # Complexity
//!
//! O(n²) per pass.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::DistanceMatrix;

/// How the edge leaving the last position is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TwoOptClosure {
    /// The last position connects back to the first (`(j + 1) mod n`).
    #[default]
    Wrapped,
    /// The last position has no outgoing edge.
    Open,
}

/// Improves a visiting order with 2-opt moves until none applies.
///
/// Tours of two or fewer places are returned unchanged. The result is never
/// longer than `tour` as an open path; when wrap-around moves or an asymmetric
/// matrix would make it so, `tour` itself is returned. On asymmetric matrices
/// the number of passes is bounded by n², since reversing a segment changes
/// costs the move evaluation does not see.
///
/// # Examples
///
/// ```
/// use trip_route::models::Coordinate;
/// use trip_route::distance::DistanceMatrix;
/// use trip_route::local_search::{two_opt_improve, TwoOptClosure};
///
/// let dm = DistanceMatrix::from_coordinates(&[
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(0.0, 1.0),
///     Coordinate::new(1.0, 1.0),
///     Coordinate::new(1.0, 0.0),
/// ]);
/// let crossing = [0, 2, 1, 3];
/// let improved = two_opt_improve(&crossing, &dm, TwoOptClosure::Wrapped);
/// assert!(dm.path_length(&improved) < dm.path_length(&crossing));
/// ```
pub fn two_opt_improve(
    tour: &[usize],
    distances: &DistanceMatrix,
    closure: TwoOptClosure,
) -> Vec<usize> {
    let n = tour.len();
    if n <= 2 {
        return tour.to_vec();
    }

    let max_passes = if distances.is_symmetric(0.0) {
        usize::MAX
    } else {
        n * n
    };

    let mut route = tour.to_vec();
    let mut improved = true;
    let mut passes = 0;

    while improved && passes < max_passes {
        improved = false;
        passes += 1;

        for i in 0..n - 1 {
            for j in i + 2..n {
                let (old_cost, new_cost) = swap_costs(&route, distances, i, j, closure);
                if new_cost < old_cost {
                    route[i + 1..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    let before = distances.path_length(tour);
    let after = distances.path_length(&route);
    debug!(passes, before, after, "2-opt converged");
    if after > before {
        return tour.to_vec();
    }
    route
}

/// Cost of the two edges touched by a move, before and after the reversal.
fn swap_costs(
    route: &[usize],
    distances: &DistanceMatrix,
    i: usize,
    j: usize,
    closure: TwoOptClosure,
) -> (f64, f64) {
    let next = match (j + 1 < route.len(), closure) {
        (true, _) => Some(route[j + 1]),
        (false, TwoOptClosure::Wrapped) => Some(route[0]),
        (false, TwoOptClosure::Open) => None,
    };

    let mut old_cost = distances.get(route[i], route[i + 1]);
    let mut new_cost = distances.get(route[i], route[j]);
    if let Some(k) = next {
        old_cost += distances.get(route[j], k);
        new_cost += distances.get(route[i + 1], k);
    }
    (old_cost, new_cost)
}
