//! Dense travel-cost matrix.

use crate::models::{Coordinate, MatrixOrigin};

use super::haversine_distance;

/// A dense n×n matrix of travel costs stored in row-major order.
///
/// Entries are meters in a distance matrix and seconds in a duration matrix,
/// indexed by position in the list of geolocated places. The diagonal is zero.
/// Routing-service matrices may be asymmetric, so nothing here assumes
/// `get(i, j) == get(j, i)`.
///
/// # Examples
///
/// ```
/// use trip_route::models::Coordinate;
/// use trip_route::distance::DistanceMatrix;
///
/// let coords = vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(1.0, 0.0),
///     Coordinate::new(2.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_coordinates(&coords);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 1), 0.0);
/// assert!(dm.get(0, 2) > dm.get(0, 1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds an n×n matrix whose entry `(i, j)` is `cost(i, j)`.
    ///
    /// ```
    /// use trip_route::distance::DistanceMatrix;
    ///
    /// let line = DistanceMatrix::from_fn(3, |i, j| i.abs_diff(j) as f64 * 100.0);
    /// assert_eq!(line.get(2, 0), 200.0);
    /// ```
    pub fn from_fn(size: usize, mut cost: impl FnMut(usize, usize) -> f64) -> Self {
        let data = (0..size * size).map(|k| cost(k / size, k % size)).collect();
        Self { data, size }
    }

    /// Great-circle distances in meters between every pair of coordinates.
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Self {
        Self::from_fn(coordinates.len(), |i, j| {
            if i == j {
                0.0
            } else {
                haversine_distance(coordinates[i], coordinates[j])
            }
        })
    }

    /// Wraps `size * size` costs already laid out row by row.
    ///
    /// Returns `None` on a length mismatch. Entries are not validated; use
    /// [`from_rows`](Self::from_rows) for untrusted data.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        (data.len() == size * size).then_some(Self { data, size })
    }

    /// Creates a matrix from nested rows, as returned by routing services.
    ///
    /// Returns `None` unless there are `size` rows of `size` entries, every
    /// entry is finite and non-negative, and the diagonal is zero.
    pub fn from_rows(size: usize, rows: &[Vec<f64>]) -> Option<Self> {
        if rows.len() != size || rows.iter().any(|r| r.len() != size) {
            return None;
        }
        let data: Vec<f64> = rows.iter().flatten().copied().collect();
        if data.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return None;
        }
        if (0..size).any(|i| data[i * size + i] != 0.0) {
            return None;
        }
        Self::from_data(size, data)
    }

    /// Travel cost from place `from` to place `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= size()`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of geolocated places covered.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns a copy with every entry multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            data: self.data.iter().map(|v| v * factor).collect(),
            size: self.size,
        }
    }

    /// Whether every `(i, j)` and `(j, i)` pair differs by at most `tol`.
    ///
    /// Haversine matrices always are (with `tol = 0`); routing-service ones
    /// often are not.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.size)
            .flat_map(|i| (i + 1..self.size).map(move |j| (i, j)))
            .all(|(i, j)| (self.get(i, j) - self.get(j, i)).abs() <= tol)
    }

    /// Returns the candidate closest to `from`.
    ///
    /// Ties go to the candidate seen first. Returns `None` if `candidates` is
    /// empty or every cost is NaN.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            if d.is_nan() {
                continue;
            }
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((c, d));
            }
        }
        best.map(|(c, _)| c)
    }

    /// Sum of consecutive costs along an open path: `tour[0] → … → tour[n-1]`.
    pub fn path_length(&self, tour: &[usize]) -> f64 {
        tour.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

/// Distance and duration matrices over the same places.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelMatrices {
    /// Meters.
    pub distances: DistanceMatrix,
    /// Seconds.
    pub durations: DistanceMatrix,
    pub origin: MatrixOrigin,
}

impl TravelMatrices {
    /// Great-circle distances with durations estimated at a constant speed.
    pub fn haversine(coordinates: &[Coordinate], speed_mps: f64) -> Self {
        let distances = DistanceMatrix::from_coordinates(coordinates);
        let durations = if speed_mps > 0.0 {
            distances.scaled(1.0 / speed_mps)
        } else {
            distances.clone()
        };
        Self {
            distances,
            durations,
            origin: MatrixOrigin::Haversine,
        }
    }

    /// Number of places covered.
    pub fn size(&self) -> usize {
        self.distances.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_coordinates() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(0.0, 3.0),
        ]
    }

    #[test]
    fn test_from_coordinates() {
        let dm = DistanceMatrix::from_coordinates(&sample_coordinates());
        assert_eq!(dm.size(), 3);
        for i in 0..3 {
            assert_eq!(dm.get(i, i), 0.0);
        }
        assert!((dm.get(0, 2) - 3.0 * dm.get(0, 1)).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_coordinates(&sample_coordinates());
        assert!(dm.is_symmetric(0.0));
    }

    #[test]
    fn test_from_fn_row_major() {
        let dm = DistanceMatrix::from_fn(3, |i, j| (10 * i + j) as f64);
        assert_eq!(dm.get(0, 2), 2.0);
        assert_eq!(dm.get(2, 0), 20.0);
        assert_eq!(dm.get(1, 1), 11.0);
        assert_eq!(DistanceMatrix::from_fn(0, |_, _| 1.0).size(), 0);
    }

    #[test]
    fn test_from_data_length_mismatch() {
        assert!(DistanceMatrix::from_data(3, vec![0.0; 8]).is_none());
        assert!(DistanceMatrix::from_data(0, Vec::new()).is_some());
    }

    #[test]
    fn test_from_rows() {
        let rows = vec![vec![0.0, 7.0], vec![9.0, 0.0]];
        let dm = DistanceMatrix::from_rows(2, &rows).expect("valid");
        assert_eq!(dm.get(0, 1), 7.0);
        assert_eq!(dm.get(1, 0), 9.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert!(DistanceMatrix::from_rows(2, &[vec![0.0, 1.0]]).is_none());
        assert!(DistanceMatrix::from_rows(2, &[vec![0.0, 1.0], vec![1.0]]).is_none());
        assert!(DistanceMatrix::from_rows(2, &[vec![0.0, -1.0], vec![1.0, 0.0]]).is_none());
        assert!(DistanceMatrix::from_rows(2, &[vec![0.0, f64::NAN], vec![1.0, 0.0]]).is_none());
    }

    #[test]
    fn test_from_rows_rejects_nonzero_diagonal() {
        assert!(DistanceMatrix::from_rows(2, &[vec![0.0, 1.0], vec![1.0, 3.0]]).is_none());
        assert!(DistanceMatrix::from_rows(1, &[vec![0.5]]).is_none());
        assert!(DistanceMatrix::from_rows(1, &[vec![0.0]]).is_some());
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = DistanceMatrix::from_coordinates(&sample_coordinates());
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_nearest_neighbor_tie_goes_to_first_seen() {
        let dm = DistanceMatrix::from_data(3, vec![0.0, 4.0, 4.0, 4.0, 0.0, 1.0, 4.0, 1.0, 0.0])
            .expect("valid");
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(2));
    }

    #[test]
    fn test_path_length_is_open() {
        let dm = DistanceMatrix::from_data(3, vec![0.0, 1.0, 9.0, 1.0, 0.0, 2.0, 9.0, 2.0, 0.0])
            .expect("valid");
        assert_eq!(dm.path_length(&[0, 1, 2]), 3.0);
        assert_eq!(dm.path_length(&[2]), 0.0);
        assert_eq!(dm.path_length(&[]), 0.0);
    }

    #[test]
    fn test_haversine_matrices() {
        let tm = TravelMatrices::haversine(&sample_coordinates(), 10.0);
        assert_eq!(tm.origin, MatrixOrigin::Haversine);
        assert_eq!(tm.size(), 3);
        assert!((tm.durations.get(0, 1) - tm.distances.get(0, 1) / 10.0).abs() < 1e-9);
    }
}
