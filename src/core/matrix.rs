use crate::core::geo::haversine_distance;
use crate::models::{DistanceMatrix, PointSet};

/// Build the full pairwise distance matrix between two point sets
///
/// Every cell `(i, j)` is the Haversine distance in meters from source point
/// `i` to target point `j`, computed independently with no caching across
/// rows or columns. Row labels are the source names and column labels the
/// target names, preserving input order exactly. O(n·k) distance evaluations.
pub fn build_matrix(source: &PointSet, target: &PointSet) -> DistanceMatrix {
    let n = source.len();
    let k = target.len();
    let mut values = Vec::with_capacity(n * k);

    for i in 0..n {
        let p = source.point(i);
        for j in 0..k {
            let q = target.point(j);
            values.push(haversine_distance(p.lon, p.lat, q.lon, q.lat));
        }
    }

    DistanceMatrix::from_parts(source.names().to_vec(), target.names().to_vec(), values)
}
