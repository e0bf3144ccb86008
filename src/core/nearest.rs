use crate::core::geo::haversine_distance;
use crate::error::DistanceError;
use crate::models::{NearestMatch, PointSet};

/// Find the closest target point for each source point
///
/// Each source row is a direct left-to-right scan over the k target
/// distances, keeping O(k) scratch instead of materializing the full n×k
/// matrix. The strict `<` comparison means ties resolve to the lowest
/// target index, an observable property callers depend on. Results come
/// back one per source point, in source order.
///
/// # Errors
/// Returns [`DistanceError::EmptyTargetSet`] when `target` has no points;
/// there is no minimum of an empty sequence.
pub fn nearest_match(
    source: &PointSet,
    target: &PointSet,
) -> Result<Vec<NearestMatch>, DistanceError> {
    if target.is_empty() {
        return Err(DistanceError::EmptyTargetSet);
    }

    let mut results = Vec::with_capacity(source.len());
    for i in 0..source.len() {
        let p = source.point(i);

        let mut best = f64::INFINITY;
        let mut best_j = 0;
        for j in 0..target.len() {
            let q = target.point(j);
            let d = haversine_distance(p.lon, p.lat, q.lon, q.lat);
            if d < best {
                best = d;
                best_j = j;
            }
        }

        results.push(NearestMatch {
            source_name: source.name(i).to_string(),
            matched_name: target.name(best_j).to_string(),
            meters: best,
        });
    }

    tracing::trace!(
        "Matched {} source points against {} targets",
        source.len(),
        target.len()
    );
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matrix::build_matrix;
    use crate::models::PointSet;

    #[test]
    fn test_nearest_picks_minimum() {
        let source = PointSet::from_slices(&[0.0], &[0.0], &["origin"]).unwrap();
        let target = PointSet::from_slices(
            &[10.0, 1.0, -5.0],
            &[10.0, 0.0, 5.0],
            &["far", "near", "mid"],
        )
        .unwrap();

        let results = nearest_match(&source, &target).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].source_name, "origin");
        assert_eq!(results[0].matched_name, "near");
        assert!((results[0].meters - 111_195.08).abs() < 1.0);
    }

    #[test]
    fn test_coincident_target_wins_with_zero_distance() {
        let source = PointSet::from_slices(&[0.0], &[0.0], &["origin"]).unwrap();
        let target =
            PointSet::from_slices(&[0.0, 1.0], &[0.0, 0.0], &["A", "B"]).unwrap();

        let results = nearest_match(&source, &target).unwrap();

        assert_eq!(results[0].matched_name, "A");
        assert_eq!(results[0].meters, 0.0);
    }

    #[test]
    fn test_ties_resolve_to_lowest_index() {
        // Two targets symmetric about the source give bit-identical distances
        let source = PointSet::from_slices(&[0.0], &[0.0], &["origin"]).unwrap();
        let target = PointSet::from_slices(
            &[1.0, -1.0, 1.0],
            &[0.0, 0.0, 0.0],
            &["east", "west", "east_dup"],
        )
        .unwrap();

        let results = nearest_match(&source, &target).unwrap();
        assert_eq!(results[0].matched_name, "east");
    }

    #[test]
    fn test_results_follow_source_order() {
        let source = PointSet::from_slices(
            &[-0.1278, 139.6917, -74.0060],
            &[51.5074, 35.6895, 40.7128],
            &["london", "tokyo", "new_york"],
        )
        .unwrap();
        let target = PointSet::from_slices(
            &[-73.7781, -0.4543, 140.3929],
            &[40.6413, 51.4700, 35.7720],
            &["jfk", "lhr", "nrt"],
        )
        .unwrap();

        let results = nearest_match(&source, &target).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].source_name, "london");
        assert_eq!(results[0].matched_name, "lhr");
        assert_eq!(results[1].source_name, "tokyo");
        assert_eq!(results[1].matched_name, "nrt");
        assert_eq!(results[2].source_name, "new_york");
        assert_eq!(results[2].matched_name, "jfk");
    }

    #[test]
    fn test_agrees_with_matrix_row_minimum() {
        let source = PointSet::from_slices(
            &[-74.0060, 2.3522, 151.2093],
            &[40.7128, 48.8566, -33.8688],
            &["new_york", "paris", "sydney"],
        )
        .unwrap();
        let target = PointSet::from_slices(
            &[-0.1278, 139.6917, -43.1729, 37.6173],
            &[51.5074, 35.6895, -22.9068, 55.7558],
            &["london", "tokyo", "rio", "moscow"],
        )
        .unwrap();

        let matrix = build_matrix(&source, &target);
        let results = nearest_match(&source, &target).unwrap();

        for (i, record) in results.iter().enumerate() {
            let row = matrix.row(i);
            let min = row.iter().copied().fold(f64::INFINITY, f64::min);
            assert_eq!(record.meters, min);

            let argmin = row.iter().position(|&d| d == min).unwrap();
            assert_eq!(record.matched_name, matrix.col_names()[argmin]);
        }
    }

    #[test]
    fn test_empty_target_set_errors() {
        let source = PointSet::from_slices(&[0.0], &[0.0], &["origin"]).unwrap();
        let target = PointSet::from_slices(&[], &[], &[] as &[&str]).unwrap();

        let err = nearest_match(&source, &target).unwrap_err();
        assert_eq!(err, DistanceError::EmptyTargetSet);
    }

    #[test]
    fn test_empty_source_is_fine() {
        let source = PointSet::from_slices(&[], &[], &[] as &[&str]).unwrap();
        let target = PointSet::from_slices(&[0.0], &[0.0], &["A"]).unwrap();

        let results = nearest_match(&source, &target).unwrap();
        assert!(results.is_empty());
    }
}
