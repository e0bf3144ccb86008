//! Flat-array entry points
//!
//! Hosts that embed this crate hand over parallel coordinate vectors paired
//! by index with name vectors. These functions validate the slice lengths,
//! marshal them into [`PointSet`]s, and delegate to the core operations.
//! Any length mismatch aborts the whole call with an error; no partial
//! results are produced.

use crate::core::geo::haversine_distance;
use crate::core::{matrix, nearest};
use crate::error::DistanceError;
use crate::models::{DistanceMatrix, NearestMatch, PointSet};

/// Haversine distance in meters between two points given in decimal degrees
#[inline]
pub fn distance_haversine(xlon: f64, xlat: f64, ylon: f64, ylat: f64) -> f64 {
    haversine_distance(xlon, xlat, ylon, ylat)
}

/// Full pairwise distance matrix between two named coordinate arrays
///
/// # Arguments
/// * `xlon`, `xlat` - Source coordinates, paired by index
/// * `ylon`, `ylat` - Target coordinates, paired by index
/// * `x_names` - Source names, one per source point (becomes row labels)
/// * `y_names` - Target names, one per target point (becomes column labels)
///
/// # Errors
/// [`DistanceError::LengthMismatch`] when any pair of slices that must agree
/// in length does not.
pub fn distance_matrix<S: AsRef<str>, T: AsRef<str>>(
    xlon: &[f64],
    xlat: &[f64],
    ylon: &[f64],
    ylat: &[f64],
    x_names: &[S],
    y_names: &[T],
) -> Result<DistanceMatrix, DistanceError> {
    let source = PointSet::from_slices(xlon, xlat, x_names)?;
    let target = PointSet::from_slices(ylon, ylat, y_names)?;

    tracing::debug!(
        "Building {}x{} distance matrix",
        source.len(),
        target.len()
    );
    Ok(matrix::build_matrix(&source, &target))
}

/// Nearest target point (name and distance in meters) for each source point
///
/// # Errors
/// [`DistanceError::LengthMismatch`] on disagreeing slice lengths and
/// [`DistanceError::EmptyTargetSet`] when the target arrays are empty.
pub fn distance_nearest<S: AsRef<str>, T: AsRef<str>>(
    xlon: &[f64],
    xlat: &[f64],
    ylon: &[f64],
    ylat: &[f64],
    x_names: &[S],
    y_names: &[T],
) -> Result<Vec<NearestMatch>, DistanceError> {
    let source = PointSet::from_slices(xlon, xlat, x_names)?;
    let target = PointSet::from_slices(ylon, ylat, y_names)?;

    tracing::debug!(
        "Scanning {} targets for each of {} source points",
        target.len(),
        source.len()
    );
    nearest::nearest_match(&source, &target)
}
