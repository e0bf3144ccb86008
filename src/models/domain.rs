use serde::{Deserialize, Serialize};

use crate::error::DistanceError;

/// A geographic point as (longitude, latitude) in decimal degrees
///
/// No range validation is performed; out-of-range coordinates pass through
/// the distance formula unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lon: f64,
    pub lat: f64,
}

/// An ordered sequence of named points
///
/// Names pair with coordinates by position, never by key. The name and
/// coordinate sequences always have equal length; the constructors enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSet {
    points: Vec<Point>,
    names: Vec<String>,
}

impl PointSet {
    /// Build a point set from points and names of equal length
    pub fn new(points: Vec<Point>, names: Vec<String>) -> Result<Self, DistanceError> {
        if points.len() != names.len() {
            return Err(DistanceError::LengthMismatch {
                what: "points vs names",
                left: points.len(),
                right: names.len(),
            });
        }
        Ok(Self { points, names })
    }

    /// Build a point set from parallel coordinate and name slices
    ///
    /// # Arguments
    /// * `lon` - Longitudes in decimal degrees
    /// * `lat` - Latitudes in decimal degrees, paired with `lon` by index
    /// * `names` - One identifier per point, paired by index
    pub fn from_slices<S: AsRef<str>>(
        lon: &[f64],
        lat: &[f64],
        names: &[S],
    ) -> Result<Self, DistanceError> {
        if lon.len() != lat.len() {
            return Err(DistanceError::LengthMismatch {
                what: "longitude vs latitude",
                left: lon.len(),
                right: lat.len(),
            });
        }
        if lon.len() != names.len() {
            return Err(DistanceError::LengthMismatch {
                what: "coordinates vs names",
                left: lon.len(),
                right: names.len(),
            });
        }

        let points = lon
            .iter()
            .zip(lat)
            .map(|(&lon, &lat)| Point { lon, lat })
            .collect();
        let names = names.iter().map(|n| n.as_ref().to_string()).collect();
        Ok(Self { points, names })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, i: usize) -> Point {
        self.points[i]
    }

    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// A row-major n×k grid of pairwise distances in meters
///
/// Row labels come from the source point set and column labels from the
/// target set, both in input order. Labels are structural decoration only;
/// nothing in the grid depends on their values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    #[serde(rename = "rowNames")]
    row_names: Vec<String>,
    #[serde(rename = "colNames")]
    col_names: Vec<String>,
    values: Vec<f64>,
}

impl DistanceMatrix {
    pub(crate) fn from_parts(
        row_names: Vec<String>,
        col_names: Vec<String>,
        values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(values.len(), row_names.len() * col_names.len());
        Self {
            row_names,
            col_names,
            values,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.row_names.len()
    }

    pub fn n_cols(&self) -> usize {
        self.col_names.len()
    }

    /// Distance in meters between source point `i` and target point `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n_cols() + j]
    }

    /// All k distances from source point `i`, in target order
    pub fn row(&self, i: usize) -> &[f64] {
        let k = self.n_cols();
        &self.values[i * k..(i + 1) * k]
    }

    pub fn row_names(&self) -> &[String] {
        &self.row_names
    }

    pub fn col_names(&self) -> &[String] {
        &self.col_names
    }
}

/// Nearest-target record for one source point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestMatch {
    #[serde(rename = "sourceName")]
    pub source_name: String,
    #[serde(rename = "matchedName")]
    pub matched_name: String,
    pub meters: f64,
}
