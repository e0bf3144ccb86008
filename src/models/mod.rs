// Model exports
pub mod domain;

pub use domain::{DistanceMatrix, NearestMatch, Point, PointSet};
