//! Geodist - Haversine distance matrix and nearest-match library
//!
//! This library computes great-circle (Haversine) distances between geographic
//! points on a spherical Earth and derives two products from that primitive:
//! a full pairwise distance matrix between two named point sets, and the
//! nearest target point (with its distance in meters) for each source point.

pub mod api;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::api::{distance_haversine, distance_matrix, distance_nearest};
pub use crate::core::geo::{deg_to_rad, haversine_distance, EARTH_RADIUS_M};
pub use crate::error::DistanceError;
pub use crate::models::{DistanceMatrix, NearestMatch, Point, PointSet};
