// Core algorithm exports
pub mod geo;
pub mod matrix;
pub mod nearest;

pub use geo::{deg_to_rad, haversine_distance, EARTH_RADIUS_M};
pub use matrix::build_matrix;
pub use nearest::nearest_match;
