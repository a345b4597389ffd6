//! Map grid geometry
//!
//! This module contains the coordinate and compass primitives shared by the
//! catalog and the search:
//! - Cell coordinates with Euclidean distance
//! - Eight-way directions and connection mask helpers

/// Compass directions, direction sets and mask reversal
pub mod direction;
/// Integer cell coordinates
pub mod point;

pub use direction::{Direction, DirectionSet};
pub use point::CellPoint;
