//! Automatic cliff placement for tile-based strategy maps
//!
//! A cliff type is a catalog of tiles, each with two connection points. The
//! search chains tiles end to end from a start cell toward a destination cell,
//! never letting two tiles overlap, and returns the placements in order.

#![forbid(unsafe_code)]

/// Weighted best-first search over chains of cliff tiles
pub mod algorithm;
/// Cliff types, tiles and connection points loaded from INI catalogs
pub mod catalog;
/// Input/output operations, configuration and error handling
pub mod io;
/// Cell coordinates and compass directions
pub mod spatial;

pub use io::error::{CliffError, Result};
