//! Cliff piece catalog loaded once from configuration

/// Cliff types and the editor-wide catalog
pub mod cliff_type;
/// Connection points, cliff sides and the compatibility rule
pub mod connection;
/// Individual cliff tile pieces
pub mod tile;

pub use cliff_type::{CliffCatalog, CliffType};
pub use connection::{CliffConnectionPoint, CliffSide};
pub use tile::CliffTile;
