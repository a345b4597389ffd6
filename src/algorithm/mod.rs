/// Successor generation for search nodes
pub mod expansion;
/// Search nodes and the arena owning them
pub mod node;
/// Best-first search driver and its configuration
pub mod search;
/// Seeded graphic selection for placed tiles
pub mod variants;
