//! Graphic variant selection for placed cliff tiles
//!
//! A cliff tile may list several interchangeable graphics. Each placement
//! picks one at random so long cliffs do not repeat visibly. The generator is
//! seeded, so the same seed and path always resolve to the same graphics. This
//! randomness never feeds back into the search.

use crate::algorithm::search::PathStep;
use crate::catalog::tile::CliffTile;
use crate::spatial::point::CellPoint;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// A placement with its concrete graphic chosen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPlacement {
    /// Tile-set identifier
    pub tile_set: String,
    /// Chosen graphic inside the tile set
    pub tile_index: u32,
    /// Placement origin
    pub location: CellPoint,
    /// Index of the cliff tile within its type
    pub cliff_tile: usize,
}

/// Seeded picker of tile graphics
pub struct VariantSelector {
    rng: StdRng,
}

impl VariantSelector {
    /// Create a deterministic selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick one of the tile's graphics
    ///
    /// Tiles always list at least one index; zero is returned only for a
    /// tile that somehow has none.
    pub fn pick(&mut self, tile: &CliffTile) -> u32 {
        let indices = tile.indices_in_tile_set();
        if indices.len() <= 1 {
            return indices.first().copied().unwrap_or(0);
        }
        let choice = self.rng.random_range(0..indices.len());
        indices.get(choice).copied().unwrap_or(0)
    }

    /// Resolve every step of a found path, in order
    pub fn resolve(&mut self, path: &[PathStep<'_>]) -> Vec<ResolvedPlacement> {
        path.iter()
            .map(|step| ResolvedPlacement {
                tile_set: step.tile.tile_set().to_string(),
                tile_index: self.pick(step.tile),
                location: step.location,
                cliff_tile: step.tile.index(),
            })
            .collect()
    }
}
