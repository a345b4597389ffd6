//! Successor generation for the cliff search
//!
//! A successor aligns one connector of a candidate tile one step away from the
//! current exit, in a direction both connectors accept. The candidate's other
//! connector becomes the new exit.

use crate::algorithm::node::{NodeId, SearchNode};
use crate::catalog::connection::compatible_connections;
use crate::catalog::tile::CliffTile;

/// All non-overlapping placements of `tile` after `current`
///
/// Placements whose origin would leave the coordinate bounds are skipped.
///
/// Placements are produced connector by connector, directions in canonical
/// order, so the result order is stable for identical inputs.
pub fn expand<'a>(
    current_id: NodeId,
    current: &SearchNode<'a>,
    tile: &'a CliffTile,
) -> Vec<SearchNode<'a>> {
    let exit_coords = current.exit_coords();
    let mut successors = Vec::new();

    for (connection_point, directions) in
        compatible_connections(current.exit(), tile.connection_points())
    {
        for direction in directions {
            let Some(placement) = exit_coords
                .checked_add(direction.unit_vector())
                .and_then(|cell| cell.checked_sub(connection_point.offset()))
                .filter(|cell| cell.is_in_bounds())
            else {
                tracing::trace!(
                    tile = tile.index(),
                    %exit_coords,
                    %direction,
                    "rejected placement outside the map bounds"
                );
                continue;
            };

            // A foundation cell landing on the chain would leave the union
            // smaller than chain plus foundation
            if tile
                .cells_at(placement)
                .any(|cell| current.occupied_cells().contains(&cell))
            {
                tracing::trace!(
                    tile = tile.index(),
                    %placement,
                    %direction,
                    "rejected overlapping placement"
                );
                continue;
            }

            let exit = *tile.exit_for(connection_point.index());
            successors.push(SearchNode::successor(
                current_id, current, placement, tile, exit,
            ));
        }
    }

    successors
}

/// Successors of `current` across a whole tile catalog, in catalog order
pub fn expand_catalog<'a>(
    current_id: NodeId,
    current: &SearchNode<'a>,
    tiles: &'a [CliffTile],
) -> Vec<SearchNode<'a>> {
    tiles
        .iter()
        .flat_map(|tile| expand(current_id, current, tile))
        .collect()
}
