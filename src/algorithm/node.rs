//! Search nodes and the per-search arena that owns them
//!
//! Every node is a tile placed at a location, linked to the node it grew from
//! by an arena index. The links form a tree rooted at the synthetic start
//! node, and the whole arena is dropped at once when the search ends.

use crate::catalog::connection::{CliffConnectionPoint, CliffSide};
use crate::catalog::tile::CliffTile;
use crate::io::configuration::G_SCORE_WEIGHT;
use crate::spatial::point::CellPoint;
use std::collections::HashSet;

/// Index of a node inside its [`NodeArena`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in the arena
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Identity of a node for closed-set bookkeeping
///
/// Two nodes with the same key put the same tile in the same place and leave
/// through the same connector; the search expands only the first of them.
///
/// The key ignores the cells already covered by the chain. A later chain
/// reaching the same key with a different body is dropped even when only it
/// could continue, so this pruning can hide a path. Together with the weighted
/// f-score this makes the search incomplete as well as non-optimal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeKey {
    /// Placement origin
    pub location: CellPoint,
    /// Tile index within the cliff type, `None` for the start node
    pub tile: Option<usize>,
    /// Index of the exit connector
    pub exit: u8,
}

/// A tile placement in the implicit search graph
#[derive(Clone, Debug)]
pub struct SearchNode<'a> {
    location: CellPoint,
    tile: Option<&'a CliffTile>,
    parent: Option<NodeId>,
    exit: CliffConnectionPoint,
    destination: CellPoint,
    occupied_cells: HashSet<CellPoint>,
    g_score: f64,
    h_score: f64,
}

impl<'a> SearchNode<'a> {
    /// Synthetic root that places no tile and accepts any direction
    pub fn start(location: CellPoint, destination: CellPoint, side: CliffSide) -> Self {
        let exit = CliffConnectionPoint::omnidirectional(side);
        let exit_coords = location + exit.offset();
        Self {
            location,
            tile: None,
            parent: None,
            exit,
            destination,
            occupied_cells: HashSet::new(),
            g_score: 0.0,
            h_score: exit_coords.distance(destination),
        }
    }

    /// Place `tile` at `location` after `parent`, leaving through `exit`
    ///
    /// The occupied set is the parent's set plus this tile's foundation.
    pub fn successor(
        parent_id: NodeId,
        parent: &Self,
        location: CellPoint,
        tile: &'a CliffTile,
        exit: CliffConnectionPoint,
    ) -> Self {
        let mut occupied_cells = parent.occupied_cells.clone();
        occupied_cells.extend(tile.cells_at(location));

        let exit_coords = location + exit.offset();
        let step = parent.exit_coords().distance(exit_coords);

        Self {
            location,
            tile: Some(tile),
            parent: Some(parent_id),
            exit,
            destination: parent.destination,
            occupied_cells,
            g_score: parent.g_score + step,
            h_score: exit_coords.distance(parent.destination),
        }
    }

    /// Placement origin of this node's tile
    pub const fn location(&self) -> CellPoint {
        self.location
    }

    /// Tile placed here, `None` for the start node
    pub const fn tile(&self) -> Option<&'a CliffTile> {
        self.tile
    }

    /// Node this one was expanded from
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Connector the next tile must attach to
    pub const fn exit(&self) -> &CliffConnectionPoint {
        &self.exit
    }

    /// Target of the whole search
    pub const fn destination(&self) -> CellPoint {
        self.destination
    }

    /// Every cell covered by the chain up to and including this node
    pub const fn occupied_cells(&self) -> &HashSet<CellPoint> {
        &self.occupied_cells
    }

    /// Absolute position of the exit connector
    pub fn exit_coords(&self) -> CellPoint {
        self.location + self.exit.offset()
    }

    /// Accumulated chain length measured between exits
    pub const fn g_score(&self) -> f64 {
        self.g_score
    }

    /// Straight-line distance from the exit to the destination
    pub const fn h_score(&self) -> f64 {
        self.h_score
    }

    /// Ordering cost, lower is expanded first
    pub fn f_score(&self) -> f64 {
        G_SCORE_WEIGHT.mul_add(self.g_score, self.h_score)
    }

    /// Closed-set identity
    pub fn key(&self) -> NodeKey {
        NodeKey {
            location: self.location,
            tile: self.tile.map(CliffTile::index),
            exit: self.exit.index(),
        }
    }

    /// Test whether the chain ends close enough to the destination
    pub fn reaches_destination(&self, radius: f64, side: Option<CliffSide>) -> bool {
        self.h_score <= radius && side.is_none_or(|required| required == self.exit.side())
    }
}

/// Owner of every node created by one search
#[derive(Debug, Default)]
pub struct NodeArena<'a> {
    nodes: Vec<SearchNode<'a>>,
}

impl<'a> NodeArena<'a> {
    /// Create an empty arena
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Store a node and return its id
    pub fn push(&mut self, node: SearchNode<'a>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Look up a node
    pub fn get(&self, id: NodeId) -> Option<&SearchNode<'a>> {
        self.nodes.get(id.0)
    }

    /// Number of nodes created so far
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Test if no node has been created
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes from the root down to `id`
    pub fn chain(&self, id: NodeId) -> Vec<&SearchNode<'a>> {
        let mut chain = Vec::new();
        let mut cursor = Some(id);
        while let Some(node) = cursor.and_then(|current| self.get(current)) {
            chain.push(node);
            cursor = node.parent;
        }
        chain.reverse();
        chain
    }
}
