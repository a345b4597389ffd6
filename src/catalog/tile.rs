//! Cliff tile pieces as loaded from the catalog
//!
//! A tile is immutable once built. Every constructor validates the invariants
//! the search relies on: two connectors indexed 0 and 1, a non-empty
//! foundation and at least one graphic to draw.

use crate::catalog::connection::CliffConnectionPoint;
use crate::io::error::{InSection, Result, config_error};
use crate::io::ini::IniSection;
use crate::spatial::point::CellPoint;
use std::collections::BTreeSet;

/// One physical cliff piece
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliffTile {
    index: usize,
    tile_set: String,
    indices_in_tile_set: Vec<u32>,
    connection_points: [CliffConnectionPoint; 2],
    foundation: BTreeSet<CellPoint>,
}

impl CliffTile {
    /// Build a tile, checking its invariants
    ///
    /// # Errors
    ///
    /// Returns a configuration error attributed to `section` if the connectors
    /// are not indexed 0 and 1, a connector or foundation cell lies outside the
    /// coordinate bounds, the foundation is empty, or no tile-set index is given
    pub fn new(
        section: &str,
        index: usize,
        tile_set: &str,
        indices_in_tile_set: Vec<u32>,
        connection_points: [CliffConnectionPoint; 2],
        foundation: BTreeSet<CellPoint>,
    ) -> Result<Self> {
        let [first, second] = &connection_points;
        if first.index() != 0 || second.index() != 1 {
            return Err(config_error(
                section,
                "ConnectionPoint",
                &format!(
                    "connection points must be indexed 0 and 1, got {} and {}",
                    first.index(),
                    second.index()
                ),
            ));
        }
        if connection_points.iter().any(|cp| !cp.offset().is_in_bounds()) {
            return Err(config_error(
                section,
                "ConnectionPoint",
                &"connection point offset is out of bounds",
            ));
        }
        if foundation.iter().any(|cell| !cell.is_in_bounds()) {
            return Err(config_error(
                section,
                "Foundation",
                &"foundation cell is out of bounds",
            ));
        }
        if foundation.is_empty() {
            return Err(config_error(section, "Foundation", &"foundation is empty"));
        }
        if indices_in_tile_set.is_empty() {
            return Err(config_error(
                section,
                "IndicesInTileSet",
                &"at least one tile index is required",
            ));
        }

        Ok(Self {
            index,
            tile_set: tile_set.to_string(),
            indices_in_tile_set,
            connection_points,
            foundation,
        })
    }

    /// Load a tile from its catalog section
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the section and field of the first
    /// missing or malformed value
    pub fn from_ini_section(index: usize, section: &IniSection) -> Result<Self> {
        let name = section.name();

        let tile_set = section.require("TileSet")?;
        let indices = parse_tile_indices(section.require("IndicesInTileSet")?)
            .in_section(name, "IndicesInTileSet")?;
        let first = CliffConnectionPoint::parse(0, section.require("ConnectionPoint0")?)
            .in_section(name, "ConnectionPoint0")?;
        let second = CliffConnectionPoint::parse(1, section.require("ConnectionPoint1")?)
            .in_section(name, "ConnectionPoint1")?;
        let foundation =
            parse_foundation(section.require("Foundation")?).in_section(name, "Foundation")?;

        Self::new(name, index, tile_set, indices, [first, second], foundation)
    }

    /// Position of this tile inside its cliff type
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Tile-set identifier of the graphics
    pub fn tile_set(&self) -> &str {
        &self.tile_set
    }

    /// Interchangeable graphics inside the tile set
    pub fn indices_in_tile_set(&self) -> &[u32] {
        &self.indices_in_tile_set
    }

    /// Both connectors, index 0 first
    pub const fn connection_points(&self) -> &[CliffConnectionPoint; 2] {
        &self.connection_points
    }

    /// Cells occupied relative to the placement origin
    pub const fn foundation(&self) -> &BTreeSet<CellPoint> {
        &self.foundation
    }

    /// The connector at the other end from `entry_index`
    pub const fn exit_for(&self, entry_index: u8) -> &CliffConnectionPoint {
        let [first, second] = &self.connection_points;
        if entry_index == first.index() {
            second
        } else {
            first
        }
    }

    /// Foundation cells when placed at `origin`
    pub fn cells_at(&self, origin: CellPoint) -> impl Iterator<Item = CellPoint> + '_ {
        self.foundation.iter().map(move |&cell| origin + cell)
    }
}

/// Parse a comma separated list of tile-set indices
///
/// # Errors
///
/// Returns an invalid parameter error for an empty list or a non-integer entry
pub fn parse_tile_indices(value: &str) -> Result<Vec<u32>> {
    value
        .split(',')
        .map(|entry| {
            entry.trim().parse::<u32>().map_err(|parse_error| {
                crate::io::error::invalid_parameter("tile index", &entry.trim(), &parse_error)
            })
        })
        .collect()
}

/// Parse a `|` separated list of `x,y` cells
///
/// # Errors
///
/// Returns an invalid parameter error for a malformed cell; duplicated cells
/// are rejected since a tile cannot occupy a cell twice
pub fn parse_foundation(value: &str) -> Result<BTreeSet<CellPoint>> {
    let mut foundation = BTreeSet::new();
    for entry in value.split('|') {
        let cell: CellPoint = entry.parse()?;
        if !foundation.insert(cell) {
            return Err(crate::io::error::invalid_parameter(
                "foundation",
                &value,
                &format!("cell {cell} is listed twice"),
            ));
        }
    }
    Ok(foundation)
}
