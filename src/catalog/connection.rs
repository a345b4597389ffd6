//! Connection points and the rule deciding whether two of them can join

use crate::io::configuration::{CONNECTION_MASK_LENGTH, OMNIDIRECTIONAL_MASK};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::direction::{Direction, DirectionSet, reverse_mask};
use crate::spatial::point::CellPoint;
use std::fmt;
use std::str::FromStr;

/// Which face of the cliff a connector belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CliffSide {
    /// Upper edge of the cliff
    Front,
    /// Lower edge of the cliff
    Back,
}

impl fmt::Display for CliffSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => f.write_str("Front"),
            Self::Back => f.write_str("Back"),
        }
    }
}

impl FromStr for CliffSide {
    type Err = crate::io::error::CliffError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Front" => Ok(Self::Front),
            "Back" => Ok(Self::Back),
            other => Err(invalid_parameter(
                "side",
                &other,
                &"expected 'Front' or 'Back'",
            )),
        }
    }
}

/// An attachment location on a cliff tile
///
/// The reversed mask is derived on every call, so it can never disagree with
/// the authored mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CliffConnectionPoint {
    index: u8,
    offset: CellPoint,
    connection_mask: u8,
    side: CliffSide,
}

impl CliffConnectionPoint {
    /// Create a connection point
    pub const fn new(index: u8, offset: CellPoint, connection_mask: u8, side: CliffSide) -> Self {
        Self {
            index,
            offset,
            connection_mask,
            side,
        }
    }

    /// Connector accepting every direction at the placement origin
    ///
    /// Stands in for the exit of a chain that has no tile yet.
    pub const fn omnidirectional(side: CliffSide) -> Self {
        Self::new(0, CellPoint::new(0, 0), OMNIDIRECTIONAL_MASK, side)
    }

    /// Which of the tile's two connectors this is
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Location relative to the tile's placement origin
    pub const fn offset(&self) -> CellPoint {
        self.offset
    }

    /// Directions a neighbour may approach from
    pub const fn connection_mask(&self) -> u8 {
        self.connection_mask
    }

    /// The mask as seen from the neighbouring connector
    pub const fn reversed_mask(&self) -> u8 {
        reverse_mask(self.connection_mask)
    }

    /// Cliff face of this connector
    pub const fn side(&self) -> CliffSide {
        self.side
    }

    /// Directions through which this point can attach to `exit`
    ///
    /// Empty when the sides differ, whatever the masks say.
    pub const fn attachment_directions(&self, exit: &Self) -> DirectionSet {
        if !matches!(
            (self.side, exit.side),
            (CliffSide::Front, CliffSide::Front) | (CliffSide::Back, CliffSide::Back)
        ) {
            return DirectionSet::from_mask(0);
        }
        DirectionSet::from_mask(self.reversed_mask() & exit.connection_mask)
    }

    /// Parse the `x,y:MMMMMMMM:Side` catalog form
    ///
    /// The mask is written most significant bit first.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error describing the first malformed part
    pub fn parse(index: u8, value: &str) -> Result<Self> {
        let parts: Vec<&str> = value.split(':').map(str::trim).collect();
        let [offset, mask, side] = parts.as_slice() else {
            return Err(invalid_parameter(
                "connection point",
                &value,
                &"expected 'x,y:MMMMMMMM:Side'",
            ));
        };

        let offset: CellPoint = offset.parse()?;

        if mask.len() != CONNECTION_MASK_LENGTH || !mask.chars().all(|c| c == '0' || c == '1') {
            return Err(invalid_parameter(
                "connection mask",
                mask,
                &format!("expected exactly {CONNECTION_MASK_LENGTH} binary digits"),
            ));
        }
        let connection_mask = u8::from_str_radix(mask, 2)
            .map_err(|parse_error| invalid_parameter("connection mask", mask, &parse_error))?;

        let side: CliffSide = side.parse()?;

        Ok(Self::new(index, offset, connection_mask, side))
    }
}

/// Every usable connector of a candidate tile with its attachment directions
///
/// Connectors with no shared direction, or on the wrong side, are left out.
pub fn compatible_connections(
    exit: &CliffConnectionPoint,
    candidates: &[CliffConnectionPoint],
) -> Vec<(CliffConnectionPoint, Vec<Direction>)> {
    candidates
        .iter()
        .filter_map(|candidate| {
            let directions = candidate.attachment_directions(exit);
            (!directions.is_empty()).then(|| (*candidate, directions.directions()))
        })
        .collect()
}
