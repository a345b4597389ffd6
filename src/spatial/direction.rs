//! Eight-way compass directions and direction bitmasks
//!
//! Connection masks are authored with bit 0 meaning North and each following
//! bit stepping clockwise, so bit `d` and bit `d + 4` always face each other.

use crate::spatial::point::CellPoint;
use bitvec::prelude::*;
use std::fmt;

/// Compass direction in canonical mask order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Bit 0
    North,
    /// Bit 1
    NorthEast,
    /// Bit 2
    East,
    /// Bit 3
    SouthEast,
    /// Bit 4
    South,
    /// Bit 5
    SouthWest,
    /// Bit 6
    West,
    /// Bit 7
    NorthWest,
}

impl Direction {
    /// All directions in bit order
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Direction for a mask bit index, if the index is in range
    pub const fn from_bit(bit: usize) -> Option<Self> {
        match bit {
            0 => Some(Self::North),
            1 => Some(Self::NorthEast),
            2 => Some(Self::East),
            3 => Some(Self::SouthEast),
            4 => Some(Self::South),
            5 => Some(Self::SouthWest),
            6 => Some(Self::West),
            7 => Some(Self::NorthWest),
            _ => None,
        }
    }

    /// Single-bit mask for this direction
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }

    /// The direction facing this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }

    /// Cell offset of one step in this direction
    pub const fn unit_vector(self) -> CellPoint {
        match self {
            Self::North => CellPoint::new(0, -1),
            Self::NorthEast => CellPoint::new(1, -1),
            Self::East => CellPoint::new(1, 0),
            Self::SouthEast => CellPoint::new(1, 1),
            Self::South => CellPoint::new(0, 1),
            Self::SouthWest => CellPoint::new(-1, 1),
            Self::West => CellPoint::new(-1, 0),
            Self::NorthWest => CellPoint::new(-1, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
        };
        f.write_str(name)
    }
}

/// Swap the high and low halves of a connection mask
///
/// A neighbour sees every direction from the opposite side, which for the
/// canonical bit order is exactly a four-bit rotation.
pub const fn reverse_mask(mask: u8) -> u8 {
    (mask >> 4) | ((mask << 4) & 0xF0)
}

/// Set of compass directions backed by an 8-bit mask
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// Every direction
    pub const ALL: Self = Self(0xFF);

    /// Wrap a raw mask
    pub const fn from_mask(mask: u8) -> Self {
        Self(mask)
    }

    /// Raw mask
    pub const fn mask(self) -> u8 {
        self.0
    }

    /// Test if no direction is present
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Test direction membership
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.mask() != 0
    }

    /// Count directions in the set
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Directions in canonical bit order
    pub fn directions(self) -> Vec<Direction> {
        self.0
            .view_bits::<Lsb0>()
            .iter_ones()
            .filter_map(Direction::from_bit)
            .collect()
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .directions()
            .iter()
            .map(ToString::to_string)
            .collect();
        write!(f, "[{}]", names.join(" "))
    }
}
