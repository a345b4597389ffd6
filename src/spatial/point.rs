//! Integer cell coordinates on the map grid

use crate::io::configuration::MAX_CELL_COORDINATE;
use crate::io::error::{CliffError, invalid_parameter};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A map cell coordinate
///
/// `x` grows eastwards and `y` grows southwards. Ordering is row-major
/// (`y` first) so ordered sets of cells iterate the way a map is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellPoint {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl CellPoint {
    /// Create a cell coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two cells
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }

    /// Component-wise sum, `None` on `i32` overflow
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match (self.x.checked_add(rhs.x), self.y.checked_add(rhs.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Component-wise difference, `None` on `i32` overflow
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match (self.x.checked_sub(rhs.x), self.y.checked_sub(rhs.y)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Test whether both components lie within [`MAX_CELL_COORDINATE`]
    pub const fn is_in_bounds(self) -> bool {
        self.x.unsigned_abs() <= MAX_CELL_COORDINATE.unsigned_abs()
            && self.y.unsigned_abs() <= MAX_CELL_COORDINATE.unsigned_abs()
    }
}

impl Ord for CellPoint {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then_with(|| self.x.cmp(&other.x))
    }
}

impl PartialOrd for CellPoint {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for CellPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for CellPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for CellPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for CellPoint {
    type Err = CliffError;

    /// Parse `x,y`, tolerating whitespace around either component
    ///
    /// Components beyond [`MAX_CELL_COORDINATE`] are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| invalid_parameter("cell", &s, &"expected 'x,y'"))?;

        let parse = |component: &str| {
            component.trim().parse::<i32>().map_err(|parse_error| {
                invalid_parameter("cell", &s, &format!("'{}': {parse_error}", component.trim()))
            })
        };

        let cell = Self::new(parse(x)?, parse(y)?);
        if !cell.is_in_bounds() {
            return Err(invalid_parameter(
                "cell",
                &s,
                &format!("components must lie within +/-{MAX_CELL_COORDINATE}"),
            ));
        }
        Ok(cell)
    }
}
