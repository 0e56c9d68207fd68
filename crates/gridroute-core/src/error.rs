//! Errors raised while decoding or building a [`GridModel`](crate::GridModel).

use std::fmt;

use crate::geom::Position;

/// Malformed layout or traffic encoding.
///
/// Every variant is fatal for the planning session: no search runs on a grid
/// that failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A required section is absent.
    MissingField { field: &'static str },
    /// A token is not a valid integer.
    InvalidNumber { field: &'static str, value: String },
    /// Rows or columns are not strictly positive, or the grid is too large.
    InvalidDimensions { rows: i32, cols: i32 },
    /// A coordinate list does not hold the declared number of integers.
    CountMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    /// A coordinate lies outside the grid.
    OutOfBounds { field: &'static str, pos: Position },
    /// A tunnel field does not hold exactly four integers.
    MalformedTunnel { text: String },
    /// Both tunnel endpoints are the same cell.
    DegenerateTunnel { pos: Position },
    /// A traffic entry does not hold exactly five integers.
    MalformedTraffic { entry: String },
    /// A traffic entry joins two cells that are not grid neighbours.
    NotAdjacent { entry: String },
    /// A traffic cost is negative.
    NegativeCost { entry: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing {field} field"),
            Self::InvalidNumber { field, value } => {
                write!(f, "invalid number \u{201c}{value}\u{201d} in {field}")
            }
            Self::InvalidDimensions { rows, cols } => {
                write!(
                    f,
                    "grid dimensions {rows}x{cols} must be positive and hold at most {} cells",
                    crate::GridModel::MAX_CELLS
                )
            }
            Self::CountMismatch {
                field,
                expected,
                found,
            } => write!(f, "{field}: expected {expected} integers, found {found}"),
            Self::OutOfBounds { field, pos } => write!(f, "{field} position {pos} is off the grid"),
            Self::MalformedTunnel { text } => {
                write!(f, "tunnel \u{201c}{text}\u{201d} must be r1,c1,r2,c2")
            }
            Self::DegenerateTunnel { pos } => write!(f, "tunnel joins {pos} to itself"),
            Self::MalformedTraffic { entry } => {
                write!(f, "traffic entry \u{201c}{entry}\u{201d} must be r1,c1,r2,c2,cost")
            }
            Self::NotAdjacent { entry } => {
                write!(f, "traffic entry \u{201c}{entry}\u{201d} joins non-adjacent cells")
            }
            Self::NegativeCost { entry } => {
                write!(f, "traffic entry \u{201c}{entry}\u{201d} has a negative cost")
            }
        }
    }
}

impl std::error::Error for ParseError {}
