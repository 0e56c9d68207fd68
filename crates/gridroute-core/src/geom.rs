//! Geometry primitives: [`Position`] and [`Action`].

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A grid cell addressed by (row, col). Rows grow down, columns grow right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub const fn manhattan(self, other: Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

/// Positions print in their wire form, `row,col`.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = ParseError;

    /// Parse a `row,col` pair. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(',');
        let (Some(r), Some(c), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseError::MissingField { field: "position" });
        };
        Ok(Self::new(
            crate::codec::parse_int("position", r)?,
            crate::codec::parse_int("position", c)?,
        ))
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A single move on the grid.
///
/// The declaration order is the canonical tie-break order shared by every
/// search strategy: `Up`, `Down`, `Left`, `Right`, then tunnels by index.
/// The derived `Ord` follows it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    /// Teleport through the tunnel with the given index.
    Tunnel(usize),
}

impl Action {
    /// The four directional moves in canonical order.
    pub const DIRECTIONS: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// (drow, dcol) offset of a directional move. Tunnels have no fixed delta.
    #[inline]
    pub const fn delta(self) -> Option<(i32, i32)> {
        match self {
            Action::Up => Some((-1, 0)),
            Action::Down => Some((1, 0)),
            Action::Left => Some((0, -1)),
            Action::Right => Some((0, 1)),
            Action::Tunnel(_) => None,
        }
    }

    /// Canonical lower-case name used in plan strings.
    pub const fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::Tunnel(_) => "tunnel",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Position::new(1, 4);
        let b = Position::new(3, 0);
        assert_eq!(a.manhattan(b), 6);
        assert_eq!(b.manhattan(a), 6);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn position_wire_form() {
        let p: Position = " 2,7 ".parse().unwrap();
        assert_eq!(p, Position::new(2, 7));
        assert_eq!(p.to_string(), "2,7");
        assert!("2".parse::<Position>().is_err());
        assert!("2,3,4".parse::<Position>().is_err());
        assert!("a,b".parse::<Position>().is_err());
    }

    #[test]
    fn canonical_action_order() {
        let mut actions = vec![
            Action::Tunnel(0),
            Action::Right,
            Action::Left,
            Action::Down,
            Action::Up,
        ];
        actions.sort();
        assert_eq!(
            actions,
            vec![
                Action::Up,
                Action::Down,
                Action::Left,
                Action::Right,
                Action::Tunnel(0)
            ]
        );
        assert!(Action::Tunnel(0) < Action::Tunnel(1));
    }

    #[test]
    fn action_names() {
        assert_eq!(Action::Up.to_string(), "up");
        assert_eq!(Action::Tunnel(3).to_string(), "tunnel");
        assert_eq!(Action::Left.delta(), Some((0, -1)));
        assert_eq!(Action::Tunnel(1).delta(), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn action_round_trip() {
        let a = Action::Tunnel(2);
        let json = serde_json::to_string(&a).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}
