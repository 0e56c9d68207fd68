//! Wire codec for the layout and traffic strings.
//!
//! Layout: `rows;cols;numDestinations;numStores;d1r,d1c,...;s1r,s1c,...;t1ar,t1ac,t1br,t1bc;...`
//! with one tunnel per trailing field.
//!
//! Traffic: `r1,c1,r2,c2,cost;...` with one entry per neighbouring cell pair.
//! Edges the traffic string never mentions stay absent.

use crate::error::ParseError;
use crate::geom::Position;
use crate::grid::{GridBuilder, GridModel};

pub(crate) fn parse_int(field: &'static str, s: &str) -> Result<i32, ParseError> {
    let s = s.trim();
    s.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: s.to_string(),
    })
}

fn parse_count(field: &'static str, s: &str) -> Result<usize, ParseError> {
    let s = s.trim();
    s.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: s.to_string(),
    })
}

/// Parse a comma-separated list of integers. An empty (or blank) list is
/// valid and yields no values.
fn parse_ints(field: &'static str, s: &str) -> Result<Vec<i32>, ParseError> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(',').map(|t| parse_int(field, t)).collect()
}

/// Parse exactly `count` coordinate pairs.
fn parse_positions(
    field: &'static str,
    s: Option<&str>,
    count: usize,
) -> Result<Vec<Position>, ParseError> {
    let ints = match s {
        Some(s) => parse_ints(field, s)?,
        None if count == 0 => Vec::new(),
        None => return Err(ParseError::MissingField { field }),
    };
    if ints.len() != count * 2 {
        return Err(ParseError::CountMismatch {
            field,
            expected: count * 2,
            found: ints.len(),
        });
    }
    Ok(ints
        .chunks_exact(2)
        .map(|pair| Position::new(pair[0], pair[1]))
        .collect())
}

impl GridModel {
    /// Decode a grid from its layout and traffic strings.
    pub fn parse(layout: &str, traffic: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = layout.trim().split(';').collect();
        let field = |i: usize, name: &'static str| {
            fields
                .get(i)
                .copied()
                .filter(|s| !s.trim().is_empty())
                .ok_or(ParseError::MissingField { field: name })
        };

        let rows = parse_int("rows", field(0, "rows")?)?;
        let cols = parse_int("cols", field(1, "cols")?)?;
        let num_destinations = parse_count("destination count", field(2, "destination count")?)?;
        let num_stores = parse_count("store count", field(3, "store count")?)?;

        let mut b = GridBuilder::new(rows, cols)?;

        for p in parse_positions("destinations", fields.get(4).copied(), num_destinations)? {
            b.destination(p)?;
        }
        for p in parse_positions("stores", fields.get(5).copied(), num_stores)? {
            b.store(p)?;
        }

        for text in fields.iter().skip(6).filter(|s| !s.trim().is_empty()) {
            let ints = parse_ints("tunnel", text)?;
            let [r1, c1, r2, c2] = ints[..] else {
                return Err(ParseError::MalformedTunnel {
                    text: text.trim().to_string(),
                });
            };
            b.tunnel(Position::new(r1, c1), Position::new(r2, c2))?;
        }

        for entry in traffic.split(';').filter(|s| !s.trim().is_empty()) {
            let ints = parse_ints("traffic", entry)?;
            let [r1, c1, r2, c2, cost] = ints[..] else {
                return Err(ParseError::MalformedTraffic {
                    entry: entry.trim().to_string(),
                });
            };
            let (a, z) = (Position::new(r1, c1), Position::new(r2, c2));
            b.edge(a, z, cost).map_err(|e| match e {
                ParseError::NotAdjacent { .. } => ParseError::NotAdjacent {
                    entry: entry.trim().to_string(),
                },
                ParseError::NegativeCost { .. } => ParseError::NegativeCost {
                    entry: entry.trim().to_string(),
                },
                other => other,
            })?;
        }

        Ok(b.build())
    }

    /// Encode the layout string.
    ///
    /// Every section, tunnels included, is terminated by `;`.
    pub fn encode_layout(&self) -> String {
        let pairs = |ps: &[Position]| {
            ps.iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        let mut s = format!(
            "{};{};{};{};{};{};",
            self.rows(),
            self.cols(),
            self.destinations().len(),
            self.stores().len(),
            pairs(self.destinations()),
            pairs(self.stores()),
        );
        for t in self.tunnels() {
            s.push_str(&format!("{},{};", t.a, t.b));
        }
        s
    }

    /// Encode the traffic string: for every cell in row-major order, its
    /// right edge then its down edge, skipping edges that would leave the
    /// grid.
    pub fn encode_traffic(&self) -> String {
        let mut s = String::new();
        for i in 0..self.len() {
            let p = self.point(i);
            if p.col + 1 < self.cols() {
                s.push_str(&format!("{},{},{};", p, p.shift(0, 1), self.right_cost(p)));
            }
            if p.row + 1 < self.rows() {
                s.push_str(&format!("{},{},{};", p, p.shift(1, 0), self.down_cost(p)));
            }
        }
        s
    }
}
