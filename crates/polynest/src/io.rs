//! Plain-text scene input and border output.
//!
//! Scene: polygon count, then per polygon a vertex count followed by that
//! many `x y` integer pairs. Any ASCII whitespace separates tokens.
//!
//! Borders: the record count on the first line, then one record per line,
//! ids separated by single spaces.

use std::fmt;
use std::io::{self, Write};

use crate::cluster::BorderRecord;
use crate::geom::{Point, Polygon, PolygonId};
use crate::NestError;

/// Errors while reading a scene. Token positions are zero-based.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended while `expected` was still missing.
    Truncated { expected: &'static str },
    /// Token `token` at `position` is not a valid `expected`.
    BadNumber {
        expected: &'static str,
        token: String,
        position: usize,
    },
    /// Tokens remain after the last polygon.
    TrailingInput { position: usize },
    /// A polygon was read but is not acceptable geometry.
    Polygon(NestError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { expected } => write!(f, "input ended before {expected}"),
            Self::BadNumber {
                expected,
                token,
                position,
            } => write!(f, "token {position} ({token:?}) is not a valid {expected}"),
            Self::TrailingInput { position } => {
                write!(f, "unexpected input after the last polygon at token {position}")
            }
            Self::Polygon(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Polygon(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NestError> for ParseError {
    fn from(e: NestError) -> Self {
        Self::Polygon(e)
    }
}

struct Tokens<'a> {
    inner: std::str::SplitAsciiWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn next<T: std::str::FromStr>(&mut self, expected: &'static str) -> Result<T, ParseError> {
        let token = self
            .inner
            .next()
            .ok_or(ParseError::Truncated { expected })?;
        let position = self.position;
        self.position += 1;
        token.parse().map_err(|_| ParseError::BadNumber {
            expected,
            token: token.to_string(),
            position,
        })
    }
}

/// Parse a scene; polygon ids are their input positions.
pub fn parse_scene(text: &str) -> Result<Vec<Polygon>, ParseError> {
    let mut tokens = Tokens {
        inner: text.split_ascii_whitespace(),
        position: 0,
    };
    let count: usize = tokens.next("polygon count")?;
    // Counts come from untrusted input; do not preallocate from them.
    let mut polygons = Vec::new();
    for k in 0..count {
        let n: usize = tokens.next("vertex count")?;
        let mut points = Vec::new();
        for _ in 0..n {
            let x: i64 = tokens.next("x coordinate")?;
            let y: i64 = tokens.next("y coordinate")?;
            points.push(Point::new(x, y));
        }
        polygons.push(Polygon::new(PolygonId(k), points)?);
    }
    if tokens.inner.next().is_some() {
        return Err(ParseError::TrailingInput {
            position: tokens.position,
        });
    }
    Ok(polygons)
}

/// Write a scene in the format `parse_scene` reads, in slice order.
pub fn write_scene<W: Write>(polygons: &[Polygon], mut out: W) -> io::Result<()> {
    writeln!(out, "{}", polygons.len())?;
    for poly in polygons {
        writeln!(out, "{}", poly.len())?;
        for p in poly.points() {
            writeln!(out, "{} {}", p.x, p.y)?;
        }
    }
    Ok(())
}

/// Write the record count, then one record per line.
pub fn write_borders<W: Write>(records: &[BorderRecord], mut out: W) -> io::Result<()> {
    writeln!(out, "{}", records.len())?;
    for record in records {
        writeln!(out, "{record}")?;
    }
    Ok(())
}
