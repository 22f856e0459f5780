use std::fmt;

use crate::geom::PolygonId;

/// Errors surfaced by the containment predicate and the clustering passes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NestError {
    /// Fewer than three vertices, repeated consecutive vertices, or self-crossing edges.
    InvalidPolygon { id: PolygonId, reason: String },
    /// A coordinate exceeds `COORD_LIMIT`, or a directed-ray product overflowed `i128`.
    NumericOverflow { id: PolygonId },
    /// Two polygons overlap without one containing the other.
    AmbiguousTopology { outer: PolygonId, inner: PolygonId },
    /// Input that is not a geometry problem (zero ray direction, repeated ids).
    InvalidInput { reason: String },
}

impl NestError {
    pub(crate) fn invalid_polygon(id: PolygonId, reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            id,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for NestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPolygon { id, reason } => write!(f, "polygon {id} is invalid: {reason}"),
            Self::NumericOverflow { id } => write!(
                f,
                "polygon {id} exceeds the exact integer range of the containment test"
            ),
            Self::AmbiguousTopology { outer, inner } => write!(
                f,
                "polygons {outer} and {inner} overlap without proper nesting"
            ),
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
        }
    }
}

impl std::error::Error for NestError {}
