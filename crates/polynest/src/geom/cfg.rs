//! Numeric limits for exact geometry (internal).
//!
//! Policy
//! - Coordinates are bounded so every difference fits in 63 bits and every
//!   product of two differences fits in `i128`. The horizontal predicate can
//!   then never overflow; the directed predicate still checks its products.

/// Largest accepted absolute coordinate value (2^62).
pub const COORD_LIMIT: i64 = 1 << 62;

/// Direction of the directed ray when none is given. Both components are prime
/// so small-coordinate vertices almost never lie on the ray.
pub const DEFAULT_RAY_DIR: (i64, i64) = (7919, 7907);
