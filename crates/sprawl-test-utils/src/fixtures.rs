//! Named ownership maps for contour tests.
//!
//! Each is a square map for [`store_from_ascii`](crate::store_from_ascii).
//! Region 1 is the shape under test unless noted.

/// One owned cell in the middle of a 3x3 lattice.
pub const SINGLE: &[&str] = &["...", ".1.", "..."];

/// Region 1 covers the whole 3x3 lattice.
pub const FULL: &[&str] = &["111", "111", "111"];

/// An L with its corner at the bottom left. Six vertices.
pub const L_SHAPE: &[&str] = &["1...", "1...", "1...", "111."];

/// A U opening upward. Eight vertices.
pub const U_SHAPE: &[&str] = &["1.1.", "1.1.", "111.", "...."];

/// A ring around an unowned centre.
pub const RING: &[&str] = &["111", "1.1", "111"];

/// Two separate blocks of region 1.
pub const TWO_ISLANDS: &[&str] = &["11..", "11..", "...1", "...1"];

/// Two cells touching only at a corner.
pub const DIAGONAL_PAIR: &[&str] = &["1..", ".1.", "..."];

/// Regions 1 and 2 split down the middle with a tied column.
pub const SPLIT_WITH_TIES: &[&str] = &["11*22", "11*22", "11*22", "11*22", "11*22"];
