//! Clockwise boundary walk on the corner lattice.
//!
//! The walker stands on a corner with a heading. Around corner `(x, y)`:
//!
//! ```text
//!        x-1     x
//!      ┌──────┬──────┐
//! y-1  │  NW  │  NE  │
//!      ├──────●──────┤     ● = corner (x, y)
//! y    │  SW  │  SE  │
//!      └──────┴──────┘
//! ```
//!
//! The two cells ahead of the walker, by heading:
//!
//! | heading | ahead-left | ahead-right |
//! |---------|------------|-------------|
//! | right   | NE         | SE          |
//! | down    | SE         | SW          |
//! | left    | SW         | NW          |
//! | up      | NW         | NE          |
//!
//! If ahead-right is not owned the walker turns right; if both are owned
//! it turns left; otherwise it keeps going. It then moves one corner along
//! the new heading. A vertex is emitted on every change of heading.

use log::warn;
use sprawl_core::{CellCoord, Corner, RegionId};
use sprawl_space::Direction;
use sprawl_store::Snapshot;

use crate::error::ContourError;
use crate::mask::RegionMask;
use crate::polygon::Polygon;

/// Cells ahead-left and ahead-right of a walker at `corner` facing `heading`.
fn ahead(corner: Corner, heading: Direction) -> (CellCoord, CellCoord) {
    let (x, y) = (corner.x, corner.y);
    let nw = CellCoord::new(x - 1, y - 1);
    let ne = CellCoord::new(x, y - 1);
    let sw = CellCoord::new(x - 1, y);
    let se = CellCoord::new(x, y);
    match heading {
        Direction::Right => (ne, se),
        Direction::Down => (se, sw),
        Direction::Left => (sw, nw),
        Direction::Up => (nw, ne),
    }
}

/// Heading to leave `corner` with.
fn next_heading(mask: &RegionMask, corner: Corner, heading: Direction) -> Direction {
    let (left, right) = ahead(corner, heading);
    if !mask.owned(right) {
        heading.turn_right()
    } else if mask.owned(left) {
        heading.turn_left()
    } else {
        heading
    }
}

fn advance(corner: Corner, heading: Direction) -> Corner {
    let (dx, dy) = heading.offset();
    Corner::new(corner.x + dx, corner.y + dy)
}

/// Walk the boundary of a mask already known to be non-empty, connected,
/// and hole-free.
fn walk(mask: &RegionMask, region: RegionId, start: Corner) -> Result<Polygon, ContourError> {
    let side = mask.lattice().side() as usize;
    // Every corner-to-corner edge of the lattice, plus one.
    let limit = 2 * side * (side + 1) + 1;

    let mut vertices = vec![start];
    let mut corner = start;
    let mut heading = Direction::Right;
    for _ in 0..limit {
        let turn = next_heading(mask, corner, heading);
        if turn != heading {
            vertices.push(corner);
            heading = turn;
        }
        corner = advance(corner, heading);
        if corner == start {
            return Ok(Polygon::new(vertices));
        }
    }
    Err(ContourError::WalkDiverged { region, limit })
}

/// Trace the closed outline of the cells `region` owns.
///
/// Tied cells count as owned, so neighbouring outlines overlap on ties.
///
/// # Errors
///
/// - [`ContourError::EmptyRegion`] if the region owns nothing
/// - [`ContourError::Disconnected`] if the owned cells are in several pieces
/// - [`ContourError::Holed`] if they enclose unowned cells
/// - [`ContourError::WalkDiverged`] if the walk fails to close
pub fn trace(snapshot: &Snapshot<'_>, region: RegionId) -> Result<Polygon, ContourError> {
    let mask = RegionMask::from_snapshot(snapshot, region);
    let Some(first) = mask.first() else {
        return Err(ContourError::EmptyRegion { region });
    };
    let components = mask.components();
    if components > 1 {
        return Err(ContourError::Disconnected { region, components });
    }
    let holes = mask.holes();
    if holes > 0 {
        return Err(ContourError::Holed { region, holes });
    }
    walk(&mask, region, first.top_left())
}

/// Polygons for a batch of regions, with the failures kept separately.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContourSet {
    /// Traced outlines in request order.
    pub polygons: Vec<(RegionId, Polygon)>,
    /// Regions that could not be traced, in request order.
    pub failures: Vec<(RegionId, ContourError)>,
}

impl ContourSet {
    /// Outline of `region`, if it was traced.
    pub fn polygon(&self, region: RegionId) -> Option<&Polygon> {
        self.polygons
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, p)| p)
    }

    /// Whether every requested region was traced.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Trace every region in `regions`.
///
/// Failures are logged at `warn` and collected; they never stop the batch.
pub fn trace_all(
    snapshot: &Snapshot<'_>,
    regions: impl IntoIterator<Item = RegionId>,
) -> ContourSet {
    let mut set = ContourSet::default();
    for region in regions {
        match trace(snapshot, region) {
            Ok(polygon) => set.polygons.push((region, polygon)),
            Err(err) => {
                warn!("skipping outline: {err}");
                set.failures.push((region, err));
            }
        }
    }
    set
}
