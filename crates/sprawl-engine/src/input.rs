//! Pointer pixels to lattice cells.

use sprawl_core::CellCoord;

/// How a pointer position inside the surface snaps to a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellRounding {
    /// Nearest even coordinate on each axis, kept inside the lattice.
    #[default]
    NearestEven,
    /// The cell under the pointer.
    Floor,
}

/// Maps pointer offsets on a `width x height` surface onto a lattice
/// `side` cells across.
///
/// Mapping never fails. Pointers inside the surface always land on a
/// lattice cell; pointers outside it map to cells outside the lattice,
/// which seed planting then rejects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerMapper {
    side: u32,
    width: u32,
    height: u32,
    rounding: CellRounding,
}

impl PointerMapper {
    /// A mapper for a lattice `side` cells across drawn on a
    /// `width x height` pixel surface.
    pub fn new(side: u32, width: u32, height: u32, rounding: CellRounding) -> Self {
        Self {
            side,
            width,
            height,
            rounding,
        }
    }

    /// Configured rounding.
    pub fn rounding(&self) -> CellRounding {
        self.rounding
    }

    /// The cell for a pointer at pixel offset `(px, py)`.
    pub fn map(&self, px: f64, py: f64) -> CellCoord {
        CellCoord::new(self.axis(px, self.width), self.axis(py, self.height))
    }

    fn axis(&self, pixel: f64, extent: u32) -> i32 {
        if !pixel.is_finite() {
            return -1;
        }
        let extent = f64::from(extent.max(1));
        let t = pixel * f64::from(self.side) / extent;
        if !(0.0..extent).contains(&pixel) {
            return t.floor() as i32;
        }
        let last = self.side.saturating_sub(1) as i32;
        match self.rounding {
            CellRounding::Floor => (t.floor() as i32).min(last),
            CellRounding::NearestEven => {
                let even = 2 * (t / 2.0).round() as i32;
                // Largest even coordinate on the lattice.
                let top = last - last % 2;
                even.min(top)
            }
        }
    }
}
