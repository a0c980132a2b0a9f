//! Render glue: colors, the [`RenderSurface`] trait, and frame composition.
//!
//! A [`Frame`] is built from a lattice and the traced outlines, then drawn
//! onto any surface:
//!
//! 1. clear
//! 2. grid overlay as one `stroke_lines` call
//! 3. per region, a half-transparent fill and an opaque outline

use sprawl_contour::ContourSet;
use sprawl_core::{Corner, RegionId};
use sprawl_space::Lattice;

/// Opacity of region fills.
pub const FILL_ALPHA: f32 = 0.5;

// ── Color ──────────────────────────────────────────────────────────

/// An sRGB color with straight alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Opacity in `[0, 1]`.
    pub a: f32,
}

impl Color {
    /// Light grey used for the grid overlay.
    pub const GRID: Color = Color::rgb(204, 204, 204);

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// `hsl(hue, 100%, 50%)`, opaque. Hues wrap at 360.
    pub fn from_hue(hue: u16) -> Self {
        let h = f64::from(hue % 360) / 60.0;
        let x = 1.0 - (h % 2.0 - 1.0).abs();
        let (r, g, b) = match h as u32 {
            0 => (1.0, x, 0.0),
            1 => (x, 1.0, 0.0),
            2 => (0.0, 1.0, x),
            3 => (0.0, x, 1.0),
            4 => (x, 0.0, 1.0),
            _ => (1.0, 0.0, x),
        };
        let byte = |v: f64| (v * 255.0).round() as u8;
        Self::rgb(byte(r), byte(g), byte(b))
    }

    /// The color of `region`.
    pub fn for_region(region: RegionId) -> Self {
        Self::from_hue(region.hue())
    }

    /// The same color at opacity `a`.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

// ── Surface ────────────────────────────────────────────────────────

/// A point in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal pixel offset.
    pub x: f64,
    /// Vertical pixel offset, growing downward.
    pub y: f64,
}

impl Point {
    /// A point at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 2D immediate-mode drawing target.
pub trait RenderSurface {
    /// Erase everything.
    fn clear(&mut self);
    /// Stroke independent line segments.
    fn stroke_lines(&mut self, lines: &[(Point, Point)], color: Color);
    /// Fill a closed polygon.
    fn fill_polygon(&mut self, points: &[Point], color: Color);
    /// Stroke the outline of a closed polygon.
    fn stroke_polygon(&mut self, points: &[Point], color: Color);
}

/// One call made on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// `clear()`.
    Clear,
    /// `stroke_lines()`.
    StrokeLines {
        /// The segments.
        lines: Vec<(Point, Point)>,
        /// Stroke color.
        color: Color,
    },
    /// `fill_polygon()`.
    FillPolygon {
        /// Polygon vertices.
        points: Vec<Point>,
        /// Fill color.
        color: Color,
    },
    /// `stroke_polygon()`.
    StrokePolygon {
        /// Polygon vertices.
        points: Vec<Point>,
        /// Stroke color.
        color: Color,
    },
}

/// A surface that records every call, for headless hosts and tests.
///
/// `clear()` is recorded like any other call; the log only grows until
/// [`take()`](Self::take).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the log.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Calls since the most recent `clear()`, i.e. the last frame.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_lines(&mut self, lines: &[(Point, Point)], color: Color) {
        self.commands.push(DrawCommand::StrokeLines {
            lines: lines.to_vec(),
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            color,
        });
    }
}

// ── Frame ──────────────────────────────────────────────────────────

/// Everything drawn in one frame, in pixel space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Grid overlay segments.
    pub grid_lines: Vec<(Point, Point)>,
    /// Region outlines with their colors, in trace order.
    pub regions: Vec<(Color, Vec<Point>)>,
}

impl Frame {
    /// Lay out the grid and `contours` on a `width x height` surface.
    pub fn compose(lattice: &Lattice, contours: &ContourSet, width: u32, height: u32) -> Self {
        let side = f64::from(lattice.side());
        let sx = f64::from(width) / side;
        let sy = f64::from(height) / side;
        let to_px = |c: &Corner| Point::new(f64::from(c.x) * sx, f64::from(c.y) * sy);

        let (w, h) = (f64::from(width), f64::from(height));
        let grid_lines = (0..=lattice.side())
            .flat_map(|i| {
                let i = f64::from(i);
                [
                    (Point::new(i * sx, 0.0), Point::new(i * sx, h)),
                    (Point::new(0.0, i * sy), Point::new(w, i * sy)),
                ]
            })
            .collect();

        let regions = contours
            .polygons
            .iter()
            .map(|(region, polygon)| {
                (
                    Color::for_region(*region),
                    polygon.vertices().iter().map(to_px).collect(),
                )
            })
            .collect();

        Self {
            grid_lines,
            regions,
        }
    }

    /// Draw onto `surface`.
    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        surface.clear();
        surface.stroke_lines(&self.grid_lines, Color::GRID);
        for (color, points) in &self.regions {
            surface.fill_polygon(points, color.with_alpha(FILL_ALPHA));
            surface.stroke_polygon(points, *color);
        }
    }
}
