//! Scan-conversion rasterizer
//!
//! Pure pixel-level drawing algorithms: DDA lines, midpoint circles,
//! parametric ellipses and cubic Béziers, plus span-based fills. Everything
//! here writes through the `Surface` trait one pixel (or one horizontal run)
//! at a time and keeps no state between calls. All functions are total:
//! out-of-surface writes are clipped by the surface, degenerate geometry
//! (zero radius, zero-length line) collapses to a single pixel or a no-op.

/// Sample count for the parametric curves (ellipse, Bézier).
/// Fixed, not adaptive - gaps at large radii are accepted.
const CURVE_SAMPLES: u32 = 100;

/// A point in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

/// The pixel grid the rasterizer draws into.
///
/// `set_pixel` must silently ignore coordinates outside
/// [0, width) x [0, height) - clipping happens here, never in the
/// algorithms above it.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Inclusive horizontal run at row `y`, endpoints in either order.
    /// Implementors with linear pixel storage should override with a
    /// row-write fast path.
    fn hspan(&mut self, x1: i32, x2: i32, y: i32, color: Color) {
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        for x in lo..=hi {
            self.set_pixel(x, y, color);
        }
    }
}

/// One shape request, built per gesture and discarded after rasterization.
/// The canvas itself is a flat raster; nothing retains these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    Line {
        p1: Point,
        p2: Point,
    },
    Polygon {
        vertices: Vec<Point>,
    },
    Rect {
        origin: Point,
        width: i32,
        height: i32,
        filled: bool,
    },
    Circle {
        center: Point,
        radius: i32,
        filled: bool,
    },
    Ellipse {
        center: Point,
        rx: i32,
        ry: i32,
    },
    Bezier {
        p0: Point,
        p1: Point,
        p2: Point,
        p3: Point,
    },
}

impl Primitive {
    /// Rasterize into `surface` with `color`
    pub fn rasterize(&self, surface: &mut impl Surface, color: Color) {
        match self {
            Self::Line { p1, p2 } => line(surface, *p1, *p2, color),
            Self::Polygon { vertices } => polygon(surface, vertices, color),
            Self::Rect {
                origin,
                width,
                height,
                filled: false,
            } => rect(surface, *origin, *width, *height, color),
            Self::Rect {
                origin,
                width,
                height,
                filled: true,
            } => fill_rect(surface, *origin, *width, *height, color),
            Self::Circle {
                center,
                radius,
                filled: false,
            } => circle(surface, *center, *radius, color),
            Self::Circle {
                center,
                radius,
                filled: true,
            } => fill_circle(surface, *center, *radius, color),
            Self::Ellipse { center, rx, ry } => ellipse(surface, *center, *rx, *ry, color),
            Self::Bezier { p0, p1, p2, p3 } => bezier(surface, *p0, *p1, *p2, *p3, color),
        }
    }
}

/// Draw a line with the DDA algorithm.
///
/// Steps along the dominant axis with floating-point increments, plotting
/// the rounded position at each step. The step count is based on the
/// dominant-axis magnitude, so the pixel set is the same regardless of
/// endpoint order. Coincident endpoints plot a single pixel.
pub fn line(surface: &mut impl Surface, p1: Point, p2: Point, color: Color) {
    let dx = (p2.x - p1.x) as f32;
    let dy = (p2.y - p1.y) as f32;

    let steps = dx.abs().max(dy.abs()) as i32;
    if steps == 0 {
        surface.set_pixel(p1.x, p1.y, color);
        return;
    }

    let x_inc = dx / steps as f32;
    let y_inc = dy / steps as f32;

    let mut x = p1.x as f32;
    let mut y = p1.y as f32;
    for _ in 0..=steps {
        surface.set_pixel(x.round() as i32, y.round() as i32, color);
        x += x_inc;
        y += y_inc;
    }
}

/// Draw a closed polygon outline: one line per consecutive vertex pair,
/// wrapping last-to-first. Axis-aligned edges get no special casing.
pub fn polygon(surface: &mut impl Surface, vertices: &[Point], color: Color) {
    for i in 0..vertices.len() {
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % vertices.len()];
        line(surface, p1, p2, color);
    }
}

/// Rectangle outline as a 4-vertex polygon, clockwise from the top-left
pub fn rect(surface: &mut impl Surface, origin: Point, width: i32, height: i32, color: Color) {
    let vertices = [
        origin,
        Point::new(origin.x + width, origin.y),
        Point::new(origin.x + width, origin.y + height),
        Point::new(origin.x, origin.y + height),
    ];
    polygon(surface, &vertices, color);
}

/// Triangle outline, reusing the polygon routine
pub fn triangle(surface: &mut impl Surface, a: Point, b: Point, c: Point, color: Color) {
    polygon(surface, &[a, b, c], color);
}

/// Fill a rectangle with one horizontal span per row.
/// Rows run origin.y .. origin.y+height-1, each spanning
/// origin.x .. origin.x+width-1. Width or height <= 0 fills nothing.
pub fn fill_rect(surface: &mut impl Surface, origin: Point, width: i32, height: i32, color: Color) {
    if width <= 0 || height <= 0 {
        return;
    }
    for row in 0..height {
        let y = origin.y + row;
        hline(surface, origin.x, y, origin.x + width - 1, y, color);
    }
}

/// The horizontal-line primitive shared by the fill routines.
/// Horizontal-only by contract: mismatched y coordinates are a silent
/// no-op signaling caller misuse, not an error.
pub fn hline(surface: &mut impl Surface, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
    if y1 != y2 {
        return;
    }
    surface.hspan(x1, x2, y1, color);
}

/// The 8 symmetric octant offsets for a midpoint-circle step.
/// Shared by the outline and (as span pairs) the fill.
fn octant_offsets(x: i32, y: i32) -> [(i32, i32); 8] {
    [
        (x, y),
        (-x, y),
        (x, -y),
        (-x, -y),
        (y, x),
        (-y, x),
        (y, -x),
        (-y, -x),
    ]
}

/// Circle outline with the midpoint algorithm (d = 3 - 2r form).
/// Radius <= 0 degenerates to the center pixel.
pub fn circle(surface: &mut impl Surface, center: Point, radius: i32, color: Color) {
    if radius <= 0 {
        surface.set_pixel(center.x, center.y, color);
        return;
    }

    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * radius;

    while x <= y {
        for (ox, oy) in octant_offsets(x, y) {
            surface.set_pixel(center.x + ox, center.y + oy, color);
        }
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }
}

/// Four symmetric horizontal spans for one midpoint-circle state.
/// Coinciding spans (y == 0, x == 0, x == y) are drawn once - the filled
/// pixel set is unchanged, and the fill stays safe for any future
/// non-idempotent blending.
fn circle_spans(surface: &mut impl Surface, center: Point, x: i32, y: i32, color: Color) {
    hline(surface, center.x - x, center.y + y, center.x + x, center.y + y, color);
    if y != 0 {
        hline(surface, center.x - x, center.y - y, center.x + x, center.y - y, color);
    }
    if x != y {
        hline(surface, center.x - y, center.y + x, center.x + y, center.y + x, color);
        if x != 0 {
            hline(surface, center.x - y, center.y - x, center.x + y, center.y - x, color);
        }
    }
}

/// Filled circle: the same midpoint recurrence as `circle`, but each state
/// (the initial x=0, y=r one included) contributes horizontal spans instead
/// of points. A closing span of half-width r at the equator covers the row
/// the recurrence leaves thin. Radius <= 0 writes the center pixel only.
pub fn fill_circle(surface: &mut impl Surface, center: Point, radius: i32, color: Color) {
    if radius <= 0 {
        surface.set_pixel(center.x, center.y, color);
        return;
    }

    let mut x = 0;
    let mut y = radius;
    let mut d = 3 - 2 * radius;

    circle_spans(surface, center, x, y, color);
    while x <= y {
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
        circle_spans(surface, center, x, y, color);
    }

    hline(surface, center.x - radius, center.y, center.x + radius, center.y, color);
}

/// Ellipse by parametric sampling: 100 fixed samples of
/// (cx + rx cos t, cy + ry sin t) over [0, 2pi] inclusive, truncated.
/// Density is uneven by design; no stroke continuity is guaranteed.
pub fn ellipse(surface: &mut impl Surface, center: Point, rx: i32, ry: i32, color: Color) {
    for i in 0..CURVE_SAMPLES {
        let t = i as f32 / (CURVE_SAMPLES - 1) as f32 * std::f32::consts::TAU;
        let x = center.x as f32 + rx as f32 * t.cos();
        let y = center.y as f32 + ry as f32 * t.sin();
        surface.set_pixel(x as i32, y as i32, color);
    }
}

/// Cubic Bézier by sampling the Bernstein polynomial at 100 fixed t values
/// in [0, 1] inclusive, truncated. Curvature-dependent gaps are accepted.
pub fn bezier(surface: &mut impl Surface, p0: Point, p1: Point, p2: Point, p3: Point, color: Color) {
    for i in 0..CURVE_SAMPLES {
        let t = i as f32 / (CURVE_SAMPLES - 1) as f32;
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;

        let x = b0 * p0.x as f32 + b1 * p1.x as f32 + b2 * p2.x as f32 + b3 * p3.x as f32;
        let y = b0 * p0.y as f32 + b1 * p1.y as f32 + b2 * p2.y as f32 + b3 * p3.y as f32;
        surface.set_pixel(x as i32, y as i32, color);
    }
}
