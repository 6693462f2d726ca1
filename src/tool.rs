//! Tool selection and gesture mapping
//!
//! One enumerated tool mode plus the current color, owned by the main loop
//! and passed into every rasterization dispatch. A completed press-drag-
//! release gesture maps to exactly one primitive.

use crate::raster::{Color, Point, Primitive};

/// The active drawing tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Line,
    Rect,
    FilledRect,
    Circle,
    FilledCircle,
    Ellipse,
    Triangle,
    Curve,
}

/// Vertical drop of the Bézier control points above the gesture chord
const CURVE_LIFT: i32 = 100;

impl Tool {
    pub const ALL: [Tool; 8] = [
        Tool::Line,
        Tool::Rect,
        Tool::FilledRect,
        Tool::Circle,
        Tool::FilledCircle,
        Tool::Ellipse,
        Tool::Triangle,
        Tool::Curve,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Rect => "rectangle",
            Self::FilledRect => "filled rectangle",
            Self::Circle => "circle",
            Self::FilledCircle => "filled circle",
            Self::Ellipse => "ellipse",
            Self::Triangle => "triangle",
            Self::Curve => "curve",
        }
    }

    /// Map a completed gesture (press at `start`, release at `end`) to the
    /// primitive this tool draws.
    pub fn primitive(self, start: Point, end: Point) -> Primitive {
        match self {
            Self::Line => Primitive::Line { p1: start, p2: end },

            Self::Rect | Self::FilledRect => {
                let (origin, width, height) = drag_box(start, end);
                Primitive::Rect {
                    origin,
                    width,
                    height,
                    filled: self == Self::FilledRect,
                }
            },

            Self::Circle | Self::FilledCircle => {
                // The drag is the diameter: centered on the midpoint,
                // radius half the drag length
                let center = Point::new((start.x + end.x) / 2, (start.y + end.y) / 2);
                let dx = (end.x - start.x) as f32;
                let dy = (end.y - start.y) as f32;
                let radius = ((dx * dx + dy * dy).sqrt() / 2.0) as i32;
                Primitive::Circle {
                    center,
                    radius,
                    filled: self == Self::FilledCircle,
                }
            },

            Self::Ellipse => {
                // Inscribed in the drag bounding box
                let (origin, width, height) = drag_box(start, end);
                Primitive::Ellipse {
                    center: Point::new(origin.x + width / 2, origin.y + height / 2),
                    rx: width / 2,
                    ry: height / 2,
                }
            },

            Self::Triangle => {
                // Third vertex mirrors the start across the drag, level
                // with the release point
                let third = Point::new(start.x - (end.x - start.x), end.y);
                Primitive::Polygon {
                    vertices: vec![start, end, third],
                }
            },

            Self::Curve => {
                // Control points at 1/3 and 2/3 of the chord, lifted above
                // the respective endpoints
                let run = end.x - start.x;
                Primitive::Bezier {
                    p0: start,
                    p1: Point::new(start.x + run / 3, start.y - CURVE_LIFT),
                    p2: Point::new(start.x + 2 * run / 3, end.y - CURVE_LIFT),
                    p3: end,
                }
            },
        }
    }
}

/// Bounding box of a drag in (origin, width, height) form
fn drag_box(start: Point, end: Point) -> (Point, i32, i32) {
    let origin = Point::new(start.x.min(end.x), start.y.min(end.y));
    (origin, (end.x - start.x).abs(), (end.y - start.y).abs())
}

/// Current tool mode and ink color, owned by the application loop.
/// Replaces per-tool boolean flags with a single tagged value.
#[derive(Debug, Clone, Copy)]
pub struct ToolState {
    pub tool: Tool,
    pub color: Color,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::Line,
            color: Color::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_gesture_is_identity() {
        let p = Tool::Line.primitive(Point::new(3, 4), Point::new(9, 2));
        assert_eq!(
            p,
            Primitive::Line {
                p1: Point::new(3, 4),
                p2: Point::new(9, 2),
            }
        );
    }

    #[test]
    fn test_rect_gesture_normalizes_drag_direction() {
        // Dragging up-left gives the same box as down-right
        let down_right = Tool::Rect.primitive(Point::new(10, 20), Point::new(40, 50));
        let up_left = Tool::Rect.primitive(Point::new(40, 50), Point::new(10, 20));
        assert_eq!(down_right, up_left);
        assert_eq!(
            down_right,
            Primitive::Rect {
                origin: Point::new(10, 20),
                width: 30,
                height: 30,
                filled: false,
            }
        );
    }

    #[test]
    fn test_filled_variants_set_flag() {
        let r = Tool::FilledRect.primitive(Point::new(0, 0), Point::new(4, 4));
        assert!(matches!(r, Primitive::Rect { filled: true, .. }));
        let c = Tool::FilledCircle.primitive(Point::new(0, 0), Point::new(10, 0));
        assert!(matches!(c, Primitive::Circle { filled: true, .. }));
    }

    #[test]
    fn test_circle_gesture_drag_is_diameter() {
        let p = Tool::Circle.primitive(Point::new(10, 30), Point::new(30, 30));
        assert_eq!(
            p,
            Primitive::Circle {
                center: Point::new(20, 30),
                radius: 10,
                filled: false,
            }
        );
    }

    #[test]
    fn test_circle_gesture_degenerate_click() {
        // A click without a drag degenerates to radius 0 (single pixel)
        let p = Tool::FilledCircle.primitive(Point::new(7, 7), Point::new(7, 7));
        assert_eq!(
            p,
            Primitive::Circle {
                center: Point::new(7, 7),
                radius: 0,
                filled: true,
            }
        );
    }

    #[test]
    fn test_ellipse_gesture_inscribed_in_box() {
        let p = Tool::Ellipse.primitive(Point::new(10, 10), Point::new(50, 30));
        assert_eq!(
            p,
            Primitive::Ellipse {
                center: Point::new(30, 20),
                rx: 20,
                ry: 10,
            }
        );
    }

    #[test]
    fn test_triangle_gesture_mirrors_start() {
        let p = Tool::Triangle.primitive(Point::new(20, 10), Point::new(30, 40));
        assert_eq!(
            p,
            Primitive::Polygon {
                vertices: vec![
                    Point::new(20, 10),
                    Point::new(30, 40),
                    Point::new(10, 40),
                ],
            }
        );
    }

    #[test]
    fn test_curve_gesture_lifts_control_points() {
        let p = Tool::Curve.primitive(Point::new(0, 200), Point::new(90, 200));
        assert_eq!(
            p,
            Primitive::Bezier {
                p0: Point::new(0, 200),
                p1: Point::new(30, 100),
                p2: Point::new(60, 100),
                p3: Point::new(90, 200),
            }
        );
    }
}
