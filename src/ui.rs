//! Toolbar, palette and gesture tracking
//!
//! The UI is drawn with the rasterizer itself: panels and swatches are
//! span fills, button icons are miniature primitives. Hit-testing is plain
//! rectangle containment, one button per tool and per palette color.

use crate::raster::{self, Color, Point, Surface};
use crate::tool::Tool;

const BUTTON_SIZE: i32 = 50;
const BUTTON_PITCH: i32 = 60;
const MARGIN: i32 = 10;
const PANEL_WIDTH: i32 = 70;

const PANEL_COLOR: Color = Color::new(232, 223, 203);
const FRAME_COLOR: Color = Color::new(0, 0, 0);
const HOVER_COLOR: Color = Color::new(100, 160, 210);
const ACTIVE_COLOR: Color = Color::new(30, 90, 200);

/// What clicking a button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectTool(Tool),
    PickColor(Color),
    Clear,
}

/// A clickable button with a screen rectangle and an action
#[derive(Debug, Clone, Copy)]
pub struct Button {
    x: i32,
    y: i32,
    size: i32,
    pub action: Action,
}

impl Button {
    fn new(x: i32, y: i32, action: Action) -> Self {
        Self {
            x,
            y,
            size: BUTTON_SIZE,
            action,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.size && y >= self.y && y < self.y + self.size
    }
}

/// The two side panels: tools down the left edge, palette down the right,
/// canvas clear at the bottom left.
pub struct Toolbar {
    buttons: Vec<Button>,
    window_width: i32,
    window_height: i32,
    hover: Option<usize>,
}

impl Toolbar {
    pub fn new(window_width: u32, window_height: u32, palette: &[[u8; 3]]) -> Self {
        let window_width = window_width as i32;
        let window_height = window_height as i32;
        let mut buttons = Vec::new();

        for (i, tool) in Tool::ALL.iter().enumerate() {
            buttons.push(Button::new(
                MARGIN,
                MARGIN + i as i32 * BUTTON_PITCH,
                Action::SelectTool(*tool),
            ));
        }
        buttons.push(Button::new(
            MARGIN,
            window_height - BUTTON_SIZE - 2 * MARGIN - 30,
            Action::Clear,
        ));

        let swatch_x = window_width - PANEL_WIDTH + MARGIN;
        for (i, c) in palette.iter().enumerate() {
            buttons.push(Button::new(
                swatch_x,
                MARGIN + i as i32 * BUTTON_PITCH,
                Action::PickColor(Color::from(*c)),
            ));
        }

        Self {
            buttons,
            window_width,
            window_height,
            hover: None,
        }
    }

    /// The button action under (x, y), if any
    pub fn hit(&self, x: i32, y: i32) -> Option<Action> {
        self.buttons
            .iter()
            .find(|b| b.contains(x, y))
            .map(|b| b.action)
    }

    /// True if (x, y) falls outside both side panels
    pub fn on_canvas(&self, x: i32, y: i32) -> bool {
        x >= PANEL_WIDTH && x < self.window_width - PANEL_WIDTH && y >= 0 && y < self.window_height
    }

    /// Track the pointer for hover highlighting
    pub fn track_pointer(&mut self, x: i32, y: i32) {
        self.hover = self.buttons.iter().position(|b| b.contains(x, y));
    }

    /// Draw panels, buttons and icons over the frame buffer
    pub fn render(&self, buffer: &mut impl Surface, active_tool: Tool, active_color: Color) {
        raster::fill_rect(
            buffer,
            Point::new(0, 0),
            PANEL_WIDTH,
            self.window_height,
            PANEL_COLOR,
        );
        raster::fill_rect(
            buffer,
            Point::new(self.window_width - PANEL_WIDTH, 0),
            PANEL_WIDTH,
            self.window_height,
            PANEL_COLOR,
        );

        for (i, button) in self.buttons.iter().enumerate() {
            let hovered = self.hover == Some(i);
            match button.action {
                Action::SelectTool(tool) => {
                    let frame = if tool == active_tool {
                        ACTIVE_COLOR
                    } else if hovered {
                        HOVER_COLOR
                    } else {
                        FRAME_COLOR
                    };
                    raster::rect(
                        buffer,
                        Point::new(button.x, button.y),
                        button.size,
                        button.size,
                        frame,
                    );
                    draw_tool_icon(buffer, tool, button, frame);
                },
                Action::Clear => {
                    let frame = if hovered { HOVER_COLOR } else { FRAME_COLOR };
                    raster::rect(
                        buffer,
                        Point::new(button.x, button.y),
                        button.size,
                        button.size,
                        frame,
                    );
                    // An X for "wipe the canvas"
                    let inset = 14;
                    raster::line(
                        buffer,
                        Point::new(button.x + inset, button.y + inset),
                        Point::new(button.x + button.size - inset, button.y + button.size - inset),
                        frame,
                    );
                    raster::line(
                        buffer,
                        Point::new(button.x + button.size - inset, button.y + inset),
                        Point::new(button.x + inset, button.y + button.size - inset),
                        frame,
                    );
                },
                Action::PickColor(color) => {
                    raster::fill_rect(
                        buffer,
                        Point::new(button.x, button.y),
                        button.size,
                        button.size,
                        color,
                    );
                    if color == active_color {
                        raster::rect(
                            buffer,
                            Point::new(button.x - 2, button.y - 2),
                            button.size + 4,
                            button.size + 4,
                            ACTIVE_COLOR,
                        );
                    } else if hovered {
                        raster::rect(
                            buffer,
                            Point::new(button.x, button.y),
                            button.size,
                            button.size,
                            HOVER_COLOR,
                        );
                    }
                },
            }
        }
    }
}

/// Miniature primitive inside the button rectangle, drawn by the same
/// routines the tool will invoke on the canvas
fn draw_tool_icon(buffer: &mut impl Surface, tool: Tool, button: &Button, color: Color) {
    let inset = 12;
    let lo = Point::new(button.x + inset, button.y + inset);
    let hi = Point::new(
        button.x + button.size - inset,
        button.y + button.size - inset,
    );
    let center = Point::new(button.x + button.size / 2, button.y + button.size / 2);
    let extent = (button.size - 2 * inset) / 2;

    match tool {
        Tool::Line => raster::line(buffer, Point::new(lo.x, hi.y), Point::new(hi.x, lo.y), color),
        Tool::Rect => raster::rect(buffer, lo, hi.x - lo.x, hi.y - lo.y, color),
        Tool::FilledRect => raster::fill_rect(buffer, lo, hi.x - lo.x, hi.y - lo.y, color),
        Tool::Circle => raster::circle(buffer, center, extent, color),
        Tool::FilledCircle => raster::fill_circle(buffer, center, extent, color),
        Tool::Ellipse => raster::ellipse(buffer, center, extent + 4, extent - 3, color),
        Tool::Triangle => raster::triangle(
            buffer,
            Point::new(center.x, lo.y),
            Point::new(hi.x, hi.y),
            Point::new(lo.x, hi.y),
            color,
        ),
        Tool::Curve => raster::bezier(
            buffer,
            Point::new(lo.x, hi.y),
            Point::new(lo.x + (hi.x - lo.x) / 3, lo.y - 4),
            Point::new(lo.x + 2 * (hi.x - lo.x) / 3, hi.y + 4),
            Point::new(hi.x, lo.y),
            color,
        ),
    }
}

/// Press-drag-release tracker. One gesture commits exactly one
/// rasterization; the pending endpoints drive the live preview.
#[derive(Debug, Default)]
pub struct Gesture {
    start: Option<Point>,
    current: Point,
}

impl Gesture {
    pub fn begin(&mut self, x: i32, y: i32) {
        self.start = Some(Point::new(x, y));
        self.current = Point::new(x, y);
    }

    pub fn update(&mut self, x: i32, y: i32) {
        if self.start.is_some() {
            self.current = Point::new(x, y);
        }
    }

    /// End the gesture, yielding its (press, release) endpoints
    pub fn finish(&mut self, x: i32, y: i32) -> Option<(Point, Point)> {
        self.update(x, y);
        self.start.take().map(|s| (s, self.current))
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Endpoints so far, while the pointer is still down
    pub fn pending(&self) -> Option<(Point, Point)> {
        self.start.map(|s| (s, self.current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::PixelBuffer;

    fn toolbar() -> Toolbar {
        Toolbar::new(1020, 650, &crate::config::Config::default().palette)
    }

    #[test]
    fn test_hit_first_tool_button() {
        let bar = toolbar();
        assert_eq!(bar.hit(35, 35), Some(Action::SelectTool(Tool::Line)));
        assert_eq!(bar.hit(35, 95), Some(Action::SelectTool(Tool::Rect)));
    }

    #[test]
    fn test_hit_palette_swatch() {
        let bar = toolbar();
        // First swatch sits at the top of the right panel
        assert_eq!(
            bar.hit(985, 35),
            Some(Action::PickColor(Color::new(230, 0, 0)))
        );
    }

    #[test]
    fn test_hit_clear_button() {
        let bar = toolbar();
        assert_eq!(bar.hit(35, 650 - 70 - 30 + 5), Some(Action::Clear));
    }

    #[test]
    fn test_canvas_area_misses_buttons() {
        let bar = toolbar();
        assert_eq!(bar.hit(500, 300), None);
        assert!(bar.on_canvas(500, 300));
        assert!(!bar.on_canvas(35, 300));
        assert!(!bar.on_canvas(1000, 300));
    }

    #[test]
    fn test_render_swatch_shows_its_color() {
        let bar = toolbar();
        let mut buffer = PixelBuffer::with_size(1020, 650);
        bar.render(&mut buffer, Tool::Line, Color::BLACK);
        // Center of the first swatch
        assert_eq!(buffer.get_pixel(985, 35), Some(Color::new(230, 0, 0)));
        // Panel fill between buttons
        assert_eq!(buffer.get_pixel(5, 325), Some(PANEL_COLOR));
    }

    #[test]
    fn test_gesture_lifecycle() {
        let mut g = Gesture::default();
        assert!(g.pending().is_none());

        g.begin(100, 100);
        g.update(140, 120);
        assert_eq!(
            g.pending(),
            Some((Point::new(100, 100), Point::new(140, 120)))
        );

        let (start, end) = g.finish(150, 130).unwrap();
        assert_eq!(start, Point::new(100, 100));
        assert_eq!(end, Point::new(150, 130));
        assert!(g.pending().is_none());
        assert!(g.finish(0, 0).is_none());
    }

    #[test]
    fn test_gesture_cancel_discards_start() {
        let mut g = Gesture::default();
        g.begin(10, 10);
        g.cancel();
        assert!(g.finish(20, 20).is_none());
    }

    #[test]
    fn test_update_without_begin_is_inert() {
        let mut g = Gesture::default();
        g.update(50, 50);
        assert!(g.pending().is_none());
    }
}
