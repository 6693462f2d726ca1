// Allow unused code for designed-but-not-yet-used APIs
// Remove these as the codebase matures
#![allow(dead_code)]

mod config;
mod display;
mod raster;
mod tool;
mod ui;

use config::Config;
use display::{Display, InputEvent, MouseButtonKind, PixelBuffer, RenderTarget};
use raster::Color;
use sdl2::keyboard::Keycode;
use tool::{Tool, ToolState};
use ui::{Action, Gesture, Toolbar};

const CONFIG_PATH: &str = "easel.json";

/// Apply command line overrides to the loaded configuration
fn parse_args(config: &mut Config) {
    let args: Vec<String> = std::env::args().collect();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => config.vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        config.width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        config.height = h;
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1280x720)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            config.width = w;
                            config.height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: easel [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --width W, -w W       Set window width");
                println!("  --height H, -h H      Set window height");
                println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1280x720)");
                println!("  --no-vsync            Disable VSync");
                println!("  --help                Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }
}

/// Keyboard tool shortcuts: 1-8 mirror the toolbar column top to bottom
fn tool_for_key(key: Keycode) -> Option<Tool> {
    let idx = match key {
        Keycode::Num1 => 0,
        Keycode::Num2 => 1,
        Keycode::Num3 => 2,
        Keycode::Num4 => 3,
        Keycode::Num5 => 4,
        Keycode::Num6 => 5,
        Keycode::Num7 => 6,
        Keycode::Num8 => 7,
        _ => return None,
    };
    Some(Tool::ALL[idx])
}

fn main() -> Result<(), String> {
    let mut config = Config::load(CONFIG_PATH).unwrap_or_default();
    parse_args(&mut config);

    let (mut display, texture_creator) =
        Display::with_options("easel", config.width, config.height, config.vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, config.width, config.height)?;

    let background = Color::from(config.background);
    // Canvas holds committed drawing only; frame gets toolbar and preview
    // composited over a copy of it every pass
    let mut canvas = PixelBuffer::with_size(config.width, config.height);
    let mut frame = PixelBuffer::with_size(config.width, config.height);
    canvas.clear(background);

    let mut toolbar = Toolbar::new(config.width, config.height, &config.palette);
    let mut state = ToolState::default();
    let mut gesture = Gesture::default();

    println!("=== easel ===");
    println!("Resolution: {}x{}", config.width, config.height);
    println!("Controls:");
    println!("  Drag on the canvas to draw with the active tool");
    println!("  Left column  - Shape tools (keys 1-8)");
    println!("  Right column - Ink colors");
    println!("  C            - Clear canvas");
    println!("  Escape       - Quit");

    'main: loop {
        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,

                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::C => {
                        canvas.clear(background);
                        println!("Canvas cleared");
                    },
                    key => {
                        if let Some(t) = tool_for_key(key) {
                            state.tool = t;
                            println!("Tool: {}", t.label());
                        }
                    },
                },

                InputEvent::MouseMove { x, y } => {
                    toolbar.track_pointer(x, y);
                    gesture.update(x, y);
                },

                InputEvent::MouseDown { x, y, button } => match button {
                    MouseButtonKind::Left => match toolbar.hit(x, y) {
                        Some(Action::SelectTool(t)) => {
                            state.tool = t;
                            println!("Tool: {}", t.label());
                        },
                        Some(Action::PickColor(c)) => state.color = c,
                        Some(Action::Clear) => canvas.clear(background),
                        None => {
                            if toolbar.on_canvas(x, y) {
                                gesture.begin(x, y);
                            }
                        },
                    },
                    // Right button abandons the pending gesture
                    _ => gesture.cancel(),
                },

                InputEvent::MouseUp { x, y, button } => {
                    if button == MouseButtonKind::Left {
                        // One rasterization per completed gesture
                        if let Some((start, end)) = gesture.finish(x, y) {
                            state
                                .tool
                                .primitive(start, end)
                                .rasterize(&mut canvas, state.color);
                        }
                    }
                },
            }
        }

        frame.copy_from(&canvas);
        // Rubber-band preview of the pending shape, never committed
        if let Some((start, end)) = gesture.pending() {
            state
                .tool
                .primitive(start, end)
                .rasterize(&mut frame, state.color);
        }
        toolbar.render(&mut frame, state.tool, state.color);

        display.present(&mut target, &frame)?;
    }

    Ok(())
}
