use crate::display::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_vsync() -> bool {
    true
}

/// Application configuration: window geometry, presentation, background
/// and the swatch palette. Stored as JSON next to the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_vsync")]
    pub vsync: bool,
    pub background: [u8; 3],
    pub palette: Vec<[u8; 3]>,
}

impl Config {
    /// Save configuration to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            vsync: true,
            background: [255, 255, 255],
            palette: vec![
                [230, 0, 0],     // red
                [255, 165, 0],   // orange
                [255, 255, 0],   // yellow
                [0, 255, 0],     // green
                [0, 0, 255],     // blue
                [160, 32, 240],  // purple
                [255, 0, 128],   // pink
                [150, 75, 0],    // brown
                [128, 128, 128], // gray
                [0, 0, 0],       // black
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_has_ten_swatches() {
        let config = Config::default();
        assert_eq!(config.palette.len(), 10);
        assert_eq!(config.background, [255, 255, 255]);
        assert!(config.vsync);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = Config {
            width: 800,
            height: 600,
            vsync: false,
            background: [10, 20, 30],
            palette: vec![[1, 2, 3], [4, 5, 6]],
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width, 800);
        assert_eq!(back.height, 600);
        assert!(!back.vsync);
        assert_eq!(back.palette, config.palette);
    }

    #[test]
    fn test_vsync_defaults_when_missing() {
        let json = r#"{"width":640,"height":480,"background":[0,0,0],"palette":[]}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.vsync);
    }

    #[test]
    fn test_load_missing_file_is_err() {
        assert!(Config::load("/nonexistent/easel.json").is_err());
    }
}
