use std::path::{Path, PathBuf};

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

use crate::geometry::{MIN_HEIGHT, MIN_WIDTH};

pub const OPACITY_MIN: f32 = 0.5;
pub const OPACITY_MAX: f32 = 1.0;
/// Cycle order for the opacity hotkey; wraps after the last entry.
pub const OPACITY_LEVELS: [f32; 4] = [1.0, 0.85, 0.70, 0.50];

pub const FONT_MIN: f32 = 8.0;
pub const FONT_MAX: f32 = 48.0;
pub const FONT_STEP: f32 = 1.0;

/// The persisted document. Every field carries a default so a partial file
/// merges over the canonical schema; unknown keys are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    #[serde(default = "default_x")]
    pub x: f32,
    #[serde(default = "default_y")]
    pub y: f32,
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default = "default_font_color")]
    pub font_color: String,
    #[serde(default = "default_bg_color")]
    pub bg_color: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub first_run_shown: bool,
    /// Mouse pass-through mode.
    #[serde(default)]
    pub locked: bool,
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_x() -> f32 {
    100.0
}

fn default_y() -> f32 {
    100.0
}

fn default_width() -> f32 {
    400.0
}

fn default_height() -> f32 {
    200.0
}

fn default_opacity() -> f32 {
    0.85
}

fn default_font_family() -> String {
    "Consolas".to_string()
}

fn default_font_size() -> f32 {
    11.0
}

fn default_font_color() -> String {
    "#FFFFFF".to_string()
}

fn default_bg_color() -> String {
    "#2d2d2d".to_string()
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            x: default_x(),
            y: default_y(),
            width: default_width(),
            height: default_height(),
            opacity: default_opacity(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_color: default_font_color(),
            bg_color: default_bg_color(),
            text: String::new(),
            first_run_shown: false,
            locked: false,
            debug_logging: false,
        }
    }
}

impl OverlayConfig {
    /// Load the config, merging stored keys over the defaults. A missing or
    /// corrupt file yields the defaults unchanged; this never fails.
    pub fn load(path: &Path) -> Self {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Self::default();
        }
        let mut config: Self = match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("config at {} is corrupt ({e}); using defaults", path.display());
                return Self::default();
            }
        };
        config.sanitize();
        config
    }

    /// Write the config, creating the containing directory if absent.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Clamp loaded values back into their invariants.
    pub fn sanitize(&mut self) {
        self.opacity = self.opacity.clamp(OPACITY_MIN, OPACITY_MAX);
        self.font_size = self.font_size.clamp(FONT_MIN, FONT_MAX);
        self.width = self.width.max(MIN_WIDTH);
        self.height = self.height.max(MIN_HEIGHT);
    }
}

/// `<config dir>/PromptOverlay/config.json`.
pub fn config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("PromptOverlay")
        .join("config.json")
}

pub fn clamp_font(size: f32) -> f32 {
    size.clamp(FONT_MIN, FONT_MAX)
}

/// Next opacity level after `current`, matching on the nearest list entry so
/// values loaded from disk still cycle predictably.
pub fn next_opacity(current: f32) -> f32 {
    let mut nearest = 0usize;
    let mut best = f32::MAX;
    for (i, level) in OPACITY_LEVELS.iter().enumerate() {
        let d = (level - current).abs();
        if d < best {
            best = d;
            nearest = i;
        }
    }
    OPACITY_LEVELS[(nearest + 1) % OPACITY_LEVELS.len()]
}

/// Parse "#RRGGBB" (case-insensitive, leading '#' optional).
pub fn parse_hex_color(s: &str) -> Option<Color32> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

pub fn color_to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
