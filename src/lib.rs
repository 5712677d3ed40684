pub mod capture;
pub mod content;
pub mod geometry;
pub mod global_hotkey;
pub mod gui;
pub mod hotkey;
pub mod lock;
pub mod logging;
pub mod settings;
pub mod updater;
pub mod visibility;
pub mod win_util;
pub mod winstyle;
