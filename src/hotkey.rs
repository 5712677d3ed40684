//! Hotkey combinations and the actions they map to. Parsing is pure so the
//! tables can be exercised without the OS registration path in
//! [`crate::global_hotkey`].

/// Win32 hotkey modifier flags (`MOD_*`).
pub const MOD_ALT: u32 = 0x0001;
pub const MOD_CONTROL: u32 = 0x0002;
pub const MOD_SHIFT: u32 = 0x0004;
pub const MOD_WIN: u32 = 0x0008;

/// A command produced by the hotkey listener thread and consumed exactly once
/// by the window thread, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HotkeyAction {
    ToggleVisibility,
    ToggleLock,
    QuickEdit,
    EmergencyUnlock,
    IncreaseFont,
    DecreaseFont,
    ResetFont,
    CycleOpacity,
    /// col/row: 0=left/top, 1=center, 2=right/bottom.
    PositionPreset(u8, u8),
    Nudge(f32, f32),
    ToggleSettings,
    ResetGeometry,
    CopyAll,
    PasteReplace,
    ClearText,
    Quit,
    Panic,
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub combo: String,
    pub action: HotkeyAction,
}

impl Binding {
    fn new(combo: &str, action: HotkeyAction) -> Self {
        Self {
            combo: combo.to_string(),
            action,
        }
    }
}

/// The default catalogue. Position presets sit on the numpad and font size on
/// the page keys so the combinations work on any keyboard layout.
pub fn default_bindings() -> Vec<Binding> {
    use HotkeyAction::*;
    let nd = crate::geometry::NUDGE_STEP;
    vec![
        Binding::new("Ctrl+Shift+H", ToggleVisibility),
        Binding::new("Ctrl+Shift+L", ToggleLock),
        Binding::new("Ctrl+Shift+E", QuickEdit),
        Binding::new("Escape", EmergencyUnlock),
        Binding::new("Ctrl+Shift+PageUp", IncreaseFont),
        Binding::new("Ctrl+Shift+PageDown", DecreaseFont),
        Binding::new("Ctrl+Shift+Home", ResetFont),
        Binding::new("Ctrl+Shift+O", CycleOpacity),
        Binding::new("Ctrl+Alt+Numpad1", PositionPreset(0, 2)),
        Binding::new("Ctrl+Alt+Numpad2", PositionPreset(1, 2)),
        Binding::new("Ctrl+Alt+Numpad3", PositionPreset(2, 2)),
        Binding::new("Ctrl+Alt+Numpad4", PositionPreset(0, 1)),
        Binding::new("Ctrl+Alt+Numpad5", PositionPreset(1, 1)),
        Binding::new("Ctrl+Alt+Numpad6", PositionPreset(2, 1)),
        Binding::new("Ctrl+Alt+Numpad7", PositionPreset(0, 0)),
        Binding::new("Ctrl+Alt+Numpad8", PositionPreset(1, 0)),
        Binding::new("Ctrl+Alt+Numpad9", PositionPreset(2, 0)),
        Binding::new("Ctrl+Shift+Up", Nudge(0.0, -nd)),
        Binding::new("Ctrl+Shift+Down", Nudge(0.0, nd)),
        Binding::new("Ctrl+Shift+Left", Nudge(-nd, 0.0)),
        Binding::new("Ctrl+Shift+Right", Nudge(nd, 0.0)),
        Binding::new("Ctrl+Shift+S", ToggleSettings),
        Binding::new("Ctrl+Shift+R", ResetGeometry),
        Binding::new("Ctrl+Shift+C", CopyAll),
        Binding::new("Ctrl+Shift+V", PasteReplace),
        Binding::new("Ctrl+Shift+Delete", ClearText),
        Binding::new("Ctrl+Shift+Q", Quit),
        Binding::new("Ctrl+Shift+F1", Panic),
    ]
}

/// Whether a combination may only be registered while the click-through lock
/// is engaged. `RegisterHotKey` suppresses the keystroke for every other
/// application, so an unmodified key like the bare emergency-unlock Escape
/// must not be claimed system-wide for the whole session.
pub fn is_lock_gated(combo: &str) -> bool {
    matches!(parse_key_combo(combo), Some((0, _)))
}

/// Parse a combination like "Ctrl+Shift+H" into Win32 modifier flags and a
/// virtual-key code. Returns `None` when no key (or an unknown key) is named.
pub fn parse_key_combo(combo: &str) -> Option<(u32, u32)> {
    let mut modifiers = 0u32;
    let mut vk: Option<u32> = None;

    for part in combo.split('+') {
        match part.trim().to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= MOD_CONTROL,
            "shift" => modifiers |= MOD_SHIFT,
            "alt" => modifiers |= MOD_ALT,
            "win" => modifiers |= MOD_WIN,
            "" => {}
            key => {
                vk = virtual_key_from_string(key);
                vk?;
            }
        }
    }

    vk.map(|vk| (modifiers, vk))
}

pub fn virtual_key_from_string(key: &str) -> Option<u32> {
    match key.to_uppercase().as_str() {
        "F1" => Some(0x70),
        "F2" => Some(0x71),
        "F3" => Some(0x72),
        "F4" => Some(0x73),
        "F5" => Some(0x74),
        "F6" => Some(0x75),
        "F7" => Some(0x76),
        "F8" => Some(0x77),
        "F9" => Some(0x78),
        "F10" => Some(0x79),
        "F11" => Some(0x7A),
        "F12" => Some(0x7B),

        "A" => Some(0x41),
        "B" => Some(0x42),
        "C" => Some(0x43),
        "D" => Some(0x44),
        "E" => Some(0x45),
        "F" => Some(0x46),
        "G" => Some(0x47),
        "H" => Some(0x48),
        "I" => Some(0x49),
        "J" => Some(0x4A),
        "K" => Some(0x4B),
        "L" => Some(0x4C),
        "M" => Some(0x4D),
        "N" => Some(0x4E),
        "O" => Some(0x4F),
        "P" => Some(0x50),
        "Q" => Some(0x51),
        "R" => Some(0x52),
        "S" => Some(0x53),
        "T" => Some(0x54),
        "U" => Some(0x55),
        "V" => Some(0x56),
        "W" => Some(0x57),
        "X" => Some(0x58),
        "Y" => Some(0x59),
        "Z" => Some(0x5A),

        "0" => Some(0x30),
        "1" => Some(0x31),
        "2" => Some(0x32),
        "3" => Some(0x33),
        "4" => Some(0x34),
        "5" => Some(0x35),
        "6" => Some(0x36),
        "7" => Some(0x37),
        "8" => Some(0x38),
        "9" => Some(0x39),

        "NUMPAD0" => Some(0x60),
        "NUMPAD1" => Some(0x61),
        "NUMPAD2" => Some(0x62),
        "NUMPAD3" => Some(0x63),
        "NUMPAD4" => Some(0x64),
        "NUMPAD5" => Some(0x65),
        "NUMPAD6" => Some(0x66),
        "NUMPAD7" => Some(0x67),
        "NUMPAD8" => Some(0x68),
        "NUMPAD9" => Some(0x69),

        "UP" => Some(0x26),
        "DOWN" => Some(0x28),
        "LEFT" => Some(0x25),
        "RIGHT" => Some(0x27),

        "BACKSPACE" => Some(0x08),
        "TAB" => Some(0x09),
        "ENTER" => Some(0x0D),
        "PAUSE" => Some(0x13),
        "CAPSLOCK" => Some(0x14),
        "ESCAPE" => Some(0x1B),
        "SPACE" => Some(0x20),
        "PAGEUP" => Some(0x21),
        "PAGEDOWN" => Some(0x22),
        "END" => Some(0x23),
        "HOME" => Some(0x24),
        "INSERT" => Some(0x2D),
        "DELETE" => Some(0x2E),

        _ => None,
    }
}
