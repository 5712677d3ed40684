use std::fmt;

use crate::winstyle::{WindowStyle, WDA_EXCLUDEFROMCAPTURE, WS_EX_LAYERED, WS_EX_TOOLWINDOW};

/// First Windows 10 build that accepts `WDA_EXCLUDEFROMCAPTURE`.
pub const MIN_SUPPORTED_BUILD: u32 = 19041;

/// Snapshot of the capture-related window attributes. Derivable from the
/// window's current style at any time; never cached as independent truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffinityState {
    pub excluded: bool,
    pub layered_attributes_applied: bool,
}

#[derive(Debug)]
pub enum CaptureError {
    /// The running OS does not support capture exclusion at all.
    Unsupported(String),
    /// An individual OS call failed; the window keeps running capturable.
    Platform(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Unsupported(msg) => write!(f, "capture exclusion unsupported: {msg}"),
            CaptureError::Platform(msg) => write!(f, "capture exclusion failed: {msg}"),
        }
    }
}

impl std::error::Error for CaptureError {}

/// Whether the running OS supports excluding a window from capture.
pub fn capability_available() -> bool {
    #[cfg(target_os = "windows")]
    {
        match windows_version() {
            Some((major, build)) => major > 10 || (major == 10 && build >= MIN_SUPPORTED_BUILD),
            None => false,
        }
    }
    #[cfg(not(target_os = "windows"))]
    {
        false
    }
}

#[cfg(target_os = "windows")]
fn windows_version() -> Option<(u32, u32)> {
    use windows::Win32::System::SystemInformation::OSVERSIONINFOW;

    // RtlGetVersion reports the real build number even under compatibility
    // shims, unlike GetVersionExW.
    #[link(name = "ntdll")]
    extern "system" {
        fn RtlGetVersion(info: *mut OSVERSIONINFOW) -> i32;
    }

    let mut info = OSVERSIONINFOW {
        dwOSVersionInfoSize: std::mem::size_of::<OSVERSIONINFOW>() as u32,
        ..Default::default()
    };
    let status = unsafe { RtlGetVersion(&mut info) };
    (status == 0).then_some((info.dwMajorVersion, info.dwBuildNumber))
}

/// Put the window on the layered-alpha path: read the extended style bits,
/// OR in `WS_EX_LAYERED`, write the style back, then set the layered
/// attributes with full alpha (`LWA_ALPHA` mode). Returns whether the
/// attribute call succeeded.
///
/// This is the first half of the exclusion sequence, but it also stands on
/// its own: opacity rides on `SetLayeredWindowAttributes`, which fails on a
/// non-layered window, so this must run even when capture exclusion itself
/// is unavailable.
pub fn prepare_layered(style: &mut dyn WindowStyle) -> bool {
    let ex = style.ex_style();
    style.set_ex_style(ex | WS_EX_LAYERED);

    match style.set_layered_alpha(u8::MAX) {
        Ok(()) => true,
        Err(e) => {
            // Some platforms tolerate this as a no-op; keep going.
            tracing::warn!("SetLayeredWindowAttributes failed: {e}");
            false
        }
    }
}

/// Mark the window as excluded from screen capture.
///
/// The steps run in a fixed order; reordering them reintroduces a black
/// rectangle in compositor-based capture on some backends:
///
/// 1. read the extended style bits,
/// 2. OR in `WS_EX_LAYERED` and write the style back,
/// 3. set the layered attributes with full alpha (`LWA_ALPHA` mode),
/// 4. set the display affinity to exclude-from-capture.
///
/// Failures in steps 1-3 are logged and the sequence continues; a failure in
/// step 4 is returned so the caller can surface a one-time warning. Applying
/// the sequence twice only re-asserts the same bits.
pub fn apply_capture_exclusion(style: &mut dyn WindowStyle) -> Result<AffinityState, CaptureError> {
    let layered_attributes_applied = prepare_layered(style);

    style
        .set_display_affinity(WDA_EXCLUDEFROMCAPTURE)
        .map_err(|e| CaptureError::Platform(format!("SetWindowDisplayAffinity: {e}")))?;

    Ok(AffinityState {
        excluded: true,
        layered_attributes_applied,
    })
}

/// Re-derive the affinity state from the window's current attributes.
pub fn affinity_state(style: &dyn WindowStyle) -> AffinityState {
    AffinityState {
        excluded: style.display_affinity() == WDA_EXCLUDEFROMCAPTURE,
        layered_attributes_applied: style.ex_style() & WS_EX_LAYERED != 0,
    }
}

/// Hide the window from the taskbar and task switcher. Best-effort, applied
/// after the exclusion sequence.
pub fn hide_from_task_switcher(style: &mut dyn WindowStyle) {
    let ex = style.ex_style();
    style.set_ex_style(ex | WS_EX_TOOLWINDOW);
}
