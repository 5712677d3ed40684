#[cfg(target_os = "windows")]
use raw_window_handle::{HasWindowHandle, RawWindowHandle};
#[cfg(target_os = "windows")]
use windows::Win32::Foundation::HWND;

use crate::winstyle::WindowStyle;

/// Extract the HWND from an eframe [`Frame`](eframe::Frame). The toolkit's
/// window handle is resolved through `raw-window-handle`; it is not assumed
/// to be anything other than the top-level handle the display-affinity API
/// needs, which is what eframe hands out for its viewport.
#[cfg(target_os = "windows")]
pub fn get_hwnd(frame: &eframe::Frame) -> Option<HWND> {
    frame.window_handle().ok().and_then(|wh| match wh.as_raw() {
        RawWindowHandle::Win32(handle) => {
            Some(HWND(handle.hwnd.get() as *mut core::ffi::c_void))
        }
        _ => None,
    })
}

/// Style access for the frame's window: the Win32 implementation on Windows,
/// an in-memory stub elsewhere so lock state still behaves.
pub fn window_style(frame: &eframe::Frame) -> Option<Box<dyn WindowStyle>> {
    #[cfg(target_os = "windows")]
    {
        get_hwnd(frame).map(|hwnd| {
            Box::new(crate::winstyle::Win32WindowStyle::new(hwnd)) as Box<dyn WindowStyle>
        })
    }
    #[cfg(not(target_os = "windows"))]
    {
        let _ = frame;
        Some(Box::<crate::winstyle::StubWindowStyle>::default())
    }
}
