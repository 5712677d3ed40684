use anyhow::Result;

// Extended window style bits (GWL_EXSTYLE).
pub const WS_EX_TRANSPARENT: isize = 0x0000_0020;
pub const WS_EX_TOOLWINDOW: isize = 0x0000_0080;
pub const WS_EX_LAYERED: isize = 0x0008_0000;

// SetWindowDisplayAffinity values.
pub const WDA_NONE: u32 = 0x0000_0000;
pub const WDA_EXCLUDEFROMCAPTURE: u32 = 0x0000_0011;

/// Low-level window attribute access used by the capture, lock and opacity
/// code. Keeping this behind a trait lets tests record the exact sequence of
/// mutations without a real window.
pub trait WindowStyle {
    fn ex_style(&self) -> isize;
    fn set_ex_style(&mut self, bits: isize);
    /// `SetLayeredWindowAttributes` with `LWA_ALPHA`. This selects the
    /// OS-managed alpha path; the per-pixel `UpdateLayeredWindow` path must
    /// never be used here because it breaks the display-affinity API.
    fn set_layered_alpha(&mut self, alpha: u8) -> Result<()>;
    fn display_affinity(&self) -> u32;
    fn set_display_affinity(&mut self, affinity: u32) -> Result<()>;
}

#[cfg(target_os = "windows")]
pub struct Win32WindowStyle {
    hwnd: windows::Win32::Foundation::HWND,
}

#[cfg(target_os = "windows")]
impl Win32WindowStyle {
    pub fn new(hwnd: windows::Win32::Foundation::HWND) -> Self {
        Self { hwnd }
    }
}

#[cfg(target_os = "windows")]
impl WindowStyle for Win32WindowStyle {
    fn ex_style(&self) -> isize {
        use windows::Win32::UI::WindowsAndMessaging::{GetWindowLongPtrW, GWL_EXSTYLE};
        unsafe { GetWindowLongPtrW(self.hwnd, GWL_EXSTYLE) }
    }

    fn set_ex_style(&mut self, bits: isize) {
        use windows::Win32::UI::WindowsAndMessaging::{SetWindowLongPtrW, GWL_EXSTYLE};
        unsafe {
            SetWindowLongPtrW(self.hwnd, GWL_EXSTYLE, bits);
        }
    }

    fn set_layered_alpha(&mut self, alpha: u8) -> Result<()> {
        use windows::Win32::Foundation::COLORREF;
        use windows::Win32::UI::WindowsAndMessaging::{SetLayeredWindowAttributes, LWA_ALPHA};
        unsafe {
            SetLayeredWindowAttributes(self.hwnd, COLORREF(0), alpha, LWA_ALPHA)?;
        }
        Ok(())
    }

    fn display_affinity(&self) -> u32 {
        use windows::Win32::UI::WindowsAndMessaging::GetWindowDisplayAffinity;
        let mut affinity = WDA_NONE;
        unsafe {
            if GetWindowDisplayAffinity(self.hwnd, &mut affinity).is_err() {
                affinity = WDA_NONE;
            }
        }
        affinity
    }

    fn set_display_affinity(&mut self, affinity: u32) -> Result<()> {
        use windows::Win32::UI::WindowsAndMessaging::{
            SetWindowDisplayAffinity, WINDOW_DISPLAY_AFFINITY,
        };
        unsafe {
            SetWindowDisplayAffinity(self.hwnd, WINDOW_DISPLAY_AFFINITY(affinity))?;
        }
        Ok(())
    }
}

/// In-memory stand-in used on platforms without the Win32 style APIs. Style
/// bits are tracked so lock state behaves consistently; display affinity is
/// reported as unavailable.
#[cfg(not(target_os = "windows"))]
#[derive(Default)]
pub struct StubWindowStyle {
    bits: isize,
}

#[cfg(not(target_os = "windows"))]
impl WindowStyle for StubWindowStyle {
    fn ex_style(&self) -> isize {
        self.bits
    }

    fn set_ex_style(&mut self, bits: isize) {
        self.bits = bits;
    }

    fn set_layered_alpha(&mut self, _alpha: u8) -> Result<()> {
        Ok(())
    }

    fn display_affinity(&self) -> u32 {
        WDA_NONE
    }

    fn set_display_affinity(&mut self, _affinity: u32) -> Result<()> {
        Err(anyhow::anyhow!(
            "display affinity is not available on this platform"
        ))
    }
}
