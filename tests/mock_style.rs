use anyhow::Result;

use prompt_overlay::winstyle::WindowStyle;

/// Window-style double that records every mutation in call order so tests
/// can assert exact sequences against a fake window.
#[derive(Default)]
pub struct MockWindowStyle {
    pub bits: isize,
    pub affinity: u32,
    pub calls: Vec<String>,
    pub fail_affinity: bool,
    pub fail_layered: bool,
}

impl MockWindowStyle {
    pub fn failing_affinity() -> Self {
        Self {
            fail_affinity: true,
            ..Default::default()
        }
    }

    pub fn failing_layered() -> Self {
        Self {
            fail_layered: true,
            ..Default::default()
        }
    }
}

impl WindowStyle for MockWindowStyle {
    fn ex_style(&self) -> isize {
        self.bits
    }

    fn set_ex_style(&mut self, bits: isize) {
        self.bits = bits;
        self.calls.push(format!("set_ex_style({bits:#x})"));
    }

    fn set_layered_alpha(&mut self, alpha: u8) -> Result<()> {
        self.calls.push(format!("set_layered_alpha({alpha})"));
        if self.fail_layered {
            anyhow::bail!("layered attributes rejected");
        }
        Ok(())
    }

    fn display_affinity(&self) -> u32 {
        self.affinity
    }

    fn set_display_affinity(&mut self, affinity: u32) -> Result<()> {
        self.calls.push(format!("set_display_affinity({affinity:#x})"));
        if self.fail_affinity {
            anyhow::bail!("affinity rejected");
        }
        self.affinity = affinity;
        Ok(())
    }
}
