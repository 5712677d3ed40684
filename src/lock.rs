use crate::winstyle::{WindowStyle, WS_EX_TRANSPARENT};

/// Click-through lock states. `QuickEdit` is a transient unlock entered only
/// from `Locked`; its presence doubles as the armed focus-lost observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Unlocked,
    Locked,
    QuickEdit,
}

pub struct LockController {
    state: LockState,
}

impl LockController {
    pub fn new(locked: bool) -> Self {
        Self {
            state: if locked {
                LockState::Locked
            } else {
                LockState::Unlocked
            },
        }
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    /// The flag persisted to the config. During quick edit the window is
    /// effectively unlocked, so a crash mid-edit restarts unlocked.
    pub fn persisted_locked(&self) -> bool {
        self.state == LockState::Locked
    }

    /// Assert the click-through bit for the current state. Used at startup to
    /// restore a saved lock.
    pub fn apply(&self, style: &mut dyn WindowStyle) {
        set_click_through(style, self.state == LockState::Locked);
    }

    /// `Unlocked <-> Locked`. From `QuickEdit` this unlocks and disarms the
    /// observer. Returns the new locked flag.
    pub fn toggle(&mut self, style: &mut dyn WindowStyle) -> bool {
        self.state = match self.state {
            LockState::Unlocked => LockState::Locked,
            LockState::Locked | LockState::QuickEdit => LockState::Unlocked,
        };
        set_click_through(style, self.state == LockState::Locked);
        tracing::debug!(state = ?self.state, "lock toggled");
        self.state == LockState::Locked
    }

    /// Temporarily unlock for editing. Only valid from `Locked`; returns
    /// whether quick-edit mode is active afterwards. Re-invoking while already
    /// in quick edit keeps the single observer armed rather than stacking a
    /// second one.
    pub fn quick_edit(&mut self, style: &mut dyn WindowStyle) -> bool {
        match self.state {
            LockState::Locked => {
                set_click_through(style, false);
                self.state = LockState::QuickEdit;
                true
            }
            LockState::QuickEdit => true,
            LockState::Unlocked => false,
        }
    }

    /// One-shot focus-lost observer. Returns true when the window re-locked.
    pub fn on_focus_lost(&mut self, style: &mut dyn WindowStyle) -> bool {
        if self.state == LockState::QuickEdit {
            set_click_through(style, true);
            self.state = LockState::Locked;
            tracing::debug!("quick edit ended, re-locked");
            true
        } else {
            false
        }
    }

    /// Safety valve: force `Locked | QuickEdit -> Unlocked` unconditionally
    /// and disarm any pending observer. Returns whether anything changed.
    pub fn emergency_unlock(&mut self, style: &mut dyn WindowStyle) -> bool {
        if self.state == LockState::Unlocked {
            return false;
        }
        set_click_through(style, false);
        self.state = LockState::Unlocked;
        tracing::info!("emergency unlock");
        true
    }
}

fn set_click_through(style: &mut dyn WindowStyle, enabled: bool) {
    let ex = style.ex_style();
    let bits = if enabled {
        ex | WS_EX_TRANSPARENT
    } else {
        ex & !WS_EX_TRANSPARENT
    };
    if bits != ex {
        style.set_ex_style(bits);
    }
}
