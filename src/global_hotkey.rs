//! Global hotkey registration and the listener thread.
//!
//! The listener runs on its own thread because the egui event loop is not
//! thread-safe for direct mutation: every hotkey only enqueues a
//! [`HotkeyAction`] onto the channel and the window thread drains it in FIFO
//! order between frames.
//!
//! `RegisterHotKey` suppresses the registered keystroke for every other
//! application, so unmodified combinations (the bare emergency-unlock key)
//! are registered only while the click-through lock is engaged and released
//! again on unlock, driven over the control channel.

use std::sync::mpsc::{self, Sender};

#[cfg(target_os = "windows")]
use crate::hotkey::{is_lock_gated, parse_key_combo};
use crate::hotkey::{Binding, HotkeyAction};

enum HotkeyControl {
    LockEngaged(bool),
}

/// Window-thread handle to the listener. Dropping it ends the listener loop.
pub struct HotkeyHandle {
    tx: Sender<HotkeyControl>,
}

impl HotkeyHandle {
    /// Register or release the lock-gated combinations. Safe to call
    /// redundantly; the listener ignores no-op transitions.
    pub fn set_lock_engaged(&self, engaged: bool) {
        let _ = self.tx.send(HotkeyControl::LockEngaged(engaged));
    }
}

/// Register `bindings` and forward matches to `tx` until the receiving side
/// goes away. A combination already claimed by another process is logged and
/// skipped; the remaining registrations proceed.
pub fn start(bindings: Vec<Binding>, tx: Sender<HotkeyAction>) -> HotkeyHandle {
    let (control_tx, control_rx) = mpsc::channel();
    #[cfg(target_os = "windows")]
    {
        if let Err(e) = std::thread::Builder::new()
            .name("hotkey-listener".into())
            .spawn(move || listen(bindings, tx, control_rx))
        {
            tracing::error!("failed to spawn hotkey listener thread: {e}");
        }
    }
    #[cfg(not(target_os = "windows"))]
    {
        let _ = (bindings, tx, control_rx);
        tracing::warn!("global hotkeys are not available on this platform");
    }
    HotkeyHandle { tx: control_tx }
}

#[cfg(target_os = "windows")]
struct Slot {
    id: i32,
    modifiers: u32,
    vk: u32,
    action: HotkeyAction,
    combo: String,
    lock_gated: bool,
    registered: bool,
}

#[cfg(target_os = "windows")]
fn listen(
    bindings: Vec<Binding>,
    tx: Sender<HotkeyAction>,
    control: mpsc::Receiver<HotkeyControl>,
) {
    use std::time::Duration;
    use windows::Win32::UI::WindowsAndMessaging::{PeekMessageW, MSG, PM_REMOVE, WM_HOTKEY};

    // RegisterHotKey binds to the calling thread; registration and the
    // message pump must share this thread.
    fn register(slot: &mut Slot) {
        use windows::Win32::UI::Input::KeyboardAndMouse::{RegisterHotKey, HOT_KEY_MODIFIERS};
        if slot.registered {
            return;
        }
        let ok = unsafe {
            RegisterHotKey(None, slot.id, HOT_KEY_MODIFIERS(slot.modifiers), slot.vk).is_ok()
        };
        if ok {
            tracing::info!("registered hotkey '{}' with id {}", slot.combo, slot.id);
            slot.registered = true;
        } else {
            tracing::warn!(
                "failed to register hotkey '{}' (already in use by another application?)",
                slot.combo
            );
        }
    }

    fn unregister(slot: &mut Slot) {
        use windows::Win32::UI::Input::KeyboardAndMouse::UnregisterHotKey;
        if !slot.registered {
            return;
        }
        unsafe {
            let _ = UnregisterHotKey(None, slot.id);
        }
        slot.registered = false;
    }

    let mut slots: Vec<Slot> = Vec::new();
    for (idx, binding) in bindings.iter().enumerate() {
        let Some((modifiers, vk)) = parse_key_combo(&binding.combo) else {
            tracing::warn!("invalid hotkey combination '{}', skipping", binding.combo);
            continue;
        };
        slots.push(Slot {
            id: idx as i32 + 1,
            modifiers,
            vk,
            action: binding.action,
            combo: binding.combo.clone(),
            lock_gated: is_lock_gated(&binding.combo),
            registered: false,
        });
    }

    for slot in slots.iter_mut().filter(|s| !s.lock_gated) {
        register(slot);
    }
    if slots.is_empty() {
        tracing::warn!("no usable hotkey bindings; listener exiting");
        return;
    }

    let mut engaged = false;
    let mut msg = MSG::default();
    'listen: loop {
        loop {
            match control.try_recv() {
                Ok(HotkeyControl::LockEngaged(now)) => {
                    if now != engaged {
                        engaged = now;
                        for slot in slots.iter_mut().filter(|s| s.lock_gated) {
                            if engaged {
                                register(slot);
                            } else {
                                unregister(slot);
                            }
                        }
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'listen,
            }
        }

        while unsafe { PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE) }.as_bool() {
            if msg.message == WM_HOTKEY {
                if let Some(slot) = slots.iter().find(|s| s.id == msg.wParam.0 as i32) {
                    if slot.registered {
                        tracing::debug!(action = ?slot.action, "hotkey fired");
                        if tx.send(slot.action).is_err() {
                            // Window thread is gone; stop listening.
                            break 'listen;
                        }
                    }
                }
            }
        }

        std::thread::sleep(Duration::from_millis(15));
    }

    for slot in slots.iter_mut() {
        unregister(slot);
    }
}
