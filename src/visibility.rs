use eframe::egui::{self, pos2, Pos2};

/// Parking spot for the hidden overlay. The window is moved here instead of
/// being made invisible so the event loop keeps pumping and queued hotkey
/// actions (including the one that shows it again) still get drained.
pub const OFFSCREEN_POS: (f32, f32) = (20000.0, 20000.0);

/// The subset of [`egui::Context`] the visibility logic needs, so tests can
/// record the issued viewport commands.
pub trait ViewportCtx {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand);
    fn request_repaint(&self);
}

impl ViewportCtx for egui::Context {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
        egui::Context::send_viewport_cmd(self, cmd);
    }

    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

/// Show or hide the overlay. Showing restores the window to `restore_pos`
/// and raises it so a quick-edit immediately lands in the content area.
pub fn apply_visibility(visible: bool, restore_pos: Pos2, ctx: &impl ViewportCtx) {
    tracing::debug!(visible, "visibility updated");
    if visible {
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(restore_pos));
        ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
        ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
    } else {
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(pos2(
            OFFSCREEN_POS.0,
            OFFSCREEN_POS.1,
        )));
        ctx.send_viewport_cmd(egui::ViewportCommand::Visible(true));
    }
    ctx.request_repaint();
}
