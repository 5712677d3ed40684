mod settings_panel;

pub use settings_panel::{SettingsOutcome, SettingsPanel, FONT_CHOICES};

use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use eframe::egui::{
    self, pos2, vec2, Align2, Color32, CursorIcon, FontFamily, FontId, Id, Pos2, Rect, RichText,
    Sense, Vec2,
};
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

use crate::capture;
use crate::content::{PromptContent, PLACEHOLDER_TEXT};
use crate::geometry::{self, Edges, Gesture, EDGE_SIZE, GRIP_SIZE};
use crate::global_hotkey::HotkeyHandle;
use crate::hotkey::HotkeyAction;
use crate::lock::{LockController, LockState};
use crate::settings::{self, OverlayConfig, OPACITY_MAX, OPACITY_MIN};
use crate::updater::UpdateNotice;
use crate::visibility::apply_visibility;
use crate::win_util;
use crate::winstyle::WindowStyle;

const TITLE_BAR_HEIGHT: f32 = 24.0;
const BOTTOM_BAR_HEIGHT: f32 = 22.0;
const BAR_BG: Color32 = Color32::from_rgb(0x3c, 0x3c, 0x3c);
const PLACEHOLDER_COLOR: Color32 = Color32::from_rgb(0x80, 0x80, 0x80);
const TOAST_SECONDS: f64 = 6.0;

const FIRST_RUN_NOTICE: &str = "This overlay is excluded from screen capture: \
it stays visible to you but does not appear in screenshots, recordings or \
shared screens. Use it responsibly and only where hidden notes are allowed.";

/// The overlay application. Owns the persisted config, the text content, the
/// lock state machine and the receiving ends of the hotkey and update
/// channels; everything it does to the native window goes through the
/// [`WindowStyle`] handle resolved on the first frame.
pub struct OverlayApp {
    config: OverlayConfig,
    config_path: PathBuf,
    content: PromptContent,
    lock: LockController,
    gesture: Gesture,
    visible: bool,
    show_settings: bool,
    settings_panel: SettingsPanel,
    first_run_pending: bool,
    actions: Receiver<HotkeyAction>,
    updates: Receiver<UpdateNotice>,
    hotkeys: HotkeyHandle,
    toasts: Toasts,
    style: Option<Box<dyn WindowStyle>>,
    startup_applied: bool,
    window_focused: bool,
    pending_focus: bool,
    last_alpha: Option<u8>,
    text_id: Id,
}

impl OverlayApp {
    pub fn new(
        config: OverlayConfig,
        config_path: PathBuf,
        actions: Receiver<HotkeyAction>,
        updates: Receiver<UpdateNotice>,
        hotkeys: HotkeyHandle,
    ) -> Self {
        let content = PromptContent::from_saved(&config.text);
        let lock = LockController::new(config.locked);
        let settings_panel = SettingsPanel::from_config(&config);
        let first_run_pending = !config.first_run_shown;
        Self {
            config,
            config_path,
            content,
            lock,
            gesture: Gesture::Idle,
            visible: true,
            show_settings: false,
            settings_panel,
            first_run_pending,
            actions,
            updates,
            hotkeys,
            toasts: Toasts::new().anchor(Align2::RIGHT_TOP, [10.0, 10.0]),
            style: None,
            startup_applied: false,
            window_focused: true,
            pending_focus: false,
            last_alpha: None,
            text_id: Id::new("prompt_text"),
        }
    }

    /// One-time native window setup, run once a real window exists: capture
    /// exclusion, task-switcher hiding, the saved opacity and the saved lock.
    fn apply_startup_window_state(&mut self) {
        let mut warning = None;
        match self.style.as_deref_mut() {
            Some(style) => {
                if capture::capability_available() {
                    match capture::apply_capture_exclusion(style) {
                        Ok(state) => tracing::info!(?state, "capture exclusion applied"),
                        Err(e) => {
                            tracing::warn!("{e}");
                            warning = Some(
                                "Could not hide the overlay from screen capture; \
                                 it WILL appear in recordings.",
                            );
                        }
                    }
                } else {
                    tracing::warn!("capture exclusion not supported by this OS");
                    // Opacity still rides on the layered-alpha path, so the
                    // first half of the sequence runs regardless.
                    capture::prepare_layered(style);
                    warning = Some(
                        "This OS cannot hide the overlay from screen capture; \
                         it WILL appear in recordings.",
                    );
                }
                capture::hide_from_task_switcher(style);
                self.lock.apply(style);
            }
            None => {
                tracing::warn!("no window style handle; capture exclusion skipped");
                warning = Some(
                    "Could not hide the overlay from screen capture; \
                     it WILL appear in recordings.",
                );
            }
        }
        // The exclusion sequence asserts full alpha; restore the saved level.
        self.apply_alpha(self.config.opacity);
        self.sync_lock_gate();
        if let Some(msg) = warning {
            self.toast(ToastKind::Warning, msg);
        }
    }

    /// Tell the hotkey listener whether the lock-gated combinations (the
    /// bare emergency-unlock key) should currently be claimed. Called after
    /// every lock transition.
    fn sync_lock_gate(&self) {
        self.hotkeys
            .set_lock_engaged(self.lock.state() != LockState::Unlocked);
    }

    fn toast(&mut self, kind: ToastKind, text: &str) {
        self.toasts.add(Toast {
            text: text.into(),
            kind,
            options: ToastOptions::default().duration_in_seconds(TOAST_SECONDS),
        });
    }

    /// Push the opacity to the layered window. Skipped when the alpha byte is
    /// unchanged so live slider preview does not spam the OS.
    fn apply_alpha(&mut self, opacity: f32) {
        let alpha = (opacity.clamp(OPACITY_MIN, OPACITY_MAX) * 255.0).round() as u8;
        if self.last_alpha == Some(alpha) {
            return;
        }
        if let Some(style) = self.style.as_deref_mut() {
            match style.set_layered_alpha(alpha) {
                Ok(()) => self.last_alpha = Some(alpha),
                Err(e) => tracing::debug!("layered alpha update failed: {e}"),
            }
        }
    }

    fn persist(&mut self) {
        self.config.text = self.content.content().to_string();
        self.config.locked = self.lock.persisted_locked();
        if let Err(e) = self.config.save(&self.config_path) {
            // Losing one write is preferable to interrupting the session.
            tracing::warn!("failed to save config: {e}");
        }
    }

    /// Execute every queued hotkey action in arrival order. Runs at the top
    /// of each frame, before input handling.
    pub fn drain_actions(&mut self, ctx: &egui::Context) {
        while let Ok(action) = self.actions.try_recv() {
            self.handle_action(action, ctx);
        }
    }

    pub fn font_size(&self) -> f32 {
        self.config.font_size
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn window_pos(&self) -> Pos2 {
        pos2(self.config.x, self.config.y)
    }

    fn window_size(&self) -> Vec2 {
        vec2(self.config.width, self.config.height)
    }

    /// Screen rect and pointer position in screen coordinates, when both are
    /// known this frame.
    fn pointer_in_screen(&self, ctx: &egui::Context) -> Option<(Rect, Pos2)> {
        let outer = ctx.input(|i| i.viewport().outer_rect)?;
        let local = ctx.input(|i| i.pointer.interact_pos())?;
        Some((outer, outer.min + local.to_vec2()))
    }

    fn move_to(&mut self, pos: Pos2, ctx: &egui::Context) {
        self.config.x = pos.x;
        self.config.y = pos.y;
        if self.visible {
            ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(pos));
        }
        self.persist();
    }

    fn set_font_size(&mut self, size: f32) {
        self.config.font_size = settings::clamp_font(size);
        self.persist();
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.config.opacity = opacity.clamp(OPACITY_MIN, OPACITY_MAX);
        self.apply_alpha(self.config.opacity);
        self.persist();
    }

    fn toggle_visibility(&mut self, ctx: &egui::Context) {
        self.visible = !self.visible;
        apply_visibility(self.visible, self.window_pos(), ctx);
    }

    fn quick_edit(&mut self, ctx: &egui::Context) {
        let entered = match self.style.as_deref_mut() {
            Some(style) => self.lock.quick_edit(style),
            None => {
                // The lock bit cannot be touched without a style handle, but
                // the summon-and-focus half of the action still applies.
                tracing::warn!("no window style handle; quick edit cannot change the lock");
                true
            }
        };
        if !entered {
            return;
        }
        self.sync_lock_gate();
        if !self.visible {
            self.visible = true;
        }
        apply_visibility(true, self.window_pos(), ctx);
        self.pending_focus = true;
        self.persist();
    }

    fn toggle_settings(&mut self, ctx: &egui::Context) {
        if self.show_settings {
            self.cancel_settings();
        } else {
            if !self.visible {
                self.visible = true;
                apply_visibility(true, self.window_pos(), ctx);
            }
            self.settings_panel = SettingsPanel::from_config(&self.config);
            self.show_settings = true;
        }
    }

    fn save_settings(&mut self) {
        let panel = std::mem::replace(
            &mut self.settings_panel,
            SettingsPanel::from_config(&self.config),
        );
        panel.apply_to(&mut self.config);
        self.apply_alpha(self.config.opacity);
        self.show_settings = false;
        self.persist();
    }

    fn cancel_settings(&mut self) {
        self.show_settings = false;
        self.apply_alpha(self.config.opacity);
    }

    fn copy_all(&mut self) {
        let text = self.content.content().to_string();
        if text.is_empty() {
            return;
        }
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(text) {
                    tracing::warn!("clipboard write failed: {e}");
                }
            }
            Err(e) => tracing::warn!("clipboard unavailable: {e}"),
        }
    }

    fn paste_replace(&mut self) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => match clipboard.get_text() {
                Ok(text) => {
                    self.content.replace(text);
                    self.persist();
                }
                Err(e) => tracing::debug!("clipboard read failed: {e}"),
            },
            Err(e) => tracing::warn!("clipboard unavailable: {e}"),
        }
    }

    fn sync_geometry_from_window(&mut self, ctx: &egui::Context) {
        if !self.visible {
            return;
        }
        if let Some(outer) = ctx.input(|i| i.viewport().outer_rect) {
            self.config.x = outer.min.x;
            self.config.y = outer.min.y;
            self.config.width = outer.width().max(geometry::MIN_WIDTH);
            self.config.height = outer.height().max(geometry::MIN_HEIGHT);
        }
    }

    fn quit(&mut self, ctx: &egui::Context) {
        self.sync_geometry_from_window(ctx);
        self.persist();
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    /// Instant exit with a clean exit code so nothing unusual shows up in a
    /// shell history or task log.
    fn panic_quit(&mut self) {
        self.persist();
        tracing::info!("panic exit");
        std::process::exit(0);
    }

    fn handle_action(&mut self, action: HotkeyAction, ctx: &egui::Context) {
        use HotkeyAction::*;
        tracing::debug!(?action, "hotkey action");
        match action {
            ToggleVisibility => self.toggle_visibility(ctx),
            ToggleLock => {
                if let Some(style) = self.style.as_deref_mut() {
                    self.lock.toggle(style);
                }
                self.sync_lock_gate();
                self.persist();
            }
            QuickEdit => self.quick_edit(ctx),
            EmergencyUnlock => {
                let changed = match self.style.as_deref_mut() {
                    Some(style) => self.lock.emergency_unlock(style),
                    None => false,
                };
                if changed {
                    self.sync_lock_gate();
                    self.persist();
                }
            }
            IncreaseFont => self.set_font_size(self.config.font_size + settings::FONT_STEP),
            DecreaseFont => self.set_font_size(self.config.font_size - settings::FONT_STEP),
            ResetFont => self.set_font_size(OverlayConfig::default().font_size),
            CycleOpacity => self.set_opacity(settings::next_opacity(self.config.opacity)),
            PositionPreset(col, row) => {
                let screen = ctx
                    .input(|i| i.viewport().monitor_size)
                    .unwrap_or(vec2(1920.0, 1080.0));
                let pos = geometry::preset_position(screen, self.window_size(), col, row);
                self.move_to(pos, ctx);
            }
            Nudge(dx, dy) => {
                let pos = self.window_pos() + vec2(dx, dy);
                self.move_to(pos, ctx);
            }
            ToggleSettings => self.toggle_settings(ctx),
            ResetGeometry => {
                let d = OverlayConfig::default();
                self.config.width = d.width;
                self.config.height = d.height;
                if self.visible {
                    ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(vec2(
                        d.width, d.height,
                    )));
                }
                self.move_to(pos2(d.x, d.y), ctx);
            }
            CopyAll => self.copy_all(),
            PasteReplace => self.paste_replace(),
            ClearText => {
                self.content.clear();
                self.persist();
            }
            Quit => self.quit(ctx),
            Panic => self.panic_quit(),
        }
    }

    /// Content focus left, either to another widget or to another window.
    /// Empty text reverts to the placeholder and an armed quick edit re-locks.
    fn handle_content_focus_lost(&mut self) {
        self.content.focus_lost();
        let relocked = match self.style.as_deref_mut() {
            Some(style) => self.lock.on_focus_lost(style),
            None => false,
        };
        if relocked {
            tracing::debug!("quick edit observer fired");
            self.sync_lock_gate();
        }
        self.persist();
    }

    // Gestures ------------------------------------------------------------

    fn handle_drag(&mut self, response: &egui::Response, ctx: &egui::Context) {
        if response.drag_started() {
            if let Some((outer, pointer)) = self.pointer_in_screen(ctx) {
                self.gesture = Gesture::start_drag(pointer, outer.min);
            }
        } else if response.dragged() {
            if let Gesture::Dragging(session) = self.gesture {
                if let Some((_, pointer)) = self.pointer_in_screen(ctx) {
                    let pos = geometry::drag_position(&session, pointer);
                    ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(pos));
                }
            }
        }
        if response.drag_stopped() {
            self.end_gesture(ctx);
        }
    }

    /// `fixed_edges` skips hit testing for surfaces with one meaning, like the
    /// grip strip; edge bands fall back to `default_edges` when the pointer
    /// lands just inside the band.
    fn handle_resize(
        &mut self,
        response: &egui::Response,
        default_edges: Edges,
        fixed_edges: bool,
        ctx: &egui::Context,
    ) {
        if response.drag_started() {
            if let Some((outer, pointer)) = self.pointer_in_screen(ctx) {
                let edges = if fixed_edges {
                    default_edges
                } else {
                    let local = pointer - outer.min;
                    let hit = geometry::hit_edges(pos2(local.x, local.y), outer.size());
                    if hit.is_empty() {
                        default_edges
                    } else {
                        hit
                    }
                };
                self.gesture = Gesture::start_resize(pointer, outer, edges);
            }
        } else if response.dragged() {
            if let Gesture::Resizing(session) = self.gesture {
                if let Some((_, pointer)) = self.pointer_in_screen(ctx) {
                    let rect = geometry::resize_rect(&session, pointer);
                    ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(rect.min));
                    ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(rect.size()));
                }
            }
        }
        if response.drag_stopped() {
            self.end_gesture(ctx);
        }
    }

    fn end_gesture(&mut self, ctx: &egui::Context) {
        if self.gesture.is_idle() {
            return;
        }
        self.gesture = Gesture::Idle;
        self.sync_geometry_from_window(ctx);
        self.persist();
    }

    // Drawing -------------------------------------------------------------

    fn effective_appearance(&self) -> (Color32, Color32, FontId) {
        let (family, size, fg_hex, bg_hex) = if self.show_settings {
            (
                self.settings_panel.font_family.as_str(),
                self.settings_panel.font_size,
                None,
                None,
            )
        } else {
            (
                self.config.font_family.as_str(),
                self.config.font_size,
                Some(self.config.font_color.as_str()),
                Some(self.config.bg_color.as_str()),
            )
        };
        let fg = match fg_hex {
            Some(hex) => settings::parse_hex_color(hex).unwrap_or(Color32::WHITE),
            None => self.settings_panel.font_color,
        };
        let bg = match bg_hex {
            Some(hex) => {
                settings::parse_hex_color(hex).unwrap_or(Color32::from_rgb(0x2d, 0x2d, 0x2d))
            }
            None => self.settings_panel.bg_color,
        };
        (bg, fg, FontId::new(size, font_family(family)))
    }

    fn draw_title_bar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, rect: Rect) {
        ui.painter().rect_filled(rect, 0.0, BAR_BG);
        let response = ui
            .interact(rect, Id::new("title_bar"), Sense::drag())
            .on_hover_cursor(CursorIcon::Move);
        self.handle_drag(&response, ctx);

        ui.allocate_ui_at_rect(rect.shrink2(vec2(6.0, 0.0)), |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new("PromptOverlay")
                        .small()
                        .color(Color32::from_gray(0xcc)),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(egui::Button::new(RichText::new("✕").small()).frame(false))
                        .on_hover_text("Close")
                        .clicked()
                    {
                        self.quit(ctx);
                    }
                    if ui
                        .add(egui::Button::new(RichText::new("⚙").small()).frame(false))
                        .on_hover_text("Settings")
                        .clicked()
                    {
                        self.toggle_settings(ctx);
                    }
                });
            });
        });
    }

    fn draw_bottom_bar(&mut self, ui: &mut egui::Ui, rect: Rect) {
        ui.painter().rect_filled(rect, 0.0, BAR_BG);
        ui.allocate_ui_at_rect(rect.shrink2(vec2(6.0, 0.0)), |ui| {
            ui.horizontal_centered(|ui| {
                if ui
                    .add(egui::Button::new(RichText::new("−").small()).frame(false))
                    .on_hover_text("Smaller text")
                    .clicked()
                {
                    self.set_font_size(self.config.font_size - settings::FONT_STEP);
                }
                ui.label(
                    RichText::new(format!("{}pt", self.config.font_size as i32))
                        .small()
                        .color(Color32::from_gray(0x99)),
                );
                if ui
                    .add(egui::Button::new(RichText::new("+").small()).frame(false))
                    .on_hover_text("Larger text")
                    .clicked()
                {
                    self.set_font_size(self.config.font_size + settings::FONT_STEP);
                }
                ui.separator();
                if ui
                    .add(egui::Button::new(RichText::new("clear").small()).frame(false))
                    .on_hover_text("Clear all text")
                    .clicked()
                {
                    self.content.clear();
                    self.persist();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let locked = self.lock.persisted_locked();
                    let label = if locked { "🔒" } else { "🔓" };
                    let color = if locked {
                        Color32::from_rgb(0xe0, 0xa0, 0x30)
                    } else {
                        Color32::from_gray(0x99)
                    };
                    if ui
                        .add(egui::Button::new(RichText::new(label).small().color(color)).frame(false))
                        .on_hover_text("Toggle click-through lock")
                        .clicked()
                    {
                        if let Some(style) = self.style.as_deref_mut() {
                            self.lock.toggle(style);
                        }
                        self.sync_lock_gate();
                        self.persist();
                    }
                });
            });
        });
    }

    fn draw_grip(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, rect: Rect) {
        ui.painter().rect_filled(rect, 0.0, BAR_BG);
        ui.painter().text(
            rect.right_center() - vec2(10.0, 0.0),
            Align2::RIGHT_CENTER,
            "⋰",
            FontId::proportional(9.0),
            Color32::from_gray(0x77),
        );
        let response = ui
            .interact(rect, Id::new("resize_grip"), Sense::drag())
            .on_hover_cursor(CursorIcon::ResizeNwSe);
        self.handle_resize(&response, Edges::SOUTH_EAST, true, ctx);
    }

    fn draw_edge_bands(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, full: Rect) {
        let bands = [
            (
                Rect::from_min_max(full.min, pos2(full.max.x, full.min.y + EDGE_SIZE)),
                Edges::NORTH,
                CursorIcon::ResizeVertical,
            ),
            (
                Rect::from_min_max(pos2(full.min.x, full.max.y - EDGE_SIZE), full.max),
                Edges::SOUTH,
                CursorIcon::ResizeVertical,
            ),
            (
                Rect::from_min_max(full.min, pos2(full.min.x + EDGE_SIZE, full.max.y)),
                Edges::WEST,
                CursorIcon::ResizeHorizontal,
            ),
            (
                Rect::from_min_max(pos2(full.max.x - EDGE_SIZE, full.min.y), full.max),
                Edges::EAST,
                CursorIcon::ResizeHorizontal,
            ),
        ];
        for (i, (rect, edges, cursor)) in bands.into_iter().enumerate() {
            let response = ui
                .interact(rect, Id::new(("resize_edge", i)), Sense::drag())
                .on_hover_cursor(cursor);
            self.handle_resize(&response, edges, false, ctx);
        }
    }

    fn draw_content(&mut self, ui: &mut egui::Ui, rect: Rect, fg: Color32, font_id: FontId) {
        let hint = RichText::new(PLACEHOLDER_TEXT)
            .color(PLACEHOLDER_COLOR)
            .font(font_id.clone());
        ui.allocate_ui_at_rect(rect.shrink(8.0), |ui| {
            let editor = egui::TextEdit::multiline(self.content.buffer_mut())
                .id(self.text_id)
                .font(font_id)
                .text_color(fg)
                .hint_text(hint)
                .frame(false)
                .desired_width(f32::INFINITY);
            let response = ui.add_sized(ui.available_size(), editor);
            if self.pending_focus {
                response.request_focus();
                self.pending_focus = false;
            }
            if response.gained_focus() {
                self.content.focus_gained();
            }
            if response.changed() {
                self.content.sync_after_edit();
                self.persist();
            }
            if response.lost_focus() {
                self.handle_content_focus_lost();
            }
        });
    }

    fn draw_first_run(&mut self, ctx: &egui::Context) {
        egui::Window::new("Before you start")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_max_width(320.0);
                ui.label(FIRST_RUN_NOTICE);
                ui.add_space(8.0);
                if ui.button("I understand").clicked() {
                    self.first_run_pending = false;
                    self.config.first_run_shown = true;
                    self.persist();
                }
            });
    }

    fn draw(&mut self, ctx: &egui::Context) {
        let (bg, fg, font_id) = self.effective_appearance();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(bg))
            .show(ctx, |ui| {
                let full = ui.max_rect();
                let inner_x = (full.min.x + EDGE_SIZE, full.max.x - EDGE_SIZE);

                let title_rect = Rect::from_min_max(
                    pos2(inner_x.0, full.min.y + EDGE_SIZE),
                    pos2(inner_x.1, full.min.y + EDGE_SIZE + TITLE_BAR_HEIGHT),
                );
                let grip_rect = Rect::from_min_max(
                    pos2(inner_x.0, full.max.y - EDGE_SIZE - GRIP_SIZE),
                    pos2(inner_x.1, full.max.y - EDGE_SIZE),
                );
                let bottom_rect = Rect::from_min_max(
                    pos2(inner_x.0, grip_rect.min.y - BOTTOM_BAR_HEIGHT),
                    pos2(inner_x.1, grip_rect.min.y),
                );
                let content_rect = Rect::from_min_max(
                    pos2(inner_x.0, title_rect.max.y),
                    pos2(inner_x.1, bottom_rect.min.y),
                );

                self.draw_title_bar(ui, ctx, title_rect);
                self.draw_bottom_bar(ui, bottom_rect);
                self.draw_grip(ui, ctx, grip_rect);
                if self.show_settings {
                    ui.allocate_ui_at_rect(content_rect.shrink(8.0), |ui| {
                        if let Some(outcome) = self.settings_panel.ui(ui) {
                            match outcome {
                                SettingsOutcome::Saved => self.save_settings(),
                                SettingsOutcome::Cancelled => self.cancel_settings(),
                            }
                        }
                    });
                    if self.show_settings {
                        // Live opacity preview while the panel is open.
                        let preview = self.settings_panel.opacity;
                        self.apply_alpha(preview);
                    }
                } else {
                    self.draw_content(ui, content_rect, fg, font_id);
                }
                self.draw_edge_bands(ui, ctx, full);
            });

        if self.first_run_pending {
            self.draw_first_run(ctx);
        }
    }
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if !self.startup_applied {
            self.startup_applied = true;
            self.style = win_util::window_style(frame);
            self.apply_startup_window_state();
        }

        self.drain_actions(ctx);
        while let Ok(notice) = self.updates.try_recv() {
            let msg = format!("Version {} is available.", notice.version);
            self.toast(ToastKind::Info, &msg);
        }

        let focused = ctx.input(|i| i.viewport().focused.unwrap_or(true));
        if self.window_focused && !focused {
            self.handle_content_focus_lost();
        }
        self.window_focused = focused;

        // A gesture whose pointer-up landed outside the window never reports
        // drag_stopped; settle it as soon as the button is seen released.
        if !self.gesture.is_idle() && !ctx.input(|i| i.pointer.any_down()) {
            self.end_gesture(ctx);
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.sync_geometry_from_window(ctx);
            self.persist();
        }

        self.draw(ctx);
        self.toasts.show(ctx);

        // Keep frames coming so queued hotkey actions are drained promptly
        // even without input events.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

/// Map a configured family name onto egui's built-in families. Monospace
/// names keep their fixed-pitch rendering; everything else is proportional.
pub fn font_family(name: &str) -> FontFamily {
    let n = name.to_ascii_lowercase();
    if n.contains("consolas") || n.contains("courier") || n.contains("mono") {
        FontFamily::Monospace
    } else {
        FontFamily::Proportional
    }
}
