use eframe::egui::{self, pos2};
use prompt_overlay::visibility::{apply_visibility, OFFSCREEN_POS};

#[path = "mock_ctx.rs"]
mod mock_ctx;
use mock_ctx::MockCtx;

#[test]
fn hide_moves_the_window_offscreen() {
    let ctx = MockCtx::default();
    apply_visibility(false, pos2(100.0, 100.0), &ctx);

    let cmds = ctx.commands.lock().unwrap();
    assert_eq!(cmds.len(), 2);
    match cmds[0] {
        egui::ViewportCommand::OuterPosition(pos) => {
            assert_eq!(pos.x, OFFSCREEN_POS.0);
            assert_eq!(pos.y, OFFSCREEN_POS.1);
        }
        _ => panic!("unexpected command"),
    }
    match cmds[1] {
        egui::ViewportCommand::Visible(v) => assert!(v),
        _ => panic!("unexpected command"),
    }
}

#[test]
fn show_restores_the_saved_position_and_focuses() {
    let ctx = MockCtx::default();
    apply_visibility(true, pos2(640.0, 480.0), &ctx);

    let cmds = ctx.commands.lock().unwrap();
    assert_eq!(cmds.len(), 3);
    match cmds[0] {
        egui::ViewportCommand::OuterPosition(pos) => assert_eq!(pos, pos2(640.0, 480.0)),
        _ => panic!("unexpected command"),
    }
    match cmds[2] {
        egui::ViewportCommand::Focus => {}
        _ => panic!("show must end by focusing the window"),
    }
}

#[test]
fn both_transitions_request_a_repaint() {
    let ctx = MockCtx::default();
    apply_visibility(false, pos2(0.0, 0.0), &ctx);
    apply_visibility(true, pos2(0.0, 0.0), &ctx);
    assert_eq!(*ctx.repaints.lock().unwrap(), 2);
}
