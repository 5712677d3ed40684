use eframe::egui::{pos2, vec2, Pos2, Rect, Vec2};

pub const MIN_WIDTH: f32 = 200.0;
pub const MIN_HEIGHT: f32 = 150.0;

/// Width of the resize hit-bands along each border, in points.
pub const EDGE_SIZE: f32 = 6.0;
/// Height of the dedicated resize strip at the bottom of the window. Larger
/// than the edge bands so a south-east corner resize does not need
/// pixel-perfect aim.
pub const GRIP_SIZE: f32 = 10.0;

pub const SCREEN_MARGIN: f32 = 20.0;
/// Extra space reserved below bottom presets so the window clears the taskbar.
pub const BOTTOM_MARGIN: f32 = 60.0;
pub const NUDGE_STEP: f32 = 20.0;

/// Which window edges a resize gesture is pulling on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edges {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl Edges {
    pub const NORTH: Edges = Edges {
        north: true,
        south: false,
        east: false,
        west: false,
    };
    pub const SOUTH: Edges = Edges {
        north: false,
        south: true,
        east: false,
        west: false,
    };
    pub const EAST: Edges = Edges {
        north: false,
        south: false,
        east: true,
        west: false,
    };
    pub const WEST: Edges = Edges {
        north: false,
        south: false,
        east: false,
        west: true,
    };
    pub const SOUTH_EAST: Edges = Edges {
        north: false,
        south: true,
        east: true,
        west: false,
    };

    pub fn is_empty(&self) -> bool {
        !(self.north || self.south || self.east || self.west)
    }
}

/// Snapshot taken on pointer-down over the title bar.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    pub pointer_start: Pos2,
    pub origin: Pos2,
}

/// Snapshot taken on pointer-down over an edge band or the grip strip.
#[derive(Debug, Clone, Copy)]
pub struct ResizeSession {
    pub pointer_start: Pos2,
    pub origin: Rect,
    pub edges: Edges,
}

/// Gesture state: `Idle`, `Dragging` or `Resizing`. Sessions are created on
/// pointer-down and consumed on pointer-up; the edge set is non-empty only
/// while a resize is in progress.
#[derive(Debug, Clone, Copy, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

impl Gesture {
    pub fn start_drag(pointer: Pos2, window_pos: Pos2) -> Self {
        Gesture::Dragging(DragSession {
            pointer_start: pointer,
            origin: window_pos,
        })
    }

    pub fn start_resize(pointer: Pos2, window_rect: Rect, edges: Edges) -> Self {
        Gesture::Resizing(ResizeSession {
            pointer_start: pointer,
            origin: window_rect,
            edges,
        })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// Edge set of the gesture in progress; empty unless resizing.
    pub fn edges(&self) -> Edges {
        match self {
            Gesture::Resizing(s) => s.edges,
            _ => Edges::default(),
        }
    }
}

/// New window origin while dragging: `origin + (pointer - pointer_start)`.
pub fn drag_position(session: &DragSession, pointer: Pos2) -> Pos2 {
    session.origin + (pointer - session.pointer_start)
}

/// New window rect for a resize update. Each active edge applies its rule
/// independently from the gesture-start snapshot:
///
/// * west: `width - dx`, applied only when it stays >= `MIN_WIDTH`; the
///   origin shifts by `dx` so the east edge stays fixed. An update that would
///   cross the minimum is rejected for that axis, not clamped-with-shift.
/// * east: `max(MIN_WIDTH, width + dx)`, origin unchanged.
/// * north/south: symmetric on the vertical axis with `MIN_HEIGHT`.
pub fn resize_rect(session: &ResizeSession, pointer: Pos2) -> Rect {
    let delta = pointer - session.pointer_start;
    let origin = session.origin;

    let mut x = origin.min.x;
    let mut y = origin.min.y;
    let mut w = origin.width();
    let mut h = origin.height();

    if session.edges.west {
        let new_w = origin.width() - delta.x;
        if new_w >= MIN_WIDTH {
            w = new_w;
            x = origin.min.x + delta.x;
        }
    }
    if session.edges.east {
        w = (origin.width() + delta.x).max(MIN_WIDTH);
    }
    if session.edges.north {
        let new_h = origin.height() - delta.y;
        if new_h >= MIN_HEIGHT {
            h = new_h;
            y = origin.min.y + delta.y;
        }
    }
    if session.edges.south {
        h = (origin.height() + delta.y).max(MIN_HEIGHT);
    }

    Rect::from_min_size(pos2(x, y), vec2(w, h))
}

/// Union of the fixed-width edge bands under a window-local position, so a
/// pointer in a corner picks up both adjoining edges.
pub fn hit_edges(local: Pos2, size: Vec2) -> Edges {
    Edges {
        north: local.y <= EDGE_SIZE,
        south: local.y >= size.y - EDGE_SIZE,
        west: local.x <= EDGE_SIZE,
        east: local.x >= size.x - EDGE_SIZE,
    }
}

/// One of nine screen-relative positions: `col`/`row` are 0=left/top,
/// 1=center, 2=right/bottom. Bottom rows reserve [`BOTTOM_MARGIN`] for the
/// taskbar.
pub fn preset_position(screen: Vec2, window: Vec2, col: u8, row: u8) -> Pos2 {
    let x = match col {
        0 => SCREEN_MARGIN,
        1 => ((screen.x - window.x) / 2.0).floor(),
        _ => screen.x - window.x - SCREEN_MARGIN,
    };
    let y = match row {
        0 => SCREEN_MARGIN,
        1 => ((screen.y - window.y) / 2.0).floor(),
        _ => screen.y - window.y - BOTTOM_MARGIN,
    };
    pos2(x, y)
}
