//! Screen-space geometry for the maze grid and the quiz overlay.

use std::array;

use maze_core::Pos;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PanelRect {
    /// Edges count as inside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Shrinks the rect towards its center, keeping `fraction` of each side.
    pub fn inset(&self, fraction: f32) -> PanelRect {
        let width = self.width * fraction;
        let height = self.height * fraction;
        PanelRect {
            x: self.x + (self.width - width) / 2.0,
            y: self.y + (self.height - height) / 2.0,
            width,
            height,
        }
    }
}

/// Square cells fitted into the window, centered on the spare axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MazeViewport {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell: f32,
}

impl MazeViewport {
    pub fn fit(screen_width: f32, screen_height: f32, rows: usize, cols: usize) -> Self {
        let cell = (screen_width / cols.max(1) as f32).min(screen_height / rows.max(1) as f32);
        let cell = cell.max(1.0);
        MazeViewport {
            origin_x: (screen_width - cell * cols as f32).max(0.0) / 2.0,
            origin_y: (screen_height - cell * rows as f32).max(0.0) / 2.0,
            cell,
        }
    }

    pub fn cell_rect(&self, pos: Pos) -> PanelRect {
        PanelRect {
            x: self.origin_x + pos.x as f32 * self.cell,
            y: self.origin_y + pos.y as f32 * self.cell,
            width: self.cell,
            height: self.cell,
        }
    }

    /// Ring radii for the exit glow at `phase` radians, smallest first.
    pub fn exit_glow_radii(&self, phase: f32) -> [f32; 6] {
        let scale = self.cell / 25.0;
        let glow = (12.0 + phase.sin() * 6.0) * scale;
        array::from_fn(|ring| glow * (ring + 1) as f32 / 6.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuizOverlayLayout {
    pub dialog: PanelRect,
    pub input: PanelRect,
}

/// Dialog is two thirds of the window wide and one third tall; the input box hugs its bottom.
pub fn quiz_overlay_layout(screen_width: f32, screen_height: f32) -> QuizOverlayLayout {
    let width = (screen_width * 2.0 / 3.0).floor();
    let height = (screen_height / 3.0).floor();
    let dialog = PanelRect {
        x: ((screen_width - width) / 2.0).floor(),
        y: ((screen_height - height) / 2.0).floor(),
        width,
        height,
    };
    let input = PanelRect {
        x: dialog.x + 20.0,
        y: dialog.y + dialog.height - 70.0,
        width: (dialog.width - 40.0).max(0.0),
        height: 50.0,
    };
    QuizOverlayLayout { dialog, input }
}
