//! Draws one `FrameView` with macroquad primitives. Nothing here mutates game state.

use app::layout::{MazeViewport, PanelRect, quiz_overlay_layout};
use app::ui_text::{banner_caption, hud_line};
use macroquad::prelude::*;
use maze_core::{Banner, FrameView, Pos, TileKind};

const WALL_COLOR: Color = rgb(255, 255, 255);
const FLOOR_COLOR: Color = rgb(0, 26, 51);
const HIDDEN_COLOR: Color = rgb(0, 0, 0);
const PLAYER_COLOR: Color = rgb(255, 255, 0);
const EXIT_COLOR: Color = rgb(0, 255, 0);
const TRAP_COLOR: Color = rgb(200, 0, 200);
const HAZARD_COLOR: Color = rgb(255, 105, 180);
const ESCORT_COLOR: Color = rgb(255, 200, 200);
const START_COLOR: Color = rgb(255, 165, 0);
const QUIZ_NPC_COLOR: Color = rgb(255, 0, 0);
const INPUT_BOX_COLOR: Color = rgb(230, 230, 230);
const HUD_COLOR: Color = Color { r: 0.6, g: 0.6, b: 0.6, a: 0.9 };

const ENTITY_INSET: f32 = 2.0 / 3.0;
const START_INSET: f32 = 3.0 / 4.0;
const BANNER_FONT_SIZE: f32 = 48.0;
const QUIZ_FONT_SIZE: f32 = 32.0;
const HUD_FONT_SIZE: f32 = 18.0;

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color { r: r as f32 / 255.0, g: g as f32 / 255.0, b: b as f32 / 255.0, a: 1.0 }
}

/// One paint operation on a cell, in back-to-front order.
#[derive(Clone, Copy, Debug, PartialEq)]
enum CellLayer {
    Fill(Color),
    Inset(Color, f32),
}

fn cell_layers(frame: &FrameView<'_>, pos: Pos) -> Vec<CellLayer> {
    if !frame.is_visible(pos) {
        return vec![CellLayer::Fill(HIDDEN_COLOR)];
    }

    let mut layers = vec![CellLayer::Fill(match frame.map.tile_at(pos) {
        TileKind::Wall => WALL_COLOR,
        TileKind::Floor => FLOOR_COLOR,
    })];
    if pos == frame.exit {
        layers.push(CellLayer::Fill(EXIT_COLOR));
    }
    if frame.show_start_marker && pos == frame.start {
        layers.push(CellLayer::Inset(START_COLOR, START_INSET));
    }
    if frame.traps.binary_search(&pos).is_ok() {
        layers.push(CellLayer::Inset(TRAP_COLOR, ENTITY_INSET));
    }
    if frame.hazard.is_some_and(|cells| cells.contains(&pos)) {
        layers.push(CellLayer::Fill(HAZARD_COLOR));
    }
    if frame.escort == Some(pos) {
        layers.push(CellLayer::Fill(ESCORT_COLOR));
    }
    if frame.quiz_npcs.contains(&pos) {
        layers.push(CellLayer::Inset(QUIZ_NPC_COLOR, ENTITY_INSET));
    }
    layers
}

pub fn draw_frame(frame: &FrameView<'_>, seed: u64, screen_w: f32, screen_h: f32) {
    clear_background(HIDDEN_COLOR);
    let viewport = MazeViewport::fit(screen_w, screen_h, frame.rows(), frame.cols());

    for y in 0..frame.rows() {
        for x in 0..frame.cols() {
            let pos = Pos { y: y as i32, x: x as i32 };
            let rect = viewport.cell_rect(pos);
            for layer in cell_layers(frame, pos) {
                match layer {
                    CellLayer::Fill(color) => fill(rect, color),
                    CellLayer::Inset(color, fraction) => fill(rect.inset(fraction), color),
                }
            }
        }
    }

    let (glow_x, glow_y) = viewport.cell_rect(frame.exit).center();
    for radius in viewport.exit_glow_radii(frame.exit_glow_phase) {
        draw_circle_lines(glow_x, glow_y, radius, 2.0, EXIT_COLOR);
    }
    fill(viewport.cell_rect(frame.player), PLAYER_COLOR);

    draw_text(&hud_line(frame.level, frame.phase, seed), 8.0, 16.0, HUD_FONT_SIZE, HUD_COLOR);
    draw_banner(frame.banner.as_ref(), screen_w, screen_h);
}

fn draw_banner(banner: Option<&Banner<'_>>, screen_w: f32, screen_h: f32) {
    match banner {
        Some(Banner::Quiz { question, input, focused, caret_visible }) => {
            draw_quiz_overlay(question, input, *focused && *caret_visible, screen_w, screen_h);
        }
        Some(Banner::Victory) => {
            if let Some(caption) = banner_caption(banner) {
                let x = screen_w / 2.0 - 100.0;
                let y = screen_h / 2.0 - 24.0 + BANNER_FONT_SIZE * 0.75;
                draw_text(&caption, x, y, BANNER_FONT_SIZE, PLAYER_COLOR);
            }
        }
        Some(Banner::Message(_)) => {
            if let Some(caption) = banner_caption(banner) {
                draw_text(&caption, 20.0, screen_h - 30.0, QUIZ_FONT_SIZE, WALL_COLOR);
            }
        }
        None => {}
    }
}

fn draw_quiz_overlay(question: &str, input: &str, caret: bool, screen_w: f32, screen_h: f32) {
    let layout = quiz_overlay_layout(screen_w, screen_h);
    fill(layout.dialog, WALL_COLOR);
    draw_text(
        question,
        layout.dialog.x + 20.0,
        layout.dialog.y + 20.0 + QUIZ_FONT_SIZE * 0.75,
        QUIZ_FONT_SIZE,
        BLACK,
    );

    fill(layout.input, INPUT_BOX_COLOR);
    let text_x = layout.input.x + 10.0;
    let baseline = layout.input.y + 10.0 + QUIZ_FONT_SIZE * 0.75;
    draw_text(input, text_x, baseline, QUIZ_FONT_SIZE, BLACK);

    if caret {
        let caret_x = text_x + measure_text(input, None, QUIZ_FONT_SIZE as u16, 1.0).width;
        let top = layout.input.y + 8.0;
        draw_line(caret_x, top, caret_x, top + QUIZ_FONT_SIZE, 2.0, BLACK);
    }
}

fn fill(rect: PanelRect, color: Color) {
    draw_rectangle(rect.x, rect.y, rect.width, rect.height, color);
}
