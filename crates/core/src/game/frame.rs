//! Read-only draw model handed to the renderer once per frame.

use std::f64::consts::TAU;

use super::*;
use crate::mapgen::MAX_LEVEL;
use crate::state::Map;

const GLOW_RADIANS_PER_MS: f64 = 0.009;
const CARET_BLINK_MS: Millis = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner<'a> {
    Victory,
    Message(&'a str),
    Quiz { question: &'a str, input: &'a str, focused: bool, caret_visible: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameView<'a> {
    pub map: &'a Map,
    pub level: u8,
    pub phase: Phase,
    pub player: Pos,
    pub start: Pos,
    pub exit: Pos,
    /// Radians in `[0, 2π)`.
    pub exit_glow_phase: f32,
    pub traps: Vec<Pos>,
    pub hazard: Option<[Pos; 2]>,
    pub hazard_triggered: bool,
    pub escort: Option<Pos>,
    pub quiz_npcs: Vec<Pos>,
    pub visible: Vec<bool>,
    pub fog_suspended: bool,
    /// The start cell gets its own marker once the escort level is reached.
    pub show_start_marker: bool,
    pub banner: Option<Banner<'a>>,
}

impl FrameView<'_> {
    pub fn rows(&self) -> usize {
        self.map.rows()
    }

    pub fn cols(&self) -> usize {
        self.map.cols()
    }

    pub fn is_visible(&self, pos: Pos) -> bool {
        self.map.in_bounds(pos) && self.visible[self.map.index(pos)]
    }
}

pub fn exit_glow_phase(now: Millis) -> f32 {
    ((now as f64 * GLOW_RADIANS_PER_MS) % TAU) as f32
}

pub fn caret_visible(now: Millis) -> bool {
    (now / CARET_BLINK_MS) % 2 == 0
}

impl Game {
    pub fn frame(&self, now: Millis) -> FrameView<'_> {
        let state = &self.state;
        let mut traps: Vec<Pos> = state.traps.iter().copied().collect();
        traps.sort_unstable();

        FrameView {
            map: &state.map,
            level: state.level,
            phase: self.phase,
            player: state.player,
            start: state.start,
            exit: state.exit,
            exit_glow_phase: exit_glow_phase(now),
            traps,
            hazard: state.hazard.map(|hazard| hazard.cells),
            hazard_triggered: state.hazard.is_some_and(|hazard| hazard.triggered),
            escort: state.escort.map(|escort| escort.pos),
            quiz_npcs: state.quiz_npcs.values().map(|npc| npc.pos).collect(),
            visible: self.visibility(now),
            fog_suspended: self.is_fog_suspended(now),
            show_start_marker: state.level == MAX_LEVEL,
            banner: self.banner(now),
        }
    }

    fn banner(&self, now: Millis) -> Option<Banner<'_>> {
        if let Some(quiz) = &self.quiz {
            return Some(Banner::Quiz {
                question: quiz.question.question,
                input: &quiz.input,
                focused: quiz.focused,
                caret_visible: caret_visible(now),
            });
        }
        if self.phase == Phase::Victory {
            return Some(Banner::Victory);
        }
        self.messages.current().map(Banner::Message)
    }
}
