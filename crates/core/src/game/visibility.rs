//! Per-level fog rules and the level-2 explored-cell memory.
//! This module exists to answer "is this cell shown right now" for any frame.
//! It does not own the reveal trigger itself; movement arms `reveal_until`.

use super::*;
use crate::mapgen::grid::chebyshev;
use crate::mapgen::{FogRule, fog_rule};

/// Cells the player has stood on during the current level-2 maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExploredMap {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl ExploredMap {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![false; width * height] }
    }

    pub fn mark(&mut self, pos: Pos) {
        if let Some(idx) = self.index(pos) {
            self.cells[idx] = true;
        }
    }

    pub fn is_explored(&self, pos: Pos) -> bool {
        self.index(pos).is_some_and(|idx| self.cells[idx])
    }

    pub fn explored_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell).count()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }
}

/// Level rule alone, without the timed reveal override.
pub fn cell_visible(
    rule: FogRule,
    player: Pos,
    pos: Pos,
    view_radius: i32,
    explored: Option<&ExploredMap>,
) -> bool {
    let in_window = chebyshev(player, pos) <= view_radius.unsigned_abs();
    match rule {
        FogRule::FullView => true,
        FogRule::ExploredMemory => in_window || explored.is_some_and(|map| map.is_explored(pos)),
        FogRule::WindowOnly => in_window,
    }
}

impl Game {
    pub fn is_fog_suspended(&self, now: Millis) -> bool {
        self.reveal_until.is_some_and(|until| now < until)
    }

    pub fn is_visible(&self, pos: Pos, now: Millis) -> bool {
        if self.is_fog_suspended(now) {
            return true;
        }
        cell_visible(
            fog_rule(self.state.level),
            self.state.player,
            pos,
            self.config.view_radius,
            self.state.explored.as_ref(),
        )
    }

    /// Row-major verdict for every cell.
    pub fn visibility(&self, now: Millis) -> Vec<bool> {
        let (rows, cols) = (self.state.map.rows(), self.state.map.cols());
        let mut visible = Vec::with_capacity(rows * cols);
        for y in 0..rows {
            for x in 0..cols {
                visible.push(self.is_visible(Pos { y: y as i32, x: x as i32 }, now));
            }
        }
        visible
    }

    pub(super) fn mark_explored(&mut self, pos: Pos) {
        if let Some(explored) = self.state.explored.as_mut() {
            explored.mark(pos);
        }
    }
}
