//! Grid-space primitives used by carving, placement and gameplay distance checks.

use crate::types::{Direction, Pos};

pub const START_POS: Pos = Pos { y: 1, x: 1 };

/// Bottom-right interior corner.
pub fn exit_pos(rows: usize, cols: usize) -> Pos {
    Pos { y: rows as i32 - 2, x: cols as i32 - 2 }
}

pub(crate) fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

pub(crate) fn chebyshev(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
}

pub(crate) fn neighbors(pos: Pos) -> [Pos; 4] {
    Direction::ALL.map(|direction| pos.step(direction))
}
