use std::collections::{HashSet, VecDeque};

use slotmap::SlotMap;

use crate::content::QuizQuestion;
use crate::game::visibility::ExploredMap;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    pub internal_width: usize,
    pub internal_height: usize,
    pub tiles: Vec<TileKind>,
}

impl Map {
    /// Solid rock; carving opens it up.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            internal_width: width,
            internal_height: height,
            tiles: vec![TileKind::Wall; width * height],
        }
    }

    pub fn rows(&self) -> usize {
        self.internal_height
    }

    pub fn cols(&self) -> usize {
        self.internal_width
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn is_floor(&self, pos: Pos) -> bool {
        self.tile_at(pos) == TileKind::Floor
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.internal_width
            && (pos.y as usize) < self.internal_height
    }

    /// Inside the permanent outer wall ring.
    pub fn is_interior(&self, pos: Pos) -> bool {
        pos.x > 0
            && pos.y > 0
            && (pos.x as usize) < self.internal_width - 1
            && (pos.y as usize) < self.internal_height - 1
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    /// Floor cells in row-major order.
    pub fn floor_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.internal_height).flat_map(move |y| {
            (0..self.internal_width)
                .map(move |x| Pos { y: y as i32, x: x as i32 })
                .filter(|pos| self.is_floor(*pos))
        })
    }

    pub fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.internal_width + (pos.x as usize)
    }
}

/// Two adjacent cells the player cannot enter; walking next to it lifts the fog for a while.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hazard {
    pub cells: [Pos; 2],
    pub triggered: bool,
}

impl Hazard {
    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Escort {
    pub pos: Pos,
    pub activated: bool,
    pub delivered: bool,
}

impl Escort {
    pub fn dormant(pos: Pos) -> Self {
        Self { pos, activated: false, delivered: false }
    }

    pub fn is_following(&self) -> bool {
        self.activated && !self.delivered
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizNpc {
    pub id: QuizNpcId,
    pub pos: Pos,
    /// Drawn lazily on the first encounter and cleared by a wrong answer.
    pub question: Option<QuizQuestion>,
}

/// Bounded most-recent-last trail of player positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathHistory {
    capacity: usize,
    entries: VecDeque<Pos>,
}

impl PathHistory {
    pub fn new(capacity: usize) -> Self {
        Self { capacity: capacity.max(1), entries: VecDeque::with_capacity(capacity) }
    }

    pub fn push(&mut self, pos: Pos) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(pos);
    }

    pub fn reset(&mut self, pos: Pos) {
        self.entries.clear();
        self.entries.push_back(pos);
    }

    /// `moves_ago == 0` is the newest entry.
    pub fn back(&self, moves_ago: usize) -> Option<Pos> {
        let len = self.entries.len();
        if moves_ago >= len {
            return None;
        }
        self.entries.get(len - 1 - moves_ago).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pos> {
        self.entries.iter()
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub map: Map,
    pub level: u8,
    pub player: Pos,
    pub start: Pos,
    pub exit: Pos,
    pub traps: HashSet<Pos>,
    pub hazard: Option<Hazard>,
    pub escort: Option<Escort>,
    pub quiz_npcs: SlotMap<QuizNpcId, QuizNpc>,
    pub path_history: PathHistory,
    pub explored: Option<ExploredMap>,
    pub exit_attempts: u32,
}

impl GameState {
    pub fn quiz_npc_at(&self, pos: Pos) -> Option<QuizNpcId> {
        self.quiz_npcs.iter().find(|(_, npc)| npc.pos == pos).map(|(id, _)| id)
    }

    pub fn is_hazard_cell(&self, pos: Pos) -> bool {
        self.hazard.is_some_and(|hazard| hazard.contains(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_map_is_all_wall_and_out_of_bounds_reads_as_wall() {
        let map = Map::new(5, 4);
        assert!(map.tiles.iter().all(|tile| *tile == TileKind::Wall));
        assert_eq!(map.tile_at(Pos { y: -1, x: 2 }), TileKind::Wall);
        assert_eq!(map.tile_at(Pos { y: 2, x: 5 }), TileKind::Wall);
    }

    #[test]
    fn interior_excludes_outer_ring() {
        let map = Map::new(6, 5);
        assert!(map.is_interior(Pos { y: 1, x: 1 }));
        assert!(map.is_interior(Pos { y: 3, x: 4 }));
        assert!(!map.is_interior(Pos { y: 0, x: 2 }));
        assert!(!map.is_interior(Pos { y: 4, x: 2 }));
        assert!(!map.is_interior(Pos { y: 2, x: 5 }));
    }

    #[test]
    fn floor_cells_are_row_major() {
        let mut map = Map::new(5, 5);
        map.set_tile(Pos { y: 3, x: 1 }, TileKind::Floor);
        map.set_tile(Pos { y: 1, x: 3 }, TileKind::Floor);
        let cells: Vec<Pos> = map.floor_cells().collect();
        assert_eq!(cells, vec![Pos { y: 1, x: 3 }, Pos { y: 3, x: 1 }]);
    }

    #[test]
    fn path_history_drops_oldest_and_indexes_from_newest() {
        let mut history = PathHistory::new(3);
        for x in 1..=4 {
            history.push(Pos { y: 1, x });
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.back(0), Some(Pos { y: 1, x: 4 }));
        assert_eq!(history.back(2), Some(Pos { y: 1, x: 2 }));
        assert_eq!(history.back(3), None);
    }
}
