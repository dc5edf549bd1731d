//! Breadth-first connectivity checks and the scoped wall probe used by placement.
//! Any cell turned into a wall for a what-if query is restored when the probe ends.

use std::collections::VecDeque;
use std::ops::Deref;

use crate::state::Map;
use crate::types::{Pos, TileKind};

use super::grid::neighbors;

/// True when `to` can be reached from `from` by 4-directional steps over floor.
pub fn reachable(map: &Map, from: Pos, to: Pos) -> bool {
    if !map.is_floor(from) || !map.is_floor(to) {
        return false;
    }
    if from == to {
        return true;
    }

    let mut visited = vec![false; map.tiles.len()];
    let mut open = VecDeque::from([from]);
    visited[map.index(from)] = true;

    while let Some(pos) = open.pop_front() {
        for next in neighbors(pos) {
            if !map.is_floor(next) {
                continue;
            }
            let idx = map.index(next);
            if visited[idx] {
                continue;
            }
            if next == to {
                return true;
            }
            visited[idx] = true;
            open.push_back(next);
        }
    }

    false
}

/// Temporarily walls off `cells`; the previous tiles come back on drop.
pub(crate) struct WallProbe<'a> {
    map: &'a mut Map,
    saved: Vec<(Pos, TileKind)>,
}

impl<'a> WallProbe<'a> {
    pub(crate) fn new(map: &'a mut Map, cells: &[Pos]) -> Self {
        let mut saved = Vec::with_capacity(cells.len());
        for &cell in cells {
            if !map.in_bounds(cell) {
                continue;
            }
            saved.push((cell, map.tile_at(cell)));
            map.set_tile(cell, TileKind::Wall);
        }
        Self { map, saved }
    }
}

impl Deref for WallProbe<'_> {
    type Target = Map;

    fn deref(&self) -> &Map {
        self.map
    }
}

impl Drop for WallProbe<'_> {
    fn drop(&mut self) {
        // Reverse order so a cell listed twice ends up with its original tile.
        for &(cell, tile) in self.saved.iter().rev() {
            self.map.set_tile(cell, tile);
        }
    }
}

/// Answers `query` against the map with `cells` walled off, then restores them.
pub(crate) fn probe_with_walls<R>(
    map: &mut Map,
    cells: &[Pos],
    query: impl FnOnce(&Map) -> R,
) -> R {
    let probe = WallProbe::new(map, cells);
    query(&probe)
}

/// Start-to-exit connectivity survives if `cells` became impassable.
pub(crate) fn stays_connected_without(map: &mut Map, cells: &[Pos], start: Pos, exit: Pos) -> bool {
    probe_with_walls(map, cells, |probed| reachable(probed, start, exit))
}
