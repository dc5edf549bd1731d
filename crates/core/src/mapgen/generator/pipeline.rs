//! Grid construction pipeline: perfect-maze carving, extra openings, exit repair.

use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::state::Map;
use crate::types::{Direction, Pos, TileKind};

use super::super::grid::manhattan;
use super::super::reachability::reachable;
use super::super::seed::{roll_inclusive, shuffle};

pub(super) fn build_grid(
    rng: &mut ChaCha8Rng,
    width: usize,
    height: usize,
    extra_paths: u32,
    start: Pos,
    exit: Pos,
) -> Map {
    let mut map = Map::new(width, height);
    carve_perfect_maze(&mut map, rng, start);
    punch_extra_paths(&mut map, rng, extra_paths);
    map.set_tile(exit, TileKind::Floor);
    repair_exit_route(&mut map, rng, start, exit);
    map
}

/// Randomized depth-first backtracker over the odd lattice, with an explicit stack.
pub(super) fn carve_perfect_maze(map: &mut Map, rng: &mut ChaCha8Rng, origin: Pos) {
    map.set_tile(origin, TileKind::Floor);
    let mut stack = vec![(origin, shuffled_directions(rng))];

    while let Some((cell, pending)) = stack.last_mut() {
        let cell = *cell;
        let Some(direction) = pending.pop() else {
            stack.pop();
            continue;
        };

        let (dy, dx) = direction.delta();
        let far = Pos { y: cell.y + dy * 2, x: cell.x + dx * 2 };
        if !map.is_interior(far) || map.tile_at(far) != TileKind::Wall {
            continue;
        }

        map.set_tile(Pos { y: cell.y + dy, x: cell.x + dx }, TileKind::Floor);
        map.set_tile(far, TileKind::Floor);
        stack.push((far, shuffled_directions(rng)));
    }
}

/// Opens `amount` random interior cells; the outer ring stays solid.
pub(super) fn punch_extra_paths(map: &mut Map, rng: &mut ChaCha8Rng, amount: u32) {
    let (rows, cols) = (map.rows(), map.cols());
    for _ in 0..amount {
        let y = roll_inclusive(rng, 1..=rows - 2);
        let x = roll_inclusive(rng, 1..=cols - 2);
        map.set_tile(Pos { y: y as i32, x: x as i32 }, TileKind::Floor);
    }
}

/// Carves a contiguous trail from the exit toward the start until the trail joins the
/// start's region. Every step strictly shrinks the distance to `start`, so the walk ends
/// within `manhattan(exit, start)` steps.
pub(super) fn repair_exit_route(map: &mut Map, rng: &mut ChaCha8Rng, start: Pos, exit: Pos) {
    let mut frontier = exit;
    let mut carved = 0_u32;

    while !reachable(map, start, frontier) {
        let mut directions = Direction::ALL;
        shuffle(rng, &mut directions);
        let distance = manhattan(frontier, start);
        let Some(next) = directions
            .into_iter()
            .map(|direction| frontier.step(direction))
            .find(|next| map.is_interior(*next) && manhattan(*next, start) < distance)
        else {
            // Only possible when the frontier already sits on `start`.
            break;
        };
        map.set_tile(next, TileKind::Floor);
        frontier = next;
        carved += 1;
    }

    if carved > 0 {
        debug!(carved, ?exit, "repaired exit route");
    }
}

fn shuffled_directions(rng: &mut ChaCha8Rng) -> Vec<Direction> {
    let mut directions = Direction::ALL.to_vec();
    shuffle(rng, &mut directions);
    directions
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::mapgen::seed::maze_rng;

    const START: Pos = Pos { y: 1, x: 1 };

    fn floor_count(map: &Map) -> usize {
        map.floor_cells().count()
    }

    #[test]
    fn perfect_maze_is_a_spanning_tree_over_the_odd_lattice() {
        let mut rng = maze_rng(42);
        let mut map = Map::new(21, 15);
        carve_perfect_maze(&mut map, &mut rng, START);

        let lattice_cells = 10 * 7;
        for y in (1..14).step_by(2) {
            for x in (1..20).step_by(2) {
                let pos = Pos { y, x };
                assert!(map.is_floor(pos), "lattice cell {pos:?} should be carved");
                assert!(reachable(&map, START, pos));
            }
        }
        // A tree over N lattice cells uses exactly N - 1 connecting cells.
        assert_eq!(floor_count(&map), lattice_cells + lattice_cells - 1);
    }

    #[test]
    fn carving_never_touches_outer_ring() {
        let mut rng = maze_rng(9);
        let mut map = Map::new(36, 24);
        carve_perfect_maze(&mut map, &mut rng, START);
        punch_extra_paths(&mut map, &mut rng, 2_000);
        for pos in map.floor_cells() {
            assert!(map.is_interior(pos), "{pos:?} is on the outer ring");
        }
    }

    #[test]
    fn extra_paths_only_add_floor() {
        let mut rng = maze_rng(5);
        let mut map = Map::new(36, 24);
        carve_perfect_maze(&mut map, &mut rng, START);
        let carved: BTreeSet<Pos> = map.floor_cells().collect();
        punch_extra_paths(&mut map, &mut rng, 350);
        let loosened: BTreeSet<Pos> = map.floor_cells().collect();
        assert!(carved.is_subset(&loosened));
        assert!(loosened.len() > carved.len());
    }

    #[test]
    fn repair_joins_an_isolated_exit() {
        let mut rng = maze_rng(77);
        let mut map = Map::new(12, 10);
        map.set_tile(START, TileKind::Floor);
        map.set_tile(Pos { y: 1, x: 2 }, TileKind::Floor);
        let exit = Pos { y: 8, x: 10 };
        map.set_tile(exit, TileKind::Floor);
        assert!(!reachable(&map, START, exit));

        repair_exit_route(&mut map, &mut rng, START, exit);

        assert!(reachable(&map, START, exit));
        for pos in map.floor_cells() {
            assert!(map.is_interior(pos));
        }
    }

    #[test]
    fn repair_walk_carves_at_most_the_distance_to_start() {
        for seed in 0..32 {
            let mut rng = maze_rng(seed);
            let mut map = Map::new(12, 10);
            map.set_tile(START, TileKind::Floor);
            let exit = Pos { y: 8, x: 10 };
            map.set_tile(exit, TileKind::Floor);
            let before = floor_count(&map);

            repair_exit_route(&mut map, &mut rng, START, exit);

            assert!(reachable(&map, START, exit), "seed {seed}");
            assert!(floor_count(&map) - before <= manhattan(exit, START) as usize, "seed {seed}");
        }
    }

    #[test]
    fn repair_is_a_no_op_when_exit_is_connected() {
        let mut rng = maze_rng(1);
        let mut map = Map::new(7, 5);
        for x in 1..=5 {
            map.set_tile(Pos { y: 1, x }, TileKind::Floor);
        }
        let before = map.clone();
        repair_exit_route(&mut map, &mut rng, START, Pos { y: 1, x: 5 });
        assert_eq!(map, before);
    }

    #[test]
    fn built_grid_connects_start_and_exit() {
        for seed in [0_u64, 1, 2, 99, 4_096] {
            let mut rng = maze_rng(seed);
            let exit = Pos { y: 22, x: 34 };
            let map = build_grid(&mut rng, 36, 24, 350, START, exit);
            assert!(map.is_floor(START));
            assert!(map.is_floor(exit));
            assert!(reachable(&map, START, exit), "seed {seed}");
        }
    }
}
