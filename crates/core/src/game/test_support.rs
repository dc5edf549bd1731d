//! Shared test fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating hand-built maze setup across many tests.
//! It does not own production gameplay logic.

use std::collections::HashSet;

use slotmap::SlotMap;

use super::*;
use crate::game::visibility::ExploredMap;
use crate::mapgen::{FogRule, fog_rule};
use crate::state::{Escort, Hazard, Map, PathHistory, QuizNpc};

pub(crate) fn default_game(seed: u64) -> Game {
    Game::new(seed, GameConfig::default(), 0).expect("default config is valid")
}

/// Builds a game on a hand-drawn maze.
///
/// `#` wall, `.` floor, `S` start, `E` exit, `P` player (defaults to `S`), `T` trap,
/// `H` hazard cell (exactly two), `D` dormant escort, `Q` quiz NPC. Every letter stands on
/// floor.
pub(crate) fn scripted_game(level: u8, rows: &[&str]) -> Game {
    let height = rows.len();
    let width = rows[0].len();
    let config = GameConfig {
        world_width: (width * 25) as u32,
        world_height: (height * 25) as u32,
        ..GameConfig::default()
    };
    let mut game = Game::new(1, config, 0).expect("fixture geometry is valid");

    let mut map = Map::new(width, height);
    let (mut start, mut exit, mut player) = (None, None, None);
    let mut traps = HashSet::new();
    let mut hazard_cells = Vec::new();
    let mut escort = None;
    let mut quiz_npcs = SlotMap::with_key();

    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width, "ragged fixture row {y}");
        for (x, glyph) in row.chars().enumerate() {
            let pos = Pos { y: y as i32, x: x as i32 };
            if glyph != '#' {
                map.set_tile(pos, TileKind::Floor);
            }
            match glyph {
                'S' => start = Some(pos),
                'E' => exit = Some(pos),
                'P' => player = Some(pos),
                'T' => {
                    traps.insert(pos);
                }
                'H' => hazard_cells.push(pos),
                'D' => escort = Some(Escort::dormant(pos)),
                'Q' => {
                    quiz_npcs.insert_with_key(|id| QuizNpc { id, pos, question: None });
                }
                '#' | '.' => {}
                other => panic!("unknown fixture glyph {other:?}"),
            }
        }
    }

    let start = start.expect("fixture needs a start");
    let player = player.unwrap_or(start);
    let hazard = match hazard_cells.as_slice() {
        [] => None,
        [a, b] => Some(Hazard { cells: [*a, *b], triggered: false }),
        other => panic!("hazard needs exactly two cells, got {other:?}"),
    };

    let mut path_history = PathHistory::new(game.config.path_history_len);
    path_history.reset(player);
    let explored = (fog_rule(level) == FogRule::ExploredMemory).then(|| {
        let mut explored = ExploredMap::new(width, height);
        explored.mark(player);
        explored
    });

    game.state = GameState {
        map,
        level,
        player,
        start,
        exit: exit.expect("fixture needs an exit"),
        traps,
        hazard,
        escort,
        quiz_npcs,
        path_history,
        explored,
        exit_attempts: 0,
    };
    game
}

pub(crate) fn only_quiz_npc(game: &Game) -> QuizNpcId {
    let mut ids = game.state.quiz_npcs.keys();
    let id = ids.next().expect("fixture has a quiz NPC");
    assert!(ids.next().is_none(), "fixture has more than one quiz NPC");
    id
}

pub(crate) fn step(game: &mut Game, direction: Direction, now: Millis) -> MoveReport {
    match game.apply_intent(Intent::Move(direction), now) {
        Ok(IntentOutcome::Moved(report)) => report,
        other => panic!("expected a move, got {other:?}"),
    }
}
