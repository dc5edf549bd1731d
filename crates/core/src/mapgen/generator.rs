//! High-level maze generation orchestration: grid pipeline first, then entity placement in
//! the fixed order traps, hazard, escort, quiz NPCs. Each placer excludes every cell an
//! earlier step claimed.

mod hazards;
mod pipeline;

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::GameConfig;
use crate::types::Pos;

use super::grid::{START_POS, exit_pos};
use super::model::GeneratedMaze;
use super::seed::maze_rng;
use super::spawns::{SpawnContext, generate_quiz_spawns, generate_trap_spawns};
use hazards::{BlockerContext, place_escort, place_hazard};

pub use hazards::HazardOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeGenerator {
    width: usize,
    height: usize,
    extra_paths: u32,
}

impl MazeGenerator {
    pub fn new(config: &GameConfig) -> Self {
        Self { width: config.cols(), height: config.rows(), extra_paths: config.extra_paths }
    }

    /// `player` is where the player will stand in the new maze; nothing spawns there.
    pub fn generate(&self, maze_seed: u64, level: u8, player: Pos) -> GeneratedMaze {
        let mut rng = maze_rng(maze_seed);
        let start = START_POS;
        let exit = exit_pos(self.height, self.width);

        let mut map =
            pipeline::build_grid(&mut rng, self.width, self.height, self.extra_paths, start, exit);

        let mut reserved = BTreeSet::from([start, exit, player]);
        let traps =
            generate_trap_spawns(&SpawnContext { map: &map, reserved: &reserved }, &mut rng);
        reserved.extend(traps.iter().copied());

        let hazard = place_hazard(&mut BlockerContext {
            map: &mut map,
            rng: &mut rng,
            level,
            start,
            exit,
            reserved: &reserved,
        });
        let hazard_walls: Vec<Pos> = hazard.cells().into_iter().flatten().collect();
        reserved.extend(hazard_walls.iter().copied());

        let escort = place_escort(
            &mut BlockerContext {
                map: &mut map,
                rng: &mut rng,
                level,
                start,
                exit,
                reserved: &reserved,
            },
            &hazard_walls,
        );
        reserved.extend(escort);

        let quiz_npcs =
            generate_quiz_spawns(&SpawnContext { map: &map, reserved: &reserved }, &mut rng);

        debug!(
            level,
            traps = traps.len(),
            ?hazard,
            ?escort,
            quiz_npcs = quiz_npcs.len(),
            "maze populated"
        );

        GeneratedMaze { level, map, start, exit, traps, hazard, escort, quiz_npcs }
    }
}
