//! Procedural maze generation split into carving, reachability and placement submodules.

pub mod model;
pub mod progression;

mod generator;
pub(crate) mod grid;
pub(crate) mod reachability;
pub(crate) mod seed;
mod spawns;

pub use generator::{HazardOutcome, MazeGenerator};
pub use grid::{START_POS, exit_pos};
pub use model::GeneratedMaze;
pub use progression::{FogRule, MAX_LEVEL, STARTING_LEVEL, fog_rule, is_final_level};
pub use reachability::reachable;

use crate::config::GameConfig;
use crate::types::Pos;

/// One-shot generation for a given run seed, generation counter and level.
pub fn generate_maze(
    config: &GameConfig,
    run_seed: u64,
    generation: u64,
    level: u8,
    player: Pos,
) -> GeneratedMaze {
    let maze_seed = seed::derive_maze_seed(run_seed, generation, level);
    MazeGenerator::new(config).generate(maze_seed, level, player)
}
