//! Maze installation, level clears and run restarts.
//! This module exists to keep every "new maze" path resetting the same per-maze state.
//! It does not own move resolution or quiz input handling.

use slotmap::SlotMap;

use super::*;
use crate::game::visibility::ExploredMap;
use crate::mapgen::{FogRule, GeneratedMaze, fog_rule, is_final_level};
use crate::state::{Escort, Hazard, PathHistory, QuizNpc};

pub(super) fn build_state(generated: GeneratedMaze, player: Pos, history_len: usize) -> GameState {
    let mut quiz_npcs = SlotMap::with_key();
    for pos in &generated.quiz_npcs {
        quiz_npcs.insert_with_key(|id| QuizNpc { id, pos: *pos, question: None });
    }

    let mut path_history = PathHistory::new(history_len);
    path_history.reset(player);

    let explored = (fog_rule(generated.level) == FogRule::ExploredMemory).then(|| {
        let mut explored = ExploredMap::new(generated.map.cols(), generated.map.rows());
        explored.mark(player);
        explored
    });

    GameState {
        level: generated.level,
        player,
        start: generated.start,
        exit: generated.exit,
        traps: generated.traps.iter().copied().collect(),
        hazard: generated.hazard_cells().map(|cells| Hazard { cells, triggered: false }),
        escort: generated.escort.map(Escort::dormant),
        quiz_npcs,
        path_history,
        explored,
        exit_attempts: 0,
        map: generated.map,
    }
}

impl Game {
    /// Replaces the maze and every per-maze entity; the player keeps `player`.
    pub(super) fn install_level(&mut self, level: u8, player: Pos) {
        self.generation += 1;
        let maze_seed = derive_maze_seed(self.seed, self.generation, level);
        let generated = self.generator.generate(maze_seed, level, player);
        self.state = build_state(generated, player, self.config.path_history_len);
        self.messages.reset();
        self.reveal_until = None;
        self.record_generation();
    }

    pub(super) fn record_generation(&mut self) {
        self.log.push(LogEvent::MazeGenerated {
            level: self.state.level,
            generation: self.generation,
        });
        if let Some(hazard) = self.state.hazard {
            self.log.push(LogEvent::HazardPlaced { cells: hazard.cells });
        } else if self.state.level >= 2 {
            self.log.push(LogEvent::HazardSkipped);
        }
        if let Some(escort) = self.state.escort {
            self.log.push(LogEvent::EscortPlaced { pos: escort.pos });
        }
    }

    /// Back to a fresh level-1 maze with the player on the start cell.
    pub(super) fn restart_run(&mut self, now: Millis) {
        self.quiz = None;
        self.victory = None;
        self.phase = Phase::Playing;
        self.next_roam_at = now.saturating_add(self.config.roam_interval_ms);
        self.install_level(STARTING_LEVEL, START_POS);
        self.log.push(LogEvent::RunRestarted);
        info!(generation = self.generation, "run restarted");
    }

    /// Enters the victory phase. Below the final level the next level is installed at once
    /// around the player's current cell, so the maze under the banner is already the new one.
    pub(super) fn clear_level(&mut self, now: Millis) {
        let cleared_level = self.state.level;
        self.log.push(LogEvent::LevelCleared { level: cleared_level });
        self.phase = Phase::Victory;
        let deadline = now.saturating_add(self.config.victory_delay_ms);
        self.victory = Some(PendingVictory { deadline, cleared_level });
        info!(cleared_level, "level cleared");

        if !is_final_level(cleared_level) {
            let player = self.state.player;
            self.install_level(cleared_level + 1, player);
        }
    }

    pub(super) fn finish_victory(&mut self, now: Millis) {
        let Some(victory) = self.victory.take() else {
            return;
        };

        if is_final_level(victory.cleared_level) {
            self.restart_run(now);
            return;
        }

        let level = self.state.level;
        self.install_level(level, START_POS);
        self.phase = Phase::Playing;
        info!(level, "level started");
    }
}
