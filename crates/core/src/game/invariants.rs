//! Runtime consistency checks shared by the fuzz tool and the integration suites.

use thiserror::Error;

use super::*;
use crate::mapgen::{FogRule, MAX_LEVEL, fog_rule, reachable};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{what} at {pos:?} is not on floor")]
    OffFloor { what: &'static str, pos: Pos },
    #[error("exit is unreachable from start with the hazard in place")]
    ExitCutOff,
    #[error("a trap sits on the exit")]
    TrapOnExit,
    #[error("a quiz npc stands on the start cell")]
    QuizNpcOnStart,
    #[error("phase {phase:?} disagrees with the pending quiz/victory state")]
    PhaseMismatch { phase: Phase },
    #[error("the open quiz points at a removed npc")]
    DanglingQuizTarget,
    #[error("an escort exists on level {level}")]
    EscortOffLevel { level: u8 },
    #[error("explored memory does not match the fog rule of level {level}")]
    ExploredMismatch { level: u8 },
    #[error("quiz input holds {len} chars, cap is {cap}")]
    QuizInputOverCap { len: usize, cap: usize },
}

impl Game {
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let state = &self.state;
        let on_floor = |what: &'static str, pos: Pos| {
            if state.map.is_floor(pos) {
                Ok(())
            } else {
                Err(InvariantViolation::OffFloor { what, pos })
            }
        };

        on_floor("player", state.player)?;
        on_floor("start", state.start)?;
        on_floor("exit", state.exit)?;
        for trap in &state.traps {
            on_floor("trap", *trap)?;
        }
        for npc in state.quiz_npcs.values() {
            on_floor("quiz npc", npc.pos)?;
        }
        if let Some(escort) = state.escort {
            on_floor("escort", escort.pos)?;
        }

        let mut walled = state.map.clone();
        for cell in state.hazard.iter().flat_map(|hazard| hazard.cells) {
            walled.set_tile(cell, TileKind::Wall);
        }
        if !reachable(&walled, state.start, state.exit) {
            return Err(InvariantViolation::ExitCutOff);
        }

        if state.traps.contains(&state.exit) {
            return Err(InvariantViolation::TrapOnExit);
        }
        if state.quiz_npc_at(state.start).is_some() {
            return Err(InvariantViolation::QuizNpcOnStart);
        }

        let phase_matches = match self.phase {
            Phase::Playing => self.quiz.is_none() && self.victory.is_none(),
            Phase::QuizActive => self.quiz.is_some() && self.victory.is_none(),
            Phase::Victory => self.quiz.is_none() && self.victory.is_some(),
        };
        if !phase_matches {
            return Err(InvariantViolation::PhaseMismatch { phase: self.phase });
        }
        if let Some(quiz) = &self.quiz {
            if !state.quiz_npcs.contains_key(quiz.npc) {
                return Err(InvariantViolation::DanglingQuizTarget);
            }
            let cap = self.config.quiz_input_cap;
            if quiz.input_chars() > cap {
                return Err(InvariantViolation::QuizInputOverCap { len: quiz.input_chars(), cap });
            }
        }

        if state.escort.is_some() && state.level != MAX_LEVEL {
            return Err(InvariantViolation::EscortOffLevel { level: state.level });
        }
        let wants_memory = fog_rule(state.level) == FogRule::ExploredMemory;
        let memory_ok = match &state.explored {
            Some(explored) => wants_memory && explored.is_explored(state.player),
            None => !wants_memory,
        };
        if !memory_ok {
            return Err(InvariantViolation::ExploredMismatch { level: state.level });
        }

        Ok(())
    }
}
