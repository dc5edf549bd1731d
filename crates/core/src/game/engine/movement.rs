//! Single-step move resolution: passability, exit, traps, hazard proximity, escort and quiz
//! encounters, in that order.

use super::*;
use crate::content::{exit_reminder, messages};
use crate::mapgen::grid::{chebyshev, manhattan};
use crate::mapgen::is_final_level;
use crate::mapgen::seed::choose;

/// How far behind the player an activated escort trails, in recorded moves.
const ESCORT_LAG: usize = 2;

impl Game {
    pub(super) fn move_player(&mut self, direction: Direction, now: Millis) -> IntentOutcome {
        let target = self.state.player.step(direction);
        if let Some(reason) = self.blocked_by(target) {
            return IntentOutcome::Blocked(reason);
        }

        self.state.player = target;
        self.mark_explored(target);
        self.state.path_history.push(target);
        let mut report = MoveReport { to: target, ..MoveReport::default() };

        if target == self.state.exit {
            if self.escort_blocks_exit() {
                report.exit = Some(self.refuse_exit());
            } else {
                report.exit = Some(ExitOutcome::Victory { cleared_level: self.state.level });
                self.clear_level(now);
                return IntentOutcome::Moved(report);
            }
        }

        if self.state.traps.remove(&target) {
            let outcome = self.spring_trap(target);
            self.log.push(LogEvent::TrapSprung { at: target, outcome });
            report.trap = Some(outcome);
        }

        report.hazard_triggered = self.check_hazard_proximity(now);
        report.escort = self.update_escort();

        if let Some(npc) = self.state.quiz_npc_at(self.state.player)
            && self.start_quiz(npc)
        {
            report.quiz_started = Some(npc);
        }

        IntentOutcome::Moved(report)
    }

    fn blocked_by(&self, target: Pos) -> Option<BlockReason> {
        if !self.state.map.in_bounds(target) {
            return Some(BlockReason::OutOfBounds);
        }
        if !self.state.map.is_floor(target) {
            return Some(BlockReason::Wall);
        }
        if self.state.is_hazard_cell(target) {
            return Some(BlockReason::Hazard);
        }
        if self.state.escort.is_some_and(|escort| !escort.activated && escort.pos == target) {
            return Some(BlockReason::DormantEscort);
        }
        None
    }

    fn escort_blocks_exit(&self) -> bool {
        is_final_level(self.state.level)
            && self.state.escort.is_some_and(|escort| escort.is_following())
    }

    fn refuse_exit(&mut self) -> ExitOutcome {
        self.state.exit_attempts += 1;
        let attempts = self.state.exit_attempts;
        self.messages.show(exit_reminder(attempts));
        self.log.push(LogEvent::ExitBlocked { attempts });
        ExitOutcome::BlockedByEscort { attempts }
    }

    /// Sends the player to a random floor cell that is not a trap, the exit, a hazard cell or
    /// the trap just sprung.
    fn spring_trap(&mut self, sprung: Pos) -> TeleportOutcome {
        let state = &self.state;
        let destinations: Vec<Pos> = state
            .map
            .floor_cells()
            .filter(|pos| {
                *pos != sprung
                    && *pos != state.exit
                    && !state.traps.contains(pos)
                    && !state.is_hazard_cell(*pos)
            })
            .collect();

        let Some(to) = choose(&mut self.rng, &destinations) else {
            return TeleportOutcome::StayedPut;
        };
        self.state.player = to;
        self.mark_explored(to);
        TeleportOutcome::Teleported { to }
    }

    fn check_hazard_proximity(&mut self, now: Millis) -> bool {
        let player = self.state.player;
        let Some(hazard) = self.state.hazard.as_mut() else {
            return false;
        };
        if hazard.triggered || !hazard.cells.iter().any(|cell| manhattan(*cell, player) == 1) {
            return false;
        }

        hazard.triggered = true;
        let reveal_until = now.saturating_add(self.config.reveal_window_ms);
        self.reveal_until = Some(reveal_until);
        self.log.push(LogEvent::HazardTriggered { reveal_until });
        true
    }

    fn update_escort(&mut self) -> Option<EscortEvent> {
        let player = self.state.player;
        let trailing = self.state.path_history.back(ESCORT_LAG);
        let radius = self.config.view_radius.unsigned_abs();
        let escort = self.state.escort.as_mut()?;

        let mut event = None;
        if !escort.activated && chebyshev(escort.pos, player) <= radius {
            escort.activated = true;
            if let Some(pos) = trailing {
                escort.pos = pos;
            }
            let pos = escort.pos;
            self.messages.show(messages::ESCORT_ACTIVATED);
            self.log.push(LogEvent::EscortActivated { pos });
            event = Some(EscortEvent::Activated);
        } else if escort.is_following()
            && let Some(to) = trailing
        {
            escort.pos = to;
            event = Some(EscortEvent::Followed { to });
        }

        let start = self.state.start;
        if let Some(escort) = self.state.escort.as_mut()
            && escort.is_following()
            && player == start
        {
            escort.delivered = true;
            self.state.escort = None;
            self.state.exit_attempts = 0;
            self.messages.show(messages::ESCORT_DELIVERED);
            self.log.push(LogEvent::EscortDelivered);
            event = Some(EscortEvent::Delivered);
        }

        event
    }
}
