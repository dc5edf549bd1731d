//! Deadline polling: victory delay, reveal window expiry and the quiz NPC roam clock.

use tracing::debug;

use super::*;
use crate::mapgen::seed::shuffle;

impl Game {
    /// Fires every deadline `now` has reached. Call once per frame, after draining intents.
    pub fn tick(&mut self, now: Millis) {
        if self.victory.is_some_and(|victory| now >= victory.deadline) {
            self.finish_victory(now);
        }

        if self.reveal_until.is_some_and(|until| now >= until) {
            self.reveal_until = None;
            debug!(now, "reveal window closed");
        }

        if now >= self.next_roam_at {
            self.next_roam_at = now.saturating_add(self.config.roam_interval_ms);
            self.roam_quiz_npcs();
        }
    }

    /// One random step per quiz NPC, in spawn order. Frozen while a quiz is open and while
    /// the victory banner is up.
    fn roam_quiz_npcs(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }

        let ids: Vec<QuizNpcId> = self.state.quiz_npcs.keys().collect();
        for id in ids {
            let mut directions = Direction::ALL;
            shuffle(&mut self.rng, &mut directions);

            let Some(npc) = self.state.quiz_npcs.get(id) else {
                continue;
            };
            let step = directions.into_iter().map(|direction| npc.pos.step(direction)).find(
                |next| self.state.map.is_floor(*next) && *next != self.state.start,
            );
            if let Some(next) = step
                && let Some(npc) = self.state.quiz_npcs.get_mut(id)
            {
                npc.pos = next;
            }

            let landed = self.state.quiz_npcs.get(id).map(|npc| npc.pos);
            if self.quiz.is_none() && landed == Some(self.state.player) {
                self.start_quiz(id);
            }
        }
    }
}
