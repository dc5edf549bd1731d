//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from simulation control code.
//! It does not own replay execution or journal policies.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::state::Map;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.generation);
        hasher.write_u8(self.state.level);
        hasher.write_u8(match self.phase {
            Phase::Playing => 0,
            Phase::QuizActive => 1,
            Phase::Victory => 2,
        });
        write_pos(&mut hasher, self.state.player);
        write_map(&mut hasher, &self.state.map);

        let mut traps: Vec<Pos> = self.state.traps.iter().copied().collect();
        traps.sort_unstable();
        hasher.write_usize(traps.len());
        for trap in traps {
            write_pos(&mut hasher, trap);
        }

        match self.state.hazard {
            Some(hazard) => {
                hasher.write_u8(1 + u8::from(hazard.triggered));
                hazard.cells.iter().for_each(|cell| write_pos(&mut hasher, *cell));
            }
            None => hasher.write_u8(0),
        }
        match self.state.escort {
            Some(escort) => {
                hasher.write_u8(1 + u8::from(escort.activated));
                write_pos(&mut hasher, escort.pos);
            }
            None => hasher.write_u8(0),
        }

        hasher.write_usize(self.state.quiz_npcs.len());
        for npc in self.state.quiz_npcs.values() {
            write_pos(&mut hasher, npc.pos);
            hasher.write(npc.question.map_or("", |question| question.question).as_bytes());
        }
        if let Some(quiz) = &self.quiz {
            hasher.write(quiz.input.as_bytes());
            hasher.write_u8(u8::from(quiz.focused));
        }

        if let Some(explored) = &self.state.explored {
            for cell in explored.cells() {
                hasher.write_u8(u8::from(*cell));
            }
        }
        hasher.write_u32(self.state.exit_attempts);
        hasher.write_u64(self.victory.map_or(0, |victory| victory.deadline));
        hasher.write_u64(self.reveal_until.unwrap_or(0));
        hasher.write_u64(self.next_roam_at);
        hasher.finish()
    }
}

fn write_pos(hasher: &mut Xxh3, pos: Pos) {
    hasher.write_i32(pos.y);
    hasher.write_i32(pos.x);
}

fn write_map(hasher: &mut Xxh3, map: &Map) {
    hasher.write_usize(map.cols());
    hasher.write_usize(map.rows());
    for tile in &map.tiles {
        hasher.write_u8(match tile {
            TileKind::Wall => 0,
            TileKind::Floor => 1,
        });
    }
}
