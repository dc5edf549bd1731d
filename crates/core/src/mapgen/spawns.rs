//! Trap and quiz NPC spawn selection. Both draw distinct floor cells from whatever the
//! earlier placement steps left free.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;

use crate::state::Map;
use crate::types::Pos;

use super::progression::{QUIZ_NPC_COUNT, TRAP_COUNT};
use super::seed::{roll_inclusive, sample};

pub(super) struct SpawnContext<'a> {
    pub(super) map: &'a Map,
    pub(super) reserved: &'a BTreeSet<Pos>,
}

impl SpawnContext<'_> {
    fn free_floor(&self) -> Vec<Pos> {
        self.map.floor_cells().filter(|pos| !self.reserved.contains(pos)).collect()
    }
}

pub(super) fn generate_trap_spawns(context: &SpawnContext<'_>, rng: &mut ChaCha8Rng) -> Vec<Pos> {
    let count = roll_inclusive(rng, TRAP_COUNT);
    let mut traps = sample(rng, &context.free_floor(), count);
    traps.sort_unstable();
    traps
}

/// Spawn order is kept: roaming NPCs later move in list order.
pub(super) fn generate_quiz_spawns(context: &SpawnContext<'_>, rng: &mut ChaCha8Rng) -> Vec<Pos> {
    let count = roll_inclusive(rng, QUIZ_NPC_COUNT);
    sample(rng, &context.free_floor(), count)
}
