//! Deterministic seed mixing and random roll helpers shared by generation and gameplay.

use std::ops::RangeInclusive;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub(crate) fn mix_seed_stream(seed: u64, stream: u64) -> u64 {
    let mut mixed = seed ^ stream.wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    mixed ^ (mixed >> 33)
}

pub(crate) fn derive_maze_seed(run_seed: u64, generation: u64, level: u8) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= generation.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= u64::from(level).wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

pub(crate) fn maze_rng(maze_seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(maze_seed)
}

pub(crate) fn roll_inclusive(rng: &mut ChaCha8Rng, range: RangeInclusive<usize>) -> usize {
    let (min_value, max_value) = (*range.start(), *range.end());
    debug_assert!(min_value <= max_value);
    let range_size = (max_value - min_value + 1) as u64;
    min_value + (rng.next_u64() % range_size) as usize
}

pub(crate) fn roll_percent(rng: &mut ChaCha8Rng, percent: usize) -> bool {
    roll_inclusive(rng, 0..=99) < percent
}

pub(crate) fn shuffle<T>(rng: &mut ChaCha8Rng, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        items.swap(i, j);
    }
}

/// Picks `count` distinct entries (clamped to the pool size) via a partial Fisher-Yates pass.
pub(crate) fn sample<T: Copy>(rng: &mut ChaCha8Rng, pool: &[T], count: usize) -> Vec<T> {
    let mut scratch = pool.to_vec();
    let count = count.min(scratch.len());
    for i in 0..count {
        let remaining = (scratch.len() - i) as u64;
        let j = i + (rng.next_u64() % remaining) as usize;
        scratch.swap(i, j);
    }
    scratch.truncate(count);
    scratch
}

pub(crate) fn choose<T: Copy>(rng: &mut ChaCha8Rng, pool: &[T]) -> Option<T> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[(rng.next_u64() % pool.len() as u64) as usize])
}
