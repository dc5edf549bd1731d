//! Probe-guarded placement of entities that block the player: the two-cell hazard and the
//! dormant escort. A candidate is committed only if start and exit stay connected with it
//! treated as wall; the grid itself is never left modified.

use std::collections::BTreeSet;

use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::state::Map;
use crate::types::{Direction, Pos};

use super::super::progression::{
    HAZARD_CHANCE_PERCENT, PLACEMENT_ATTEMPTS, escort_allowed, hazard_allowed,
};
use super::super::reachability::stays_connected_without;
use super::super::seed::{roll_inclusive, roll_percent, shuffle};

pub(super) struct BlockerContext<'a> {
    pub(super) map: &'a mut Map,
    pub(super) rng: &'a mut ChaCha8Rng,
    pub(super) level: u8,
    pub(super) start: Pos,
    pub(super) exit: Pos,
    pub(super) reserved: &'a BTreeSet<Pos>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HazardOutcome {
    NotOnThisLevel,
    SkippedByRoll,
    Placed([Pos; 2]),
    Exhausted,
}

impl HazardOutcome {
    pub fn cells(self) -> Option<[Pos; 2]> {
        match self {
            HazardOutcome::Placed(cells) => Some(cells),
            _ => None,
        }
    }
}

pub(super) fn place_hazard(context: &mut BlockerContext<'_>) -> HazardOutcome {
    if !hazard_allowed(context.level) {
        return HazardOutcome::NotOnThisLevel;
    }
    if !roll_percent(context.rng, HAZARD_CHANCE_PERCENT) {
        return HazardOutcome::SkippedByRoll;
    }

    for _ in 0..PLACEMENT_ATTEMPTS {
        let base = random_interior_cell(context.map, context.rng);
        if !context.map.is_floor(base) || context.reserved.contains(&base) {
            continue;
        }

        let mut directions = Direction::ALL;
        shuffle(context.rng, &mut directions);
        for direction in directions {
            let partner = base.step(direction);
            if !context.map.is_floor(partner) || context.reserved.contains(&partner) {
                continue;
            }
            let cells = [base, partner];
            if stays_connected_without(context.map, &cells, context.start, context.exit) {
                return HazardOutcome::Placed(cells);
            }
        }
    }

    debug!(level = context.level, "hazard placement exhausted its attempts");
    HazardOutcome::Exhausted
}

/// `walls` are cells already impassable to the player (the hazard), probed together with
/// each escort candidate.
pub(super) fn place_escort(context: &mut BlockerContext<'_>, walls: &[Pos]) -> Option<Pos> {
    if !escort_allowed(context.level) {
        return None;
    }

    for _ in 0..PLACEMENT_ATTEMPTS {
        let candidate = random_interior_cell(context.map, context.rng);
        if !context.map.is_floor(candidate) || context.reserved.contains(&candidate) {
            continue;
        }
        let mut cells = walls.to_vec();
        cells.push(candidate);
        if stays_connected_without(context.map, &cells, context.start, context.exit) {
            return Some(candidate);
        }
    }

    debug!(level = context.level, "escort placement exhausted its attempts");
    None
}

fn random_interior_cell(map: &Map, rng: &mut ChaCha8Rng) -> Pos {
    let y = roll_inclusive(rng, 1..=map.rows() - 2);
    let x = roll_inclusive(rng, 1..=map.cols() - 2);
    Pos { y: y as i32, x: x as i32 }
}
