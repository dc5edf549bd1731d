//! Level progression rules used by maze generation and entity placement.

use std::ops::RangeInclusive;

pub const STARTING_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 3;

pub(crate) const TRAP_COUNT: RangeInclusive<usize> = 3..=7;
pub(crate) const QUIZ_NPC_COUNT: RangeInclusive<usize> = 5..=6;
pub(crate) const PLACEMENT_ATTEMPTS: usize = 200;
pub(crate) const HAZARD_CHANCE_PERCENT: usize = 50;

/// How much of the maze the player can see on a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FogRule {
    FullView,
    ExploredMemory,
    WindowOnly,
}

pub fn fog_rule(level: u8) -> FogRule {
    match level {
        0 | 1 => FogRule::FullView,
        2 => FogRule::ExploredMemory,
        _ => FogRule::WindowOnly,
    }
}

pub(crate) fn hazard_allowed(level: u8) -> bool {
    (2..=MAX_LEVEL).contains(&level)
}

pub(crate) fn escort_allowed(level: u8) -> bool {
    level == MAX_LEVEL
}

pub fn is_final_level(level: u8) -> bool {
    level >= MAX_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fog_tightens_with_each_level() {
        assert_eq!(fog_rule(1), FogRule::FullView);
        assert_eq!(fog_rule(2), FogRule::ExploredMemory);
        assert_eq!(fog_rule(3), FogRule::WindowOnly);
    }

    #[test]
    fn hazard_and_escort_levels() {
        assert!(!hazard_allowed(1));
        assert!(hazard_allowed(2) && hazard_allowed(3));
        assert!(!escort_allowed(2));
        assert!(escort_allowed(3));
    }
}
