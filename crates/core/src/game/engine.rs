//! Intent dispatch, move resolution and timed updates for the game session.
//! This file wires focused engine submodules together.

use super::*;

mod intent;
mod movement;
mod timers;
