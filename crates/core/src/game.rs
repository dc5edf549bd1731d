//! Game session: owns the live maze state, the phase machine and every pending deadline.
//! This module exists to give callers one handle for intents, ticks and frame snapshots.
//! It does not own maze construction (see `mapgen`) or any clock; time always comes in as
//! `now`.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use tracing::info;

use crate::config::{ConfigError, GameConfig};
use crate::mapgen::{MazeGenerator, START_POS, STARTING_LEVEL};
use crate::mapgen::seed::{derive_maze_seed, mix_seed_stream};
use crate::state::GameState;
use crate::types::*;

mod engine;
pub mod frame;
mod hash;
mod invariants;
mod level_transition;
mod messages;
mod quiz;
pub mod visibility;

#[cfg(test)]
mod test_support;

pub use frame::{Banner, FrameView};
pub use invariants::InvariantViolation;
pub use quiz::QuizSession;

use level_transition::build_state;
use messages::MessageBanner;

const RUNTIME_RNG_STREAM: u64 = 0x7275_6e74_696d_6521;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingVictory {
    deadline: Millis,
    cleared_level: u8,
}

pub struct Game {
    seed: u64,
    config: GameConfig,
    generator: MazeGenerator,
    rng: ChaCha8Rng,
    state: GameState,
    phase: Phase,
    /// Mazes generated so far in this session, the first one included.
    generation: u64,
    quiz: Option<QuizSession>,
    messages: MessageBanner,
    victory: Option<PendingVictory>,
    reveal_until: Option<Millis>,
    next_roam_at: Millis,
    log: Vec<LogEvent>,
}

impl Game {
    pub fn new(seed: u64, config: GameConfig, now: Millis) -> Result<Self, ConfigError> {
        config.validate()?;
        let generator = MazeGenerator::new(&config);
        let generation = 1;
        let maze_seed = derive_maze_seed(seed, generation, STARTING_LEVEL);
        let generated = generator.generate(maze_seed, STARTING_LEVEL, START_POS);
        let state = build_state(generated, START_POS, config.path_history_len);

        let mut game = Self {
            seed,
            generator,
            rng: ChaCha8Rng::seed_from_u64(mix_seed_stream(seed, RUNTIME_RNG_STREAM)),
            state,
            phase: Phase::Playing,
            generation,
            quiz: None,
            messages: MessageBanner::default(),
            victory: None,
            reveal_until: None,
            next_roam_at: now.saturating_add(config.roam_interval_ms),
            log: Vec::new(),
            config,
        };
        game.record_generation();
        info!(seed, "game session started");
        Ok(game)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> u8 {
        self.state.level
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn quiz(&self) -> Option<&QuizSession> {
        self.quiz.as_ref()
    }

    /// The contextual message currently on screen, if any.
    pub fn message(&self) -> Option<&'static str> {
        self.messages.current()
    }

    pub fn victory_deadline(&self) -> Option<Millis> {
        self.victory.map(|victory| victory.deadline)
    }

    pub fn reveal_until(&self) -> Option<Millis> {
        self.reveal_until
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }
}
