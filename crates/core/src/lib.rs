pub mod config;
pub mod content;
pub mod game;
pub mod journal;
pub mod mapgen;
pub mod replay;
pub mod state;
pub mod types;

pub use config::{ConfigError, GameConfig};
pub use game::{Banner, FrameView, Game, QuizSession};
pub use journal::{InputJournal, InputPayload, InputRecord};
pub use replay::*;
pub use state::{GameState, Map};
pub use types::*;
