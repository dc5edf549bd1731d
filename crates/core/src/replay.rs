use thiserror::Error;

use crate::config::ConfigError;
use crate::game::Game;
use crate::journal::{InputJournal, InputPayload, JOURNAL_FORMAT_VERSION};
use crate::types::{GameError, Millis, Phase};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("journal format {found} is not supported (expected {JOURNAL_FORMAT_VERSION})")]
    UnsupportedFormat { found: u16 },
    #[error("journal config is invalid")]
    Config(#[from] ConfigError),
    #[error("record {seq} at {at_ms}ms is earlier than the record before it")]
    OutOfOrder { seq: u64, at_ms: Millis },
    #[error("record {seq} was rejected by the replayed game")]
    RejectedIntent {
        seq: u64,
        #[source]
        source: GameError,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub level: u8,
    pub phase: Phase,
    pub generation: u64,
    pub records_applied: usize,
    pub snapshot_hash: u64,
}

/// Rebuilds the game from the journal's seed and config and re-applies every record in order.
pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedFormat { found: journal.format_version });
    }

    let mut game = Game::new(journal.seed, journal.config.clone(), 0)?;
    let mut last_at = 0;
    for record in &journal.records {
        if record.at_ms < last_at {
            return Err(ReplayError::OutOfOrder { seq: record.seq, at_ms: record.at_ms });
        }
        last_at = record.at_ms;

        match &record.payload {
            InputPayload::Intent(intent) => {
                game.apply_intent(intent.clone(), record.at_ms)
                    .map_err(|source| ReplayError::RejectedIntent { seq: record.seq, source })?;
            }
            InputPayload::Tick => game.tick(record.at_ms),
        }
    }

    Ok(ReplayResult {
        level: game.level(),
        phase: game.phase(),
        generation: game.generation(),
        records_applied: journal.records.len(),
        snapshot_hash: game.snapshot_hash(),
    })
}
