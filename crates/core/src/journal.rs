//! In-memory input journal: every accepted intent and tick call, stamped with the caller's clock.
//! Timestamps are milliseconds on the same origin the journaled game was created at (`now = 0`).

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::{Intent, Millis};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub config: GameConfig,
    pub records: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub at_ms: Millis,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPayload {
    Intent(Intent),
    Tick,
}

impl InputJournal {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, config, records: Vec::new() }
    }

    pub fn append_intent(&mut self, at_ms: Millis, intent: Intent) {
        self.push(at_ms, InputPayload::Intent(intent));
    }

    pub fn append_tick(&mut self, at_ms: Millis) {
        self.push(at_ms, InputPayload::Tick);
    }

    fn push(&mut self, at_ms: Millis, payload: InputPayload) {
        let seq = self.records.len() as u64;
        self.records.push(InputRecord { seq, at_ms, payload });
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
