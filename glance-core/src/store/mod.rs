use crate::{
    compute_metrics, select_for_session_with, CardId, CoreError, Exposure, Flashcard, Judgment,
    MetricsSummary, SelectorConfig,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod memory;

/// Owned copy of a deck at one store version. The selector and metrics only
/// ever see snapshots, never live store state.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DeckSnapshot {
    pub version: u64,
    pub cards: Vec<Flashcard>,
}

impl DeckSnapshot {
    pub fn new(version: u64, cards: Vec<Flashcard>) -> Self {
        Self { version, cards }
    }

    pub fn from_json(s: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn session(&self, config: &SelectorConfig) -> Vec<Flashcard> {
        select_for_session_with(&self.cards, config)
    }

    pub fn metrics(&self, now: DateTime<Utc>) -> MetricsSummary {
        compute_metrics(&self.cards, now)
    }
}

#[async_trait]
pub trait DeckStore: Send + Sync {
    async fn add_card(
        &self,
        term: &str,
        translation: &str,
        now: DateTime<Utc>,
    ) -> Result<Flashcard, CoreError>;
    async fn insert_card(&self, card: Flashcard) -> Result<Flashcard, CoreError>;
    async fn get_card(&self, id: &str) -> Result<Flashcard, CoreError>;
    async fn update_card(&self, card: &Flashcard) -> Result<Flashcard, CoreError>;
    async fn delete_card(&self, id: &str) -> Result<(), CoreError>;

    async fn record_exposure(
        &self,
        id: &str,
        judgment: Judgment,
        now: DateTime<Utc>,
    ) -> Result<Exposure, CoreError>;

    async fn snapshot(&self) -> Result<DeckSnapshot, CoreError>;
}

pub(crate) fn not_found(id: &str) -> CoreError {
    CoreError::CardNotFound(CardId::from(id))
}
