use crate::CardId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("card not found: {0}")]
    CardNotFound(CardId),
    #[error("duplicate card id: {0}")]
    DuplicateCard(CardId),
    #[error("invalid input: {0}")]
    Invalid(&'static str),
    #[error("malformed deck snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
