use crate::store::{not_found, DeckSnapshot, DeckStore};
use crate::{record_exposure, CardId, CoreError, Exposure, Flashcard, Judgment};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
struct State {
    version: u64,
    cards: HashMap<CardId, Flashcard>,
}

impl State {
    fn bump(&mut self) {
        self.version += 1;
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store from a snapshot, keeping its version. Later entries
    /// win when ids repeat.
    pub fn from_snapshot(snapshot: DeckSnapshot) -> Self {
        let cards = snapshot
            .cards
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect();
        Self {
            state: RwLock::new(State {
                version: snapshot.version,
                cards,
            }),
        }
    }

    pub fn version(&self) -> u64 {
        self.state.read().version
    }
}

#[async_trait]
impl DeckStore for MemoryStore {
    async fn add_card(
        &self,
        term: &str,
        translation: &str,
        now: DateTime<Utc>,
    ) -> Result<Flashcard, CoreError> {
        if term.trim().is_empty() {
            return Err(CoreError::Invalid("term must not be blank"));
        }
        let card = Flashcard::new(term.trim(), translation.trim(), now);
        self.insert_card(card).await
    }

    async fn insert_card(&self, card: Flashcard) -> Result<Flashcard, CoreError> {
        let mut s = self.state.write();
        if s.cards.contains_key(&card.id) {
            return Err(CoreError::DuplicateCard(card.id));
        }
        s.cards.insert(card.id.clone(), card.clone());
        s.bump();
        Ok(card)
    }

    async fn get_card(&self, id: &str) -> Result<Flashcard, CoreError> {
        self.state
            .read()
            .cards
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn update_card(&self, card: &Flashcard) -> Result<Flashcard, CoreError> {
        let mut s = self.state.write();
        let Some(slot) = s.cards.get_mut(&card.id) else {
            return Err(not_found(&card.id));
        };
        *slot = card.clone();
        s.bump();
        Ok(card.clone())
    }

    async fn delete_card(&self, id: &str) -> Result<(), CoreError> {
        let mut s = self.state.write();
        s.cards.remove(id).ok_or_else(|| not_found(id))?;
        s.bump();
        Ok(())
    }

    async fn record_exposure(
        &self,
        id: &str,
        judgment: Judgment,
        now: DateTime<Utc>,
    ) -> Result<Exposure, CoreError> {
        let mut s = self.state.write();
        let card = s.cards.get(id).cloned().ok_or_else(|| not_found(id))?;
        let out = record_exposure(card, judgment, now);
        debug!(
            "exposure {} {:?}: seen={} hard={} easy={}",
            id,
            judgment,
            out.updated_card.seen_count,
            out.updated_card.hard_count,
            out.updated_card.easy_count
        );
        s.cards.insert(out.updated_card.id.clone(), out.updated_card);
        s.bump();
        Ok(out.exposure)
    }

    async fn snapshot(&self) -> Result<DeckSnapshot, CoreError> {
        let s = self.state.read();
        let mut cards: Vec<Flashcard> = s.cards.values().cloned().collect();
        cards.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(DeckSnapshot::new(s.version, cards))
    }
}
