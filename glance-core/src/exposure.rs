use crate::{CardId, Flashcard};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Learner verdict on a single exposure. Swiping left marks a card hard,
/// swiping right marks it easy.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Judgment {
    Hard,
    Easy,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exposure {
    pub card_id: CardId,
    pub judgment: Judgment,
    pub seen_at: DateTime<Utc>,
}

pub struct ExposureOutcome {
    pub updated_card: Flashcard,
    pub exposure: Exposure,
}

pub fn record_exposure(mut card: Flashcard, judgment: Judgment, now: DateTime<Utc>) -> ExposureOutcome {
    card.seen_count = card.seen_count.saturating_add(1);
    match judgment {
        Judgment::Hard => card.hard_count = card.hard_count.saturating_add(1),
        Judgment::Easy => card.easy_count = card.easy_count.saturating_add(1),
    }
    card.last_seen_date = Some(now);
    card.updated_at = now;
    card.is_new = false;

    let exposure = Exposure {
        card_id: card.id.clone(),
        judgment,
        seen_at: now,
    };

    ExposureOutcome {
        updated_card: card,
        exposure,
    }
}

/// Running hard/easy count for one glance session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionTally {
    pub hard: u32,
    pub easy: u32,
}

impl SessionTally {
    pub fn record(&mut self, j: Judgment) {
        match j {
            Judgment::Hard => self.hard += 1,
            Judgment::Easy => self.easy += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.hard + self.easy
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
