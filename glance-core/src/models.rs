use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type CardId = String;

/// Minimum number of easy marks before a card can count as mastered.
pub const MASTERED_THRESHOLD: u32 = 5;
/// Easy marks must outnumber hard marks by at least this factor.
pub const MASTERED_RATIO: u32 = 3;
/// Share of hard judgments above which a card is considered re-hardened.
pub const RE_HARDENED_RATIO: f64 = 0.3;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    New,
    Hard,
    Easy,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExampleSentence {
    pub original: String,
    pub translated: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flashcard {
    pub id: CardId,

    pub term: String,
    pub translation: String,
    #[serde(default)]
    pub example: ExampleSentence,
    #[serde(default)]
    pub verb_forms: Vec<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub other_translations: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_seen_date: Option<DateTime<Utc>>,
    pub seen_count: u32,
    pub hard_count: u32,
    pub easy_count: u32,
    pub is_new: bool,
}

impl Flashcard {
    pub fn new(term: impl Into<String>, translation: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            term: term.into(),
            translation: translation.into(),
            example: ExampleSentence::default(),
            verb_forms: Vec::new(),
            synonyms: Vec::new(),
            other_translations: Vec::new(),
            created_at: now,
            updated_at: now,
            last_seen_date: None,
            seen_count: 0,
            hard_count: 0,
            easy_count: 0,
            is_new: true,
        }
    }

    /// Derived study tier. `None` for a card with no exposures that is no
    /// longer flagged new; regular exposures never produce that state.
    pub fn tier(&self) -> Option<Tier> {
        if self.is_new {
            Some(Tier::New)
        } else if self.seen_count > 0 && self.hard_count > self.easy_count {
            Some(Tier::Hard)
        } else if self.seen_count > 0 {
            Some(Tier::Easy)
        } else {
            None
        }
    }

    pub fn is_hard(&self) -> bool {
        self.seen_count > 0 && self.hard_count > self.easy_count
    }

    pub fn is_mastered(&self) -> bool {
        self.easy_count >= MASTERED_THRESHOLD
            && self.easy_count >= MASTERED_RATIO.saturating_mul(self.hard_count)
    }

    pub fn is_re_hardened(&self) -> bool {
        if self.hard_count == 0 || self.easy_count == 0 {
            return false;
        }
        let judged = self.hard_count as f64 + self.easy_count as f64;
        self.hard_count as f64 / judged > RE_HARDENED_RATIO
    }
}
