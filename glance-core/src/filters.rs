use crate::{Flashcard, Tier};

/// Home feed order: most recently created first.
pub fn newest_first(cards: &[Flashcard]) -> Vec<Flashcard> {
    let mut v = cards.to_vec();
    v.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    v
}

pub fn filter_by_text(cards: &[Flashcard], query: &str) -> Vec<Flashcard> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return cards.to_vec();
    }
    cards
        .iter()
        .filter(|c| {
            c.term.to_lowercase().contains(&q)
                || c.translation.to_lowercase().contains(&q)
                || c.synonyms.iter().any(|s| s.to_lowercase().contains(&q))
                || c.other_translations
                    .iter()
                    .any(|t| t.to_lowercase().contains(&q))
        })
        .cloned()
        .collect()
}

pub fn filter_by_tier(cards: &[Flashcard], want: Tier) -> Vec<Flashcard> {
    cards
        .iter()
        .filter(|c| c.tier() == Some(want))
        .cloned()
        .collect()
}
