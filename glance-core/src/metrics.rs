use crate::Flashcard;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Window assumed when no card has been studied yet.
pub const FALLBACK_ACTIVE_DAYS: i64 = 7;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MetricsSummary {
    pub total_cards_in_deck: usize,
    pub mastered_cards_count: usize,
    pub mastered_cards_percentage: u32,
    pub new_cards_remaining: usize,
    pub avg_hard_attempts_per_mastered_card: f64,
    pub avg_seen_count_per_mastered_card: f64,
    pub re_hardened_cards_count: usize,
    pub current_hard_cards_count: usize,
    pub average_daily_reviews: f64,
}

/// Whole days between the earliest study exposure and `now`, never below 1.
pub fn days_active(deck: &[Flashcard], now: DateTime<Utc>) -> i64 {
    let earliest = deck
        .iter()
        .filter_map(|c| c.last_seen_date)
        .min()
        .unwrap_or_else(|| now - Duration::days(FALLBACK_ACTIVE_DAYS));

    // Any remainder past a whole day counts as another day, down to the
    // nanosecond.
    let elapsed = now - earliest;
    let whole = elapsed.num_days();
    let days = if elapsed > Duration::days(whole) {
        whole + 1
    } else {
        whole
    };
    days.max(1)
}

fn mean(values: impl Iterator<Item = u32>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.map(f64::from).sum::<f64>() / count as f64
}

pub fn compute_metrics(deck: &[Flashcard], now: DateTime<Utc>) -> MetricsSummary {
    let total = deck.len();
    let mastered: Vec<&Flashcard> = deck.iter().filter(|c| c.is_mastered()).collect();

    let mastered_cards_percentage = if total == 0 {
        0
    } else {
        (mastered.len() as f64 / total as f64 * 100.0).round() as u32
    };

    let total_seen: u64 = deck.iter().map(|c| u64::from(c.seen_count)).sum();
    let days = days_active(deck, now);

    MetricsSummary {
        total_cards_in_deck: total,
        mastered_cards_count: mastered.len(),
        mastered_cards_percentage,
        new_cards_remaining: deck.iter().filter(|c| c.is_new).count(),
        avg_hard_attempts_per_mastered_card: mean(
            mastered.iter().map(|c| c.hard_count),
            mastered.len(),
        ),
        avg_seen_count_per_mastered_card: mean(
            mastered.iter().map(|c| c.seen_count),
            mastered.len(),
        ),
        re_hardened_cards_count: deck.iter().filter(|c| c.is_re_hardened()).count(),
        current_hard_cards_count: deck.iter().filter(|c| c.is_hard()).count(),
        average_daily_reviews: total_seen as f64 / days as f64,
    }
}
