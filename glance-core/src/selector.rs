//! Session selection: picks which cards a study session surfaces.
//!
//! Large decks are split into hard, new and easy tiers. Hard cards fill the
//! session first, with a new card reserved for every `new_card_every`-th
//! slot so the new backlog keeps moving. Easy cards only pad what is left.

use crate::{Flashcard, Tier};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

pub const MAX_SESSION_CARDS: usize = 10;
pub const NEW_CARD_EVERY: usize = 5;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Upper bound on cards per session.
    pub cap: usize,
    /// Every n-th slot goes to a new card when one is left. 0 disables it.
    pub new_card_every: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            cap: MAX_SESSION_CARDS,
            new_card_every: NEW_CARD_EVERY,
        }
    }
}

impl SelectorConfig {
    fn is_new_slot(&self, position: usize) -> bool {
        self.new_card_every > 0 && position % self.new_card_every == self.new_card_every - 1
    }
}

/// Hard tier order: most hard marks, then least seen, then longest unseen.
pub fn compare_hard(a: &Flashcard, b: &Flashcard) -> Ordering {
    b.hard_count
        .cmp(&a.hard_count)
        .then(a.seen_count.cmp(&b.seen_count))
        .then_with(|| compare_last_seen(a, b))
}

/// Easy tier order: least seen, then longest unseen.
pub fn compare_easy(a: &Flashcard, b: &Flashcard) -> Ordering {
    a.seen_count
        .cmp(&b.seen_count)
        .then_with(|| compare_last_seen(a, b))
}

// Absent dates sort before any present date.
fn compare_last_seen(a: &Flashcard, b: &Flashcard) -> Ordering {
    match (a.last_seen_date, b.last_seen_date) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.cmp(&y),
    }
}

struct Session<'a> {
    cap: usize,
    cards: Vec<Flashcard>,
    used: HashSet<&'a str>,
}

impl<'a> Session<'a> {
    fn new(cap: usize) -> Self {
        Self {
            cap,
            cards: Vec::with_capacity(cap),
            used: HashSet::new(),
        }
    }

    fn is_full(&self) -> bool {
        self.cards.len() >= self.cap
    }

    fn push(&mut self, card: &'a Flashcard) {
        if self.used.insert(card.id.as_str()) {
            trace!("slot {} -> {} ({:?})", self.cards.len(), card.id, card.tier());
            self.cards.push(card.clone());
        }
    }
}

pub fn select_for_session(deck: &[Flashcard]) -> Vec<Flashcard> {
    select_for_session_with(deck, &SelectorConfig::default())
}

pub fn select_for_session_with(deck: &[Flashcard], config: &SelectorConfig) -> Vec<Flashcard> {
    if deck.len() <= config.cap {
        return deck.to_vec();
    }

    let mut hard: Vec<&Flashcard> = Vec::new();
    let mut easy: Vec<&Flashcard> = Vec::new();
    let mut new: Vec<&Flashcard> = Vec::new();
    for card in deck {
        match card.tier() {
            Some(Tier::Hard) => hard.push(card),
            Some(Tier::Easy) => easy.push(card),
            Some(Tier::New) => new.push(card),
            None => {}
        }
    }
    hard.sort_by(|a, b| compare_hard(a, b));
    easy.sort_by(|a, b| compare_easy(a, b));
    debug!(
        "selecting from {} cards: hard={} new={} easy={}",
        deck.len(),
        hard.len(),
        new.len(),
        easy.len()
    );

    if hard.is_empty() && new.is_empty() {
        debug!("no hard or new cards; taking least-seen easy cards");
        let mut session = Session::new(config.cap);
        for &card in &easy {
            if session.is_full() {
                break;
            }
            session.push(card);
        }
        return session.cards;
    }

    let mut session = Session::new(config.cap);
    let mut hard_idx = 0;
    let mut new_idx = 0;

    while !session.is_full() && (hard_idx < hard.len() || new_idx < new.len()) {
        let want_new = config.is_new_slot(session.cards.len()) || hard_idx >= hard.len();
        if want_new && new_idx < new.len() {
            session.push(new[new_idx]);
            new_idx += 1;
        } else {
            session.push(hard[hard_idx]);
            hard_idx += 1;
        }
    }

    // Never adds a card: interleaving only stops short of the cap once hard
    // and new are both exhausted.
    for &card in &hard[hard_idx..] {
        if session.is_full() {
            break;
        }
        session.push(card);
    }

    for &card in &easy {
        if session.is_full() {
            break;
        }
        session.push(card);
    }

    session.cards
}
