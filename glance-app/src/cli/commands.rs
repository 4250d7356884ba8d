use crate::cli::opts::*;
use crate::deck_file;

use anyhow::Result;
use chrono::{DateTime, Utc};
use glance_core::{
    filter_by_text, filter_by_tier, newest_first, store::memory::MemoryStore, DeckStore,
    Flashcard, Judgment, MetricsSummary, SessionTally, Tier,
};
use serde::Serialize;
use std::io::{stdin, stdout, Write};

pub async fn run_cli(args: Cli) -> Result<()> {
    let path = args.deck.clone().unwrap_or_else(deck_file::default_deck_file);
    let now = args.now.unwrap_or_else(Utc::now);
    let store = MemoryStore::from_snapshot(deck_file::load(&path).await?);
    let start_version = store.version();

    match args.cmd {
        Command::Session(cmd) => session_cmd(&store, cmd).await?,
        Command::Stats(cmd) => stats_cmd(&store, cmd, now).await?,
        Command::Add(cmd) => add_cmd(&store, cmd, now).await?,
        Command::List(cmd) => list_cmd(&store, cmd).await?,
        Command::Rm { card_id } => {
            store.delete_card(&card_id).await?;
            println!("ok");
        }
        Command::Review(cmd) => review_cmd(&store, cmd, args.now).await?,
    }

    if store.version() != start_version {
        deck_file::save(&path, &store.snapshot().await?).await?;
    }
    Ok(())
}

#[derive(Serialize)]
struct SessionRow<'a> {
    id: &'a str,
    tier: &'static str,
    term: &'a str,
    translation: &'a str,
}

fn tier_label(card: &Flashcard) -> &'static str {
    match card.tier() {
        Some(Tier::New) => "new",
        Some(Tier::Hard) => "hard",
        Some(Tier::Easy) => "easy",
        None => "-",
    }
}

async fn session_cmd(store: &MemoryStore, cmd: SessionCmd) -> Result<()> {
    let snap = store.snapshot().await?;
    let session = snap.session(&cmd.selector.config());

    if cmd.json {
        let rows: Vec<SessionRow> = session
            .iter()
            .map(|c| SessionRow {
                id: &c.id,
                tier: tier_label(c),
                term: &c.term,
                translation: &c.translation,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if session.is_empty() {
        println!("no cards available");
        return Ok(());
    }
    for (i, c) in session.iter().enumerate() {
        println!("{}\t{}\t{}\t{}\t{}", i + 1, c.id, tier_label(c), c.term, c.translation);
    }
    Ok(())
}

async fn stats_cmd(store: &MemoryStore, cmd: StatsCmd, now: DateTime<Utc>) -> Result<()> {
    let m = store.snapshot().await?.metrics(now);
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&m)?);
    } else {
        print_metrics(&m);
    }
    Ok(())
}

fn print_metrics(m: &MetricsSummary) {
    println!("cards in deck            {}", m.total_cards_in_deck);
    println!(
        "mastered                 {} ({}%)",
        m.mastered_cards_count, m.mastered_cards_percentage
    );
    println!("hard attempts / mastered {:.2}", m.avg_hard_attempts_per_mastered_card);
    println!("reviews / mastered       {:.2}", m.avg_seen_count_per_mastered_card);
    println!("new remaining            {}", m.new_cards_remaining);
    println!("re-hardened              {}", m.re_hardened_cards_count);
    println!("currently hard           {}", m.current_hard_cards_count);
    println!("daily reviews            {:.2}", m.average_daily_reviews);
}

async fn add_cmd(store: &MemoryStore, cmd: AddCmd, now: DateTime<Utc>) -> Result<()> {
    let mut card = store.add_card(&cmd.term, &cmd.translation, now).await?;
    if cmd.has_extras() {
        card.synonyms = cmd.synonyms;
        card.verb_forms = cmd.verb_forms;
        card.other_translations = cmd.other_translations;
        card.example.original = cmd.example.unwrap_or_default();
        card.example.translated = cmd.example_translated.unwrap_or_default();
        card = store.update_card(&card).await?;
    }
    println!("{}", card.id);
    Ok(())
}

async fn list_cmd(store: &MemoryStore, cmd: ListCmd) -> Result<()> {
    let mut cards = store.snapshot().await?.cards;
    if let Some(q) = &cmd.query {
        cards = filter_by_text(&cards, q);
    }
    if let Some(t) = cmd.tier {
        cards = filter_by_tier(&cards, t.into());
    }
    for c in newest_first(&cards) {
        let last = c
            .last_seen_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "never".to_string());
        println!(
            "{}\t{}\t{}\t{}\tseen={} hard={} easy={} last={}",
            c.id,
            tier_label(&c),
            c.term,
            c.translation,
            c.seen_count,
            c.hard_count,
            c.easy_count,
            last
        );
    }
    Ok(())
}

async fn review_cmd(
    store: &MemoryStore,
    cmd: ReviewCmd,
    fixed_now: Option<DateTime<Utc>>,
) -> Result<()> {
    let session = store.snapshot().await?.session(&cmd.selector.config());
    if session.is_empty() {
        println!("no cards available, add some to start learning");
        return Ok(());
    }

    let mut tally = SessionTally::default();
    let total = session.len();
    for (i, card) in session.iter().enumerate() {
        println!("\n[{}/{}] {}", i + 1, total, card.term);
        prompt_enter("[enter=show]")?;
        println!("{}", card.translation);
        if !card.example.original.is_empty() {
            println!("  {}", card.example.original);
            println!("  {}", card.example.translated);
        }
        println!("[h=hard, e=easy, s=skip, q=quit]");
        let judgment = loop {
            let line = read_line("> ")?;
            match line.trim().to_lowercase().as_str() {
                "h" | "hard" | "1" => break Some(Judgment::Hard),
                "e" | "easy" | "2" => break Some(Judgment::Easy),
                "s" | "skip" => break None,
                "q" | "quit" => {
                    print_tally(&tally);
                    return Ok(());
                }
                "" => println!("enter h, e, s, or q"),
                other => println!("unknown answer {other:?}: enter h, e, s, or q"),
            }
        };

        if let Some(j) = judgment {
            let now = fixed_now.unwrap_or_else(Utc::now);
            store.record_exposure(&card.id, j, now).await?;
            tally.record(j);
        }
    }

    println!("\nall cards done");
    print_tally(&tally);
    Ok(())
}

fn print_tally(tally: &SessionTally) {
    println!("hard: {}  easy: {}  total: {}", tally.hard, tally.easy, tally.total());
}

fn prompt_enter(label: &str) -> Result<()> {
    print!("{label}");
    stdout().flush().ok();
    let mut s = String::new();
    stdin().read_line(&mut s)?;
    Ok(())
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    stdout().flush().ok();
    let mut s = String::new();
    // EOF quits
    if stdin().read_line(&mut s)? == 0 {
        return Ok("q".to_string());
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clap::Parser;

    #[tokio::test]
    async fn add_keeps_every_optional_field() {
        let args = Cli::try_parse_from([
            "glance",
            "add",
            "--term",
            "gehen",
            "--translation",
            "to go",
            "--verb-form",
            "ging",
            "--verb-form",
            "gegangen",
            "--other-translation",
            "to walk",
            "--example-translated",
            "I go home",
        ])
        .unwrap();
        let Command::Add(cmd) = args.cmd else {
            panic!("expected add command");
        };
        assert!(cmd.has_extras());

        let store = MemoryStore::new();
        let now = Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap();
        add_cmd(&store, cmd, now).await.unwrap();

        let card = store.snapshot().await.unwrap().cards.remove(0);
        assert_eq!(card.verb_forms, vec!["ging", "gegangen"]);
        assert_eq!(card.other_translations, vec!["to walk"]);
        assert!(card.synonyms.is_empty());
        assert_eq!(card.example.original, "");
        assert_eq!(card.example.translated, "I go home");
        assert!(card.is_new);
        assert_eq!(filter_by_text(&[card], "walk").len(), 1);
    }

    #[test]
    fn add_without_extras() {
        let args =
            Cli::try_parse_from(["glance", "add", "--term", "Brot", "--translation", "bread"])
                .unwrap();
        let Command::Add(cmd) = args.cmd else {
            panic!("expected add command");
        };
        assert!(!cmd.has_extras());
    }
}
