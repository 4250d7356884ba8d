use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use glance_core::{SelectorConfig, Tier, MAX_SESSION_CARDS, NEW_CARD_EVERY};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "glance", version, about = "Glance vocabulary deck: study sessions and progress")]
pub struct Cli {
    /// Deck snapshot file (defaults to the app data dir)
    #[arg(long, global = true)]
    pub deck: Option<PathBuf>,

    /// Clock override as RFC 3339, e.g. 2024-06-15T09:30:00Z
    #[arg(long, global = true)]
    pub now: Option<DateTime<Utc>>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Show the cards picked for the next study session
    Session(SessionCmd),
    /// Show progress metrics for the whole deck
    Stats(StatsCmd),
    /// Add a card
    Add(AddCmd),
    /// List cards, newest first
    List(ListCmd),
    /// Remove a card
    Rm { card_id: String },
    /// Glance through a session, marking each card hard or easy
    Review(ReviewCmd),
}

#[derive(Debug, Args, Clone)]
pub struct SelectorArgs {
    /// Maximum cards per session
    #[arg(long, default_value_t = MAX_SESSION_CARDS)]
    pub cap: usize,
    /// Reserve every n-th slot for a new card (0 disables)
    #[arg(long = "new-every", default_value_t = NEW_CARD_EVERY)]
    pub new_every: usize,
}

impl SelectorArgs {
    pub fn config(&self) -> SelectorConfig {
        SelectorConfig {
            cap: self.cap,
            new_card_every: self.new_every,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct SessionCmd {
    #[command(flatten)]
    pub selector: SelectorArgs,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct StatsCmd {
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct AddCmd {
    #[arg(long)]
    pub term: String,
    #[arg(long)]
    pub translation: String,
    #[arg(long = "synonym")]
    pub synonyms: Vec<String>,
    #[arg(long = "verb-form")]
    pub verb_forms: Vec<String>,
    #[arg(long = "other-translation")]
    pub other_translations: Vec<String>,
    #[arg(long)]
    pub example: Option<String>,
    #[arg(long)]
    pub example_translated: Option<String>,
}

impl AddCmd {
    pub fn has_extras(&self) -> bool {
        !self.synonyms.is_empty()
            || !self.verb_forms.is_empty()
            || !self.other_translations.is_empty()
            || self.example.is_some()
            || self.example_translated.is_some()
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TierArg {
    New,
    Hard,
    Easy,
}

impl From<TierArg> for Tier {
    fn from(t: TierArg) -> Self {
        match t {
            TierArg::New => Tier::New,
            TierArg::Hard => Tier::Hard,
            TierArg::Easy => Tier::Easy,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct ListCmd {
    #[arg(long)]
    pub query: Option<String>,
    #[arg(long, value_enum)]
    pub tier: Option<TierArg>,
}

#[derive(Debug, Args, Clone)]
pub struct ReviewCmd {
    #[command(flatten)]
    pub selector: SelectorArgs,
}
