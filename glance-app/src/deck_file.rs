use anyhow::{Context, Result};
use directories::ProjectDirs;
use glance_core::DeckSnapshot;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::task;

pub fn data_root() -> PathBuf {
    if let Some(pd) = ProjectDirs::from("com", "glance", "Glance") {
        pd.data_dir().to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

pub fn default_deck_file() -> PathBuf {
    data_root().join("deck.json")
}

/// Reads the snapshot at `path`; a missing file is an empty deck.
pub async fn load(path: &Path) -> Result<DeckSnapshot> {
    if !path.exists() {
        log::info!("no deck at {}, starting empty", path.display());
        return Ok(DeckSnapshot::default());
    }
    let p = path.to_path_buf();
    let text = task::spawn_blocking(move || fs::read_to_string(&p))
        .await?
        .with_context(|| format!("reading {}", path.display()))?;
    let snap = DeckSnapshot::from_json(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    log::debug!("loaded {} cards (version {})", snap.cards.len(), snap.version);
    Ok(snap)
}

pub async fn save(path: &Path, snapshot: &DeckSnapshot) -> Result<()> {
    let json = snapshot.to_json_pretty()?;
    let p = path.to_path_buf();
    task::spawn_blocking(move || write_atomic(&p, json.as_bytes()))
        .await?
        .with_context(|| format!("writing {}", path.display()))?;
    log::debug!("saved version {} to {}", snapshot.version, path.display());
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), std::io::Error> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use glance_core::Flashcard;

    #[tokio::test]
    async fn missing_file_is_empty_and_save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deck.json");

        let empty = load(&path).await.unwrap();
        assert!(empty.cards.is_empty());

        let card = Flashcard::new("Apfel", "apple", Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
        let snap = DeckSnapshot::new(3, vec![card]);
        save(&path, &snap).await.unwrap();
        assert_eq!(load(&path).await.unwrap(), snap);
    }
}
