//! Artifact writer for the static site
//!
//! Writes the preview map, a run summary and the game list as pretty JSON
//! into the configured output directory.

use crate::data_fetcher::models::Game;
use crate::error::AppError;
use crate::preview::PreviewMap;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

pub const PREVIEWS_FILE: &str = "previews.json";
pub const SUMMARY_FILE: &str = "summary.json";
pub const GAMES_FILE: &str = "games.json";

/// Summary record written next to the previews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// RFC 3339 UTC timestamp of the run
    pub generated_at: String,
    pub week: u32,
    pub league_name: String,
    pub total_previews: usize,
}

impl RunSummary {
    /// Summary stamped with the current time.
    pub fn now(week: u32, league_name: impl Into<String>, total_previews: usize) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            week,
            league_name: league_name.into(),
            total_previews,
        }
    }
}

/// Writes run artifacts into one directory, creating it on first write.
#[derive(Debug, Clone)]
pub struct PersistenceWriter {
    output_dir: PathBuf,
}

impl PersistenceWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes `previews.json`. Only games with a generated preview appear.
    pub async fn write_previews(&self, previews: &PreviewMap) -> Result<PathBuf, AppError> {
        let path = self.write_json(PREVIEWS_FILE, previews).await?;
        info!("Wrote {} previews to {}", previews.len(), path.display());
        Ok(path)
    }

    pub async fn write_summary(&self, summary: &RunSummary) -> Result<PathBuf, AppError> {
        self.write_json(SUMMARY_FILE, summary).await
    }

    pub async fn write_games(&self, games: &[Game]) -> Result<PathBuf, AppError> {
        self.write_json(GAMES_FILE, games).await
    }

    /// Loads `previews.json` back from the output directory.
    pub async fn read_previews(&self) -> Result<PreviewMap, AppError> {
        let content = fs::read_to_string(self.output_dir.join(PREVIEWS_FILE)).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn write_json<T: Serialize + ?Sized>(
        &self,
        file_name: &str,
        value: &T,
    ) -> Result<PathBuf, AppError> {
        if !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir).await?;
        }

        let path = self.output_dir.join(file_name);
        let content = serde_json::to_string_pretty(value)?;
        let mut file = fs::File::create(&path).await?;
        file.write_all(content.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;

        debug!("Wrote {} bytes to {}", content.len() + 1, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::Preview;
    use crate::testing_utils::TestDataBuilder;
    use tempfile::tempdir;

    fn previews(entries: &[(&str, &str)]) -> PreviewMap {
        entries
            .iter()
            .map(|(id, text)| {
                (
                    id.to_string(),
                    Preview {
                        preview: text.to_string(),
                    },
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_previews_round_trip() {
        let temp_dir = tempdir().unwrap();
        let writer = PersistenceWriter::new(temp_dir.path().join("public").join("data"));
        let written = previews(&[
            ("game-2", "ROAST ZONE: \"quotes\" and\nnewlines survive"),
            ("game-1", "THE MATCHUP: unicode too, 🔥"),
        ]);

        let path = writer.write_previews(&written).await.unwrap();
        assert!(path.ends_with("previews.json"));

        let read = writer.read_previews().await.unwrap();
        assert_eq!(read, written);
    }

    #[tokio::test]
    async fn test_preview_file_shape() {
        let temp_dir = tempdir().unwrap();
        let writer = PersistenceWriter::new(temp_dir.path());

        writer
            .write_previews(&previews(&[("game-1", "hello")]))
            .await
            .unwrap();

        let raw = tokio::fs::read_to_string(temp_dir.path().join(PREVIEWS_FILE))
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({"game-1": {"preview": "hello"}}));
    }

    #[tokio::test]
    async fn test_empty_previews_still_written() {
        let temp_dir = tempdir().unwrap();
        let writer = PersistenceWriter::new(temp_dir.path());

        writer.write_previews(&PreviewMap::new()).await.unwrap();
        assert!(writer.read_previews().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_summary_fields() {
        let temp_dir = tempdir().unwrap();
        let writer = PersistenceWriter::new(temp_dir.path());
        let summary = RunSummary::now(9, "The Roast Bowl", 4);

        writer.write_summary(&summary).await.unwrap();

        let raw = tokio::fs::read_to_string(temp_dir.path().join(SUMMARY_FILE))
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["week"], 9);
        assert_eq!(value["league_name"], "The Roast Bowl");
        assert_eq!(value["total_previews"], 4);
        let stamp = value["generated_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[tokio::test]
    async fn test_games_written() {
        let temp_dir = tempdir().unwrap();
        let writer = PersistenceWriter::new(temp_dir.path());
        let games = vec![TestDataBuilder::game("game-1", "A", "B")];

        writer.write_games(&games).await.unwrap();

        let raw = tokio::fs::read_to_string(temp_dir.path().join(GAMES_FILE))
            .await
            .unwrap();
        let parsed: Vec<Game> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, games);
    }
}
