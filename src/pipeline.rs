//! One full run: aggregate, pair, generate, persist.

use crate::config::Config;
use crate::data_fetcher::api::{aggregate_league_data, create_http_client_with_timeout};
use crate::data_fetcher::processors::pair_matchups;
use crate::error::AppError;
use crate::output::{PersistenceWriter, RunSummary};
use crate::preview::{LeagueContext, PreviewClient, generate_previews};
use tracing::{info, instrument};

/// Runs the weekly pipeline once and returns the summary it wrote.
///
/// Aggregation failures are fatal and come back as
/// [`AppError::AggregationFailed`]. Generation failures only shrink the
/// preview map; the artifacts are written either way.
#[instrument(skip_all, fields(league_id = %config.league_id))]
pub async fn run(config: &Config) -> Result<RunSummary, AppError> {
    let http = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let snapshot = aggregate_league_data(&http, config).await?;

    let games = pair_matchups(&snapshot.matchups, &snapshot.managers, &snapshot.lineups);
    info!("Paired {} games for week {}", games.len(), snapshot.week);

    let context = LeagueContext::from_league(&snapshot.league, snapshot.week);
    let client = PreviewClient::from_config(http, config);
    let previews = generate_previews(&client, &games, &context, config.preview_delay()).await;

    let writer = PersistenceWriter::new(&config.output_dir);
    writer.write_previews(&previews).await?;
    writer.write_games(&games).await?;

    let summary = RunSummary::now(snapshot.week, context.league_name, previews.len());
    writer.write_summary(&summary).await?;

    info!(
        "Run complete: {} previews for {} games written to {}",
        summary.total_previews,
        games.len(),
        writer.output_dir().display()
    );
    Ok(summary)
}
