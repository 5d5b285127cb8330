// Sequential preview generation with a fixed pause between calls.

use crate::data_fetcher::models::Game;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;
use tracing::{info, instrument, warn};

use super::client::PreviewClient;
use super::prompt::{LeagueContext, build_preview_prompt, system_prompt};

/// A generated narrative as written to the previews artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    pub preview: String,
}

/// Previews keyed by game id. A missing key means generation failed or was skipped.
pub type PreviewMap = BTreeMap<String, Preview>;

/// Generates previews for `games` in order, pausing `delay` between calls.
pub async fn generate_previews(
    client: &PreviewClient,
    games: &[Game],
    context: &LeagueContext,
    delay: Duration,
) -> PreviewMap {
    generate_previews_with(client, games, context, delay, tokio::time::sleep).await
}

/// Like [`generate_previews`], with the pause supplied by `sleep`.
///
/// Calls are strictly sequential and the pause happens only between games,
/// never after the last one. A failed game is logged and left out of the
/// map; it never stops the remaining games. Without a credential nothing is
/// requested and the map is empty.
#[instrument(skip_all, fields(games = games.len(), week = context.week))]
pub async fn generate_previews_with<S, Fut>(
    client: &PreviewClient,
    games: &[Game],
    context: &LeagueContext,
    delay: Duration,
    sleep: S,
) -> PreviewMap
where
    S: Fn(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    let mut previews = PreviewMap::new();

    if !client.has_credential() {
        warn!(
            "No generative service credential configured, skipping previews for {} games",
            games.len()
        );
        return previews;
    }

    let system = system_prompt();

    for (index, game) in games.iter().enumerate() {
        if index > 0 {
            sleep(delay).await;
        }

        let prompt = build_preview_prompt(game, context);
        info!("Generating preview for {} ({})", game.id, game.label());

        match client.generate(&game.id, &system, &prompt).await {
            Ok(text) => {
                previews.insert(game.id.clone(), Preview { preview: text });
            }
            Err(e) => {
                warn!("Skipping preview for {}: {}", game.id, e);
            }
        }
    }

    info!(
        "Generated {}/{} previews",
        previews.len(),
        games.len()
    );
    previews
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::data_fetcher::api::http_client::{
        create_http_client_with_timeout, create_test_http_client,
    };
    use crate::testing_utils::TestDataBuilder;
    use std::sync::{Arc, Mutex};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_string_contains, method},
    };

    fn client_for(server: &MockServer, api_key: Option<&str>) -> PreviewClient {
        client_with_http(server, api_key, create_test_http_client())
    }

    fn client_with_http(
        server: &MockServer,
        api_key: Option<&str>,
        http: reqwest::Client,
    ) -> PreviewClient {
        let config = Config {
            openai_api_url: server.uri(),
            openai_api_key: api_key.map(str::to_string),
            ..Config::default()
        };
        PreviewClient::from_config(http, &config)
    }

    fn context() -> LeagueContext {
        LeagueContext {
            league_name: "The Roast Bowl".to_string(),
            week: 3,
            playoffs: false,
        }
    }

    fn completion(preview: &str) -> serde_json::Value {
        let content = serde_json::json!({ "preview": preview }).to_string();
        serde_json::json!({"choices": [{"message": {"role": "assistant", "content": content}}]})
    }

    /// Records every requested pause instead of sleeping.
    fn recording_sleep(
        log: Arc<Mutex<Vec<Duration>>>,
    ) -> impl Fn(Duration) -> std::future::Ready<()> {
        move |d| {
            log.lock().unwrap().push(d);
            std::future::ready(())
        }
    }

    #[tokio::test]
    async fn test_failed_game_is_omitted_and_rest_continue() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("Doomed Squad vs"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("A fine preview")))
            .expect(2)
            .mount(&server)
            .await;

        let games = vec![
            TestDataBuilder::game("game-1", "Doomed Squad", "Rivals"),
            TestDataBuilder::game("game-2", "Lucky Ones", "Rivals"),
            TestDataBuilder::game("game-3", "Late Risers", "Rivals"),
        ];
        let client = client_for(&server, Some("sk-test"));
        let pauses = Arc::new(Mutex::new(Vec::new()));

        let previews = generate_previews_with(
            &client,
            &games,
            &context(),
            Duration::from_millis(1000),
            recording_sleep(pauses.clone()),
        )
        .await;

        let keys: Vec<&str> = previews.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["game-2", "game-3"]);
        assert_eq!(previews["game-2"].preview, "A fine preview");
        assert_eq!(pauses.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_timed_out_game_is_omitted_and_next_game_continues() {
        let server = MockServer::start().await;
        // Answers only after the client has already given up
        Mock::given(method("POST"))
            .and(body_string_contains("Stalled Squad vs"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion("too late"))
                    .set_delay(Duration::from_secs(3)),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("Right on time")))
            .expect(1)
            .mount(&server)
            .await;

        let games = vec![
            TestDataBuilder::game("game-1", "Stalled Squad", "Rivals"),
            TestDataBuilder::game("game-2", "Prompt Pals", "Rivals"),
        ];
        let http = create_http_client_with_timeout(1).unwrap();
        let client = client_with_http(&server, Some("sk-test"), http);
        let pauses = Arc::new(Mutex::new(Vec::new()));

        let previews = generate_previews_with(
            &client,
            &games,
            &context(),
            Duration::from_millis(500),
            recording_sleep(pauses.clone()),
        )
        .await;

        assert!(!previews.contains_key("game-1"));
        assert_eq!(previews["game-2"].preview, "Right on time");
        assert_eq!(*pauses.lock().unwrap(), vec![Duration::from_millis(500)]);
    }

    #[tokio::test]
    async fn test_delay_only_between_games() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("sk-test"));
        let pauses = Arc::new(Mutex::new(Vec::new()));

        let single = vec![TestDataBuilder::game("game-1", "A", "B")];
        generate_previews_with(
            &client,
            &single,
            &context(),
            Duration::from_millis(250),
            recording_sleep(pauses.clone()),
        )
        .await;
        assert!(pauses.lock().unwrap().is_empty());

        let four: Vec<Game> = (1..=4)
            .map(|n| TestDataBuilder::game(&format!("game-{n}"), "A", "B"))
            .collect();
        generate_previews_with(
            &client,
            &four,
            &context(),
            Duration::from_millis(250),
            recording_sleep(pauses.clone()),
        )
        .await;
        assert_eq!(*pauses.lock().unwrap(), vec![Duration::from_millis(250); 3]);
    }

    #[tokio::test]
    async fn test_no_credential_skips_every_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("never")))
            .expect(0)
            .mount(&server)
            .await;

        let games = vec![
            TestDataBuilder::game("game-1", "A", "B"),
            TestDataBuilder::game("game-2", "C", "D"),
        ];
        let client = client_for(&server, None);

        let previews = generate_previews(&client, &games, &context(), Duration::ZERO).await;
        assert!(previews.is_empty());
    }

    #[tokio::test]
    async fn test_empty_game_list() {
        let server = MockServer::start().await;
        let client = client_for(&server, Some("sk-test"));

        let previews = generate_previews(&client, &[], &context(), Duration::ZERO).await;
        assert!(previews.is_empty());
    }
}
