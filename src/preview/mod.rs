pub mod client;
pub mod orchestrator;
pub mod prompt;

pub use client::PreviewClient;
pub use orchestrator::{Preview, PreviewMap, generate_previews, generate_previews_with};
pub use prompt::{LeagueContext, build_preview_prompt, system_prompt};
