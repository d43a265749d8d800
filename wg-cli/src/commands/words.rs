//! Words command: fetch a themed word list without generating a puzzle.

use console::style;

use wg_api::ApiClient;
use wg_core::config::ConfigHandle;
use wg_core::error::WgResult;
use wg_services::EventBus;

use crate::OutputFormat;

pub async fn run(
    config: ConfigHandle,
    theme: Option<String>,
    count: Option<usize>,
    list_themes: bool,
    format: OutputFormat,
) -> WgResult<()> {
    if list_themes {
        return run_list_themes(config, format).await;
    }

    let (theme, count) = {
        let cfg = config.read().await;
        (
            theme.unwrap_or_else(|| cfg.generator.default_theme.clone()),
            count.unwrap_or(cfg.generator.words_per_puzzle),
        )
    };

    let event_bus = EventBus::new(32);
    let provider = super::create_provider(&config, event_bus).await?;
    let list = provider.fetch_words(&theme, count).await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "theme": list.theme,
                "source": list.source.label(),
                "words": list.words,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            println!(
                "{} ({} words, source: {})",
                style(&list.theme).bold(),
                list.words.len(),
                list.source.label()
            );
            for word in &list.words {
                println!("  {word}");
            }
        }
    }

    Ok(())
}

/// List the themes the word service can generate words for.
///
/// Requires a configured word service; the bundled packs are listed by
/// `wordgrid packs list` instead.
async fn run_list_themes(config: ConfigHandle, format: OutputFormat) -> WgResult<()> {
    let api = {
        let cfg = config.read().await;
        ApiClient::new(&cfg.word_service)?
    };
    let themes = api.list_themes().await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&themes)?);
        }
        OutputFormat::Text => {
            println!("{} ({} available)", style("Service themes").bold(), themes.len());
            for theme in &themes {
                println!("  {theme}");
            }
        }
    }

    Ok(())
}
