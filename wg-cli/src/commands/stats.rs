//! Stats command: summarize play sessions from a JSON file.

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use console::style;

use wg_core::config::ConfigHandle;
use wg_core::error::{WgError, WgResult};
use wg_services::{EventBus, PlaySession, StatsService};

use crate::OutputFormat;

pub async fn run(_config: ConfigHandle, file: String, format: OutputFormat) -> WgResult<()> {
    let contents = std::fs::read_to_string(&file)?;
    let sessions: Vec<PlaySession> = serde_json::from_str(&contents)
        .map_err(|e| WgError::Serialization(format!("not a session file: {e}")))?;

    let mut service = StatsService::new(EventBus::new(32));
    service.record_all(sessions);
    let summary = service.summary();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            println!(
                "{} {} games, {} solved ({:.0}%)",
                style("Overall:").bold(),
                summary.games,
                summary.solved,
                summary.solve_rate * 100.0
            );
            println!(
                "words found: {}/{}",
                summary.words_found, summary.total_words
            );

            if !summary.by_theme.is_empty() {
                let mut table = Table::new();
                table
                    .load_preset(UTF8_FULL)
                    .apply_modifier(UTF8_ROUND_CORNERS)
                    .set_content_arrangement(ContentArrangement::Dynamic);
                table.set_header(vec!["Theme", "Games", "Solved", "Best", "Avg solve"]);

                for (theme, stats) in &summary.by_theme {
                    let best = stats
                        .best_time_secs
                        .map(super::format_duration)
                        .unwrap_or_else(|| "-".to_string());
                    let avg = stats
                        .avg_solve_secs
                        .map(|s| super::format_duration(s.round() as u64))
                        .unwrap_or_else(|| "-".to_string());
                    table.add_row(vec![
                        theme.clone(),
                        stats.games.to_string(),
                        stats.solved.to_string(),
                        best,
                        avg,
                    ]);
                }
                println!("{table}");
            }
        }
    }

    Ok(())
}
