//! Verify command: check a saved puzzle against its word list.

use console::style;

use wg_core::config::ConfigHandle;
use wg_core::error::{WgError, WgResult};
use wg_puzzle::verify_grid;
use wg_services::GeneratedPuzzle;

use crate::OutputFormat;

pub async fn run(_config: ConfigHandle, file: String, format: OutputFormat) -> WgResult<()> {
    let contents = std::fs::read_to_string(&file)?;
    let puzzle: GeneratedPuzzle = serde_json::from_str(&contents)
        .map_err(|e| WgError::Serialization(format!("not a puzzle file: {e}")))?;

    let result = verify_grid(&puzzle.puzzle.grid, &puzzle.puzzle.words);

    match format {
        OutputFormat::Json => {
            let report = match &result {
                Ok(matches) => serde_json::json!({
                    "valid": true,
                    "words": puzzle.puzzle.words.len(),
                    "matches": matches,
                }),
                Err(e) => serde_json::json!({
                    "valid": false,
                    "error": e.to_string(),
                }),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => match &result {
            Ok(matches) => {
                println!(
                    "{} all {} words locatable",
                    style("OK").green().bold(),
                    matches.len()
                );
                for (word, m) in puzzle.puzzle.words.iter().zip(matches) {
                    let reading = if m.reversed { " (reversed)" } else { "" };
                    println!(
                        "  {word}: row {}, col {}, {}{reading}",
                        m.start.row, m.start.col, m.direction
                    );
                }
            }
            Err(e) => {
                println!("{} {e}", style("INVALID").red().bold());
            }
        },
    }

    result.map(|_| ())
}
