//! Generate command.

use console::style;

use wg_core::config::ConfigHandle;
use wg_core::error::{WgError, WgResult};
use wg_services::{EventBus, GeneratedPuzzle, PuzzleService};

use crate::OutputFormat;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    config: ConfigHandle,
    words: Vec<String>,
    theme: Option<String>,
    count: Option<usize>,
    size: Option<usize>,
    seed: Option<u64>,
    solution: bool,
    output: Option<String>,
    format: OutputFormat,
) -> WgResult<()> {
    if !words.is_empty() && theme.is_some() {
        return Err(WgError::Config(
            "pass either words or --theme, not both".into(),
        ));
    }

    let event_bus = EventBus::new(32);
    let provider = super::create_provider(&config, event_bus.clone()).await?;
    let service = PuzzleService::new(provider, event_bus, config.clone());

    let generated = if words.is_empty() {
        let theme = match theme {
            Some(t) => t,
            None => config.read().await.generator.default_theme.clone(),
        };
        service.generate_from_theme(&theme, count, size, seed).await?
    } else {
        service.generate_from_words(&words, size, seed).await?
    };

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&generated)?;
        std::fs::write(&path, json)?;
        eprintln!("saved puzzle to {path}");
    }

    let show_solution = solution || config.read().await.display.show_solution;
    let spaced = config.read().await.display.spaced_grid;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&generated)?);
        }
        OutputFormat::Text => {
            print_puzzle(&generated, show_solution, spaced);
        }
    }

    Ok(())
}

fn print_puzzle(generated: &GeneratedPuzzle, show_solution: bool, spaced: bool) {
    if let Some(ref theme) = generated.theme {
        println!("{}", style(format!("Theme: {theme}")).bold());
    }
    println!(
        "{}",
        style(format!(
            "{}x{} grid, {} words",
            generated.puzzle.size(),
            generated.puzzle.size(),
            generated.puzzle.words.len()
        ))
        .dim()
    );
    println!();
    println!("{}", generated.puzzle.grid.render(spaced));
    println!();

    println!("{}", style("Find:").bold());
    for word in &generated.puzzle.words {
        println!("  {word}");
    }

    if show_solution {
        println!();
        println!("{}", style("Solution:").bold());
        for placement in &generated.puzzle.placements {
            println!(
                "  {} starts at row {}, col {}, running {}",
                placement.word, placement.start.row, placement.start.col, placement.direction
            );
        }
    }
}
