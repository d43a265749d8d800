//! Built-in word pack commands.

use clap::Subcommand;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};

use wg_core::config::ConfigHandle;
use wg_core::error::WgResult;
use wg_services::BuiltinProvider;

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum PacksAction {
    /// List all built-in packs.
    List,
    /// Show the words in one pack.
    Show {
        /// Pack theme identifier.
        theme: String,
    },
}

pub async fn run(_config: ConfigHandle, action: PacksAction, format: OutputFormat) -> WgResult<()> {
    match action {
        PacksAction::List => {
            let themes = BuiltinProvider::themes();
            match format {
                OutputFormat::Json => {
                    let json: Vec<_> = themes
                        .iter()
                        .map(|t| {
                            let pack = BuiltinProvider::pack(t).unwrap_or_default();
                            serde_json::json!({ "theme": t, "words": pack.len() })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&json)?);
                }
                OutputFormat::Text => {
                    let mut table = Table::new();
                    table
                        .load_preset(UTF8_FULL)
                        .apply_modifier(UTF8_ROUND_CORNERS)
                        .set_content_arrangement(ContentArrangement::Dynamic);
                    table.set_header(vec!["Theme", "Words"]);
                    for theme in themes {
                        let pack = BuiltinProvider::pack(theme).unwrap_or_default();
                        table.add_row(vec![theme.to_string(), pack.len().to_string()]);
                    }
                    println!("{table}");
                }
            }
        }
        PacksAction::Show { theme } => {
            let pack = BuiltinProvider::pack(&theme)?;
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&pack)?);
                }
                OutputFormat::Text => {
                    println!("{theme}:");
                    for word in pack {
                        println!("  {word}");
                    }
                }
            }
        }
    }
    Ok(())
}
