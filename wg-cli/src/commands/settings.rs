//! Settings commands.

use clap::Subcommand;
use console::style;

use wg_core::config::{AppConfig, ConfigHandle};
use wg_core::error::WgResult;

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// List/show all settings (alias for show).
    List,
    /// Show all settings.
    Show,
    /// Get a specific setting value by key path.
    Get {
        /// Setting key path (e.g., "generator.words_per_puzzle", "word_service.address").
        key: String,
    },
    /// Set a specific setting value by key path.
    Set {
        /// Setting key path (e.g., "generator.words_per_puzzle", "word_service.address").
        key: String,
        /// New value.
        value: String,
    },
    /// Set the word service address.
    SetAddress {
        /// Word service base URL.
        address: String,
    },
    /// Set the word service API key.
    SetApiKey {
        /// API key.
        api_key: String,
    },
    /// Export settings to a file.
    Export {
        /// Output file path.
        path: String,
    },
    /// Import settings from a file.
    Import {
        /// Input file path.
        path: String,
    },
}

/// Resolve a dot-separated key path to a value from the config.
fn get_setting_value(cfg: &AppConfig, key: &str) -> Option<String> {
    match key {
        "generator.max_attempts" => Some(cfg.generator.max_attempts.to_string()),
        "generator.words_per_puzzle" => Some(cfg.generator.words_per_puzzle.to_string()),
        "generator.default_theme" => Some(cfg.generator.default_theme.clone()),
        "word_service.address" => Some(cfg.word_service.address.clone()),
        "word_service.api_key" => Some("********".to_string()),
        "word_service.api_timeout_ms" | "word_service.timeout" => {
            Some(cfg.word_service.api_timeout_ms.to_string())
        }
        "logging.level" | "log.level" => Some(cfg.logging.level.clone()),
        "logging.directory" => Some(cfg.logging.directory.clone()),
        "logging.json_output" => Some(cfg.logging.json_output.to_string()),
        "display.show_solution" => Some(cfg.display.show_solution.to_string()),
        "display.spaced_grid" => Some(cfg.display.spaced_grid.to_string()),
        _ => None,
    }
}

/// Apply a value to a dot-separated key path on the config.
fn set_setting_value(cfg: &mut AppConfig, key: &str, value: &str) -> Result<(), String> {
    match key {
        "generator.max_attempts" => {
            let attempts: u32 = value.parse().map_err(|_| "invalid integer".to_string())?;
            if attempts == 0 {
                return Err("must be at least 1".to_string());
            }
            cfg.generator.max_attempts = attempts;
        }
        "generator.words_per_puzzle" => {
            let count: usize = value.parse().map_err(|_| "invalid integer".to_string())?;
            if count == 0 || count > wg_core::constants::MAX_WORDS_PER_PUZZLE {
                return Err(format!(
                    "expected 1-{}",
                    wg_core::constants::MAX_WORDS_PER_PUZZLE
                ));
            }
            cfg.generator.words_per_puzzle = count;
        }
        "generator.default_theme" => {
            cfg.generator.default_theme = value.to_lowercase();
        }
        "word_service.address" => {
            cfg.word_service.address = AppConfig::sanitize_service_address(value);
        }
        "word_service.api_key" => {
            cfg.word_service.api_key = value.to_string();
        }
        "word_service.api_timeout_ms" | "word_service.timeout" => {
            cfg.word_service.api_timeout_ms =
                value.parse().map_err(|_| "invalid integer".to_string())?;
        }
        "logging.level" | "log.level" => {
            let v = value.to_lowercase();
            if !["trace", "debug", "info", "warn", "error"].contains(&v.as_str()) {
                return Err("expected one of: trace, debug, info, warn, error".to_string());
            }
            cfg.logging.level = v;
        }
        "logging.directory" => {
            cfg.logging.directory = value.to_string();
        }
        "logging.json_output" => {
            cfg.logging.json_output = value.parse().map_err(|_| "expected true/false".to_string())?;
        }
        "display.show_solution" => {
            cfg.display.show_solution =
                value.parse().map_err(|_| "expected true/false".to_string())?;
        }
        "display.spaced_grid" => {
            cfg.display.spaced_grid =
                value.parse().map_err(|_| "expected true/false".to_string())?;
        }
        _ => {
            return Err(format!("unknown setting key: {key}"));
        }
    }
    Ok(())
}

fn print_settings_text(cfg: &AppConfig) {
    println!("{}", style("Generator").bold().underlined());
    println!("  generator.max_attempts        {}", cfg.generator.max_attempts);
    println!("  generator.words_per_puzzle    {}", cfg.generator.words_per_puzzle);
    println!("  generator.default_theme       {}", cfg.generator.default_theme);

    println!();
    println!("{}", style("Word service").bold().underlined());
    println!("  word_service.address          {}", cfg.word_service.address);
    println!("  word_service.api_timeout_ms   {}", cfg.word_service.api_timeout_ms);

    println!();
    println!("{}", style("Logging").bold().underlined());
    println!("  logging.level                 {}", cfg.logging.level);
    println!("  logging.directory             {}", cfg.logging.directory);
    println!("  logging.json_output           {}", cfg.logging.json_output);

    println!();
    println!("{}", style("Display").bold().underlined());
    println!("  display.show_solution         {}", cfg.display.show_solution);
    println!("  display.spaced_grid           {}", cfg.display.spaced_grid);
}

fn settings_json(cfg: &AppConfig) -> serde_json::Value {
    serde_json::json!({
        "generator": {
            "max_attempts": cfg.generator.max_attempts,
            "words_per_puzzle": cfg.generator.words_per_puzzle,
            "default_theme": cfg.generator.default_theme,
        },
        "word_service": {
            "address": cfg.word_service.address,
            "api_timeout_ms": cfg.word_service.api_timeout_ms,
        },
        "logging": {
            "level": cfg.logging.level,
            "directory": cfg.logging.directory,
            "json_output": cfg.logging.json_output,
        },
        "display": {
            "show_solution": cfg.display.show_solution,
            "spaced_grid": cfg.display.spaced_grid,
        },
    })
}

pub async fn run(config: ConfigHandle, action: SettingsAction, format: OutputFormat) -> WgResult<()> {
    match action {
        SettingsAction::Show | SettingsAction::List => {
            let cfg = config.read().await;
            match format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&settings_json(&cfg)).unwrap_or_default()
                    );
                }
                OutputFormat::Text => {
                    print_settings_text(&cfg);
                }
            }
        }
        SettingsAction::Get { key } => {
            let cfg = config.read().await;
            match get_setting_value(&cfg, &key) {
                Some(value) => match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::json!({ "key": key, "value": value }));
                    }
                    OutputFormat::Text => {
                        println!("{} = {}", key, value);
                    }
                },
                None => {
                    println!(
                        "{} Unknown setting key: {}",
                        style("ERROR").red().bold(),
                        key
                    );
                    println!("  Use `wordgrid settings list` to see available keys.");
                }
            }
        }
        SettingsAction::Set { key, value } => {
            {
                let mut cfg = config.write().await;
                match set_setting_value(&mut cfg, &key, &value) {
                    Ok(()) => {}
                    Err(e) => {
                        println!(
                            "{} Failed to set {}: {}",
                            style("ERROR").red().bold(),
                            key,
                            e
                        );
                        return Ok(());
                    }
                }
            }
            config.save().await?;

            match format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::json!({ "key": key, "value": value, "saved": true })
                    );
                }
                OutputFormat::Text => {
                    println!("{} {} = {}", style("SET").green().bold(), key, value);
                }
            }
        }
        SettingsAction::SetAddress { address } => {
            let sanitized = AppConfig::sanitize_service_address(&address);
            {
                let mut cfg = config.write().await;
                cfg.word_service.address = sanitized.clone();
            }
            config.save().await?;
            println!(
                "{} Word service address set to: {}",
                style("SET").green().bold(),
                sanitized
            );
        }
        SettingsAction::SetApiKey { api_key } => {
            {
                let mut cfg = config.write().await;
                cfg.word_service.api_key = api_key;
            }
            config.save().await?;
            println!("{} Word service API key updated.", style("SET").green().bold());
        }
        SettingsAction::Export { path } => {
            let cfg = config.read().await;
            cfg.save_to_file(std::path::Path::new(&path))?;
            println!(
                "{} Settings exported to {}",
                style("OK").green().bold(),
                path
            );
        }
        SettingsAction::Import { path } => {
            let imported = AppConfig::load_from_file(std::path::Path::new(&path))?;
            {
                let mut cfg = config.write().await;
                *cfg = imported;
            }
            config.save().await?;
            println!(
                "{} Settings imported from {} and saved.",
                style("OK").green().bold(),
                path
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_setting_value(&cfg, "generator.words_per_puzzle").as_deref(),
            Some("8")
        );
        assert_eq!(get_setting_value(&cfg, "logging.level").as_deref(), Some("info"));
        assert_eq!(get_setting_value(&cfg, "word_service.api_key").as_deref(), Some("********"));
        assert!(get_setting_value(&cfg, "nope.nothing").is_none());
    }

    #[test]
    fn test_set_validates_values() {
        let mut cfg = AppConfig::default();

        set_setting_value(&mut cfg, "generator.words_per_puzzle", "10").unwrap();
        assert_eq!(cfg.generator.words_per_puzzle, 10);

        assert!(set_setting_value(&mut cfg, "generator.words_per_puzzle", "0").is_err());
        assert!(set_setting_value(&mut cfg, "generator.words_per_puzzle", "99").is_err());
        assert!(set_setting_value(&mut cfg, "logging.level", "loud").is_err());
        assert!(set_setting_value(&mut cfg, "unknown.key", "x").is_err());
    }

    #[test]
    fn test_set_address_sanitizes() {
        let mut cfg = AppConfig::default();
        set_setting_value(&mut cfg, "word_service.address", "words.example.com/").unwrap();
        assert_eq!(cfg.word_service.address, "https://words.example.com");
    }
}
