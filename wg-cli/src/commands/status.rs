//! Status command - show word service connection status.

use console::style;

use wg_api::ApiClient;
use wg_core::config::ConfigHandle;
use wg_core::error::WgResult;

use crate::OutputFormat;

/// Run the status command.
pub async fn run(config: ConfigHandle, format: OutputFormat) -> WgResult<()> {
    let cfg = config.read().await;

    if !cfg.is_word_service_configured() {
        match format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "word_service_configured": false,
                        "provider": "builtin",
                    })
                );
            }
            OutputFormat::Text => {
                println!(
                    "{} no word service configured; puzzles use the builtin packs",
                    style("OFFLINE").yellow().bold()
                );
                println!("  Set one with `wordgrid settings set-address <url>`.");
            }
        }
        return Ok(());
    }

    let api = ApiClient::new(&cfg.word_service)?;
    let address = cfg.word_service.address.clone();
    drop(cfg);

    let latency = api.health_check().await.ok();
    let reachable = latency.is_some();

    match format {
        OutputFormat::Json => {
            let mut json = serde_json::json!({
                "word_service_configured": true,
                "address": address,
                "reachable": reachable,
                "latency_ms": latency.map(|d| d.as_millis() as u64),
            });

            if reachable {
                if let Ok(info) = api.service_info().await {
                    json["service_version"] = serde_json::json!(info.service_version);
                    json["model"] = serde_json::json!(info.model);
                    json["themes_available"] = serde_json::json!(info.themes_available);
                }
            }

            println!("{}", serde_json::to_string_pretty(&json).unwrap_or_default());
        }
        OutputFormat::Text => {
            println!("{}", style("Word service").bold().underlined());
            println!("  Address: {address}");
            println!(
                "  Status:  {}",
                match latency {
                    Some(d) => format!("{} ({}ms)", style("reachable").green(), d.as_millis()),
                    None => style("unreachable").red().to_string(),
                }
            );

            if reachable {
                if let Ok(info) = api.service_info().await {
                    println!(
                        "  Version: {}",
                        info.service_version.as_deref().unwrap_or("unknown")
                    );
                    println!("  Model:   {}", info.model.as_deref().unwrap_or("unknown"));
                    if let Some(themes) = info.themes_available {
                        println!("  Themes:  {themes}");
                    }
                }
            } else {
                println!("  Puzzles will fall back to the builtin packs.");
            }
        }
    }

    Ok(())
}
