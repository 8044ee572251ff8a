//! Show the effective configuration.

use anyhow::Result;
use console::style;

use crate::state::AppState;

pub fn show_config(state: &AppState, json: bool) -> Result<()> {
    let config = state.config();
    let database = state.data_dir.join(&config.database_file);

    if json {
        let out = serde_json::json!({
            "data_dir": state.data_dir.display().to_string(),
            "database": database.display().to_string(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!("  {} qabot v{}", style("⚡").bold(), env!("CARGO_PKG_VERSION"));
    println!();
    println!("  {}", style("── Generation ──").dim());
    println!("  Endpoint:   {}", style(&config.endpoint).cyan());
    println!("  Model:      {}", config.model);
    println!("  Max tokens: {}", config.max_tokens);
    println!();
    println!("  {}", style("── Storage ──").dim());
    println!("  Data dir:   {}", state.data_dir.display());
    println!("  Database:   {}", database.display());
    println!(
        "  Failures:   {}",
        if config.persist_failures {
            style("saved").yellow()
        } else {
            style("not saved").dim()
        }
    );
    println!();
    println!("  {}", style("── Web UI ──").dim());
    println!("  Address:    http://{}:{}", config.host, config.port);
    println!();

    Ok(())
}
