//! System status command.

use anyhow::Result;
use console::style;

use tablepick_core::repository::history::HistoryRepository;
use tablepick_core::repository::restaurant::RestaurantRepository;

use crate::state::AppState;

/// Display configuration and collection counts.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let restaurants = state
        .recommendation_service
        .restaurants()
        .count()
        .await?;
    let requests = state.recommendation_service.history().count().await?;
    let config = &state.config;

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "database_file": config.database_file,
            "restaurants": {
                "table": config.restaurants_table,
                "count": restaurants,
            },
            "history": {
                "table": config.history_table,
                "count": requests,
            },
            "listen": format!("{}:{}", config.host, config.port),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!("  {} TablePick v{}", style("🍽").bold(), env!("CARGO_PKG_VERSION"));
    println!();

    println!("  {}", style("── Collections ──").dim());
    println!(
        "  Restaurants: {} ({})",
        style(restaurants).bold(),
        style(&config.restaurants_table).cyan()
    );
    println!(
        "  Requests:    {} ({})",
        style(requests).bold(),
        style(&config.history_table).cyan()
    );
    if restaurants == 0 {
        println!(
            "  {}",
            style("Collection is empty; seed it with `tpick load <file>`").yellow()
        );
    }
    println!();

    println!("  {}", style("── Storage ──").dim());
    println!("  Data dir: {}", state.data_dir.display());
    println!("  Database: {}", config.database_file);
    println!("  Listen:   {}:{}", config.host, config.port);
    println!();

    Ok(())
}
