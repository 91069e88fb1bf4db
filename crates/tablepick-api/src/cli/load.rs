//! `tpick load` - seed the restaurant collection.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::Instrument;

use tablepick_infra::filesystem::read_seed_file;
use tablepick_observe::spans::load_span;

use crate::state::AppState;

/// Read a JSON array of restaurants from `path` and batch-write it.
pub async fn load(state: &AppState, path: &Path, replace: bool, json: bool) -> Result<()> {
    let span = load_span(&path.display().to_string());

    async {
        let content = read_seed_file(path)
            .await
            .with_context(|| format!("could not read {}", path.display()))?;

        let spinner = (!json).then(|| {
            let spinner = ProgressBar::new_spinner();
            if let Ok(spinner_style) =
                ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")
            {
                spinner.set_style(spinner_style);
            }
            spinner.set_message("Loading restaurants...");
            spinner.enable_steady_tick(std::time::Duration::from_millis(80));
            spinner
        });

        let result = state.loader_service.load_json(&content, replace).await;

        if let Some(spinner) = &spinner {
            spinner.finish_and_clear();
        }
        let summary = result.with_context(|| format!("could not load {}", path.display()))?;

        if json {
            let out = serde_json::json!({
                "file": path.display().to_string(),
                "table": state.config.restaurants_table,
                "written": summary.written,
                "batches": summary.batches,
                "replaced": replace,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!();
            println!(
                "  {} Loaded {} restaurant{} into '{}' ({} batch{})",
                style("✓").green().bold(),
                style(summary.written).bold(),
                if summary.written == 1 { "" } else { "s" },
                style(&state.config.restaurants_table).cyan(),
                summary.batches,
                if summary.batches == 1 { "" } else { "es" },
            );
            println!();
        }

        Ok::<(), anyhow::Error>(())
    }
    .instrument(span)
    .await
}
