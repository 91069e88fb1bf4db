//! `tpick history` - list recent request history.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use tablepick_core::repository::history::HistoryRepository;
use tablepick_types::history::HistoryRecord;
use tablepick_types::query::QueryParameters;

use crate::state::AppState;

/// Print the `limit` most recent history records, newest first.
pub async fn history(state: &AppState, limit: u32, json: bool) -> Result<()> {
    let records = state
        .recommendation_service
        .history()
        .recent(i64::from(limit))
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!();
        println!("  No requests recorded yet.");
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Request").fg(Color::White),
        Cell::new("Time (UTC)").fg(Color::White),
        Cell::new("Parameters").fg(Color::White),
        Cell::new("Result").fg(Color::White),
    ]);

    for record in &records {
        table.add_row(vec![
            Cell::new(&record.request_id).fg(Color::DarkGrey),
            Cell::new(record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()),
            Cell::new(describe_parameters(&record.parameters)),
            result_cell(record),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} request{}",
        style(records.len()).bold(),
        if records.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

fn result_cell(record: &HistoryRecord) -> Cell {
    match &record.response {
        Some(restaurant) => {
            Cell::new(restaurant.name().unwrap_or(&restaurant.style)).fg(Color::Green)
        }
        None => Cell::new("none").fg(Color::Yellow),
    }
}

/// Render the raw parameters as `key=value` pairs, known keys first.
fn describe_parameters(params: &QueryParameters) -> String {
    let pairs: Vec<String> = [
        ("style", &params.style),
        ("vegetarian", &params.vegetarian),
        ("isOpenNow", &params.is_open_now),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.as_ref().map(|v| format!("{key}={v}")))
    .chain(params.extra.iter().map(|(key, v)| format!("{key}={v}")))
    .collect();

    if pairs.is_empty() {
        "-".to_string()
    } else {
        pairs.join(" ")
    }
}
