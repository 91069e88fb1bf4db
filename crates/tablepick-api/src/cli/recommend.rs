//! `tpick recommend` - run one recommendation from the command line.
//!
//! Goes through the same service path as the HTTP handler, so a history
//! record is written for every invocation.

use anyhow::Result;
use console::style;
use tracing::Instrument;

use tablepick_core::response::RecommendationResponse;
use tablepick_observe::spans::{recommendation_span, SOURCE_CLI};
use tablepick_types::query::QueryParameters;

use crate::state::AppState;

pub async fn recommend(
    state: &AppState,
    style_filter: Option<String>,
    vegetarian: Option<String>,
    open_now: Option<String>,
    json: bool,
) -> Result<()> {
    let request_id = uuid::Uuid::now_v7().to_string();
    let params = QueryParameters {
        style: style_filter,
        vegetarian,
        is_open_now: open_now,
        ..Default::default()
    };

    let response = state
        .recommendation_service
        .recommend(&request_id, params)
        .instrument(recommendation_span(&request_id, SOURCE_CLI))
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_styled(&request_id, &response);
    }

    Ok(())
}

fn print_styled(request_id: &str, response: &RecommendationResponse) {
    println!();
    match &response.body.restaurant_recommendation {
        Some(record) => {
            println!(
                "  {} {}",
                style("✓").green().bold(),
                style(record.name().unwrap_or("(unnamed)")).cyan().bold()
            );
            println!("  Style:      {}", record.style);
            println!(
                "  Vegetarian: {}",
                if record.vegetarian { "yes" } else { "no" }
            );
            println!("  Hours:      {} - {} UTC", record.open_hour, record.close_hour);
        }
        None => {
            println!(
                "  {} No restaurant matches ({})",
                style("✗").red(),
                response.status_code
            );
        }
    }
    println!("  {}", style(format!("request {request_id}")).dim());
    println!();
}
