use anyhow::Result;
use owo_colors::OwoColorize;

use weekender_core::food::FoodSearch;

use crate::render::Render;
use crate::utils::tui::with_spinner;

use super::{AppContext, retry_hint};

pub async fn run(ctx: &AppContext, search: FoodSearch) -> Result<()> {
    let client = ctx.client()?;

    let message = format!("Searching for {} near {}...", search.query, search.location);
    let response = match with_spinner(&message, client.search_food(&search)).await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(error = ?e, "food search failed");
            anyhow::bail!("Failed to search food: {}\n{}", e, retry_hint());
        }
    };

    let places = response.places();
    if places.is_empty() {
        println!("{}", format!("No results for \"{}\"", response.query).dimmed());
        return Ok(());
    }

    for place in places {
        println!("{}", place.render());
    }

    Ok(())
}
