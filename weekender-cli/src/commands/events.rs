use anyhow::Result;
use owo_colors::OwoColorize;

use weekender_core::events::{EventQuery, ResultCount};

use crate::render::Render;
use crate::utils::tui::with_spinner;

use super::{AppContext, retry_hint};

pub async fn run(ctx: &AppContext, query: EventQuery) -> Result<()> {
    let client = ctx.client()?;

    let response = match with_spinner("Loading this week's events...", client.events_this_week()).await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(error = ?e, "events request failed");
            anyhow::bail!("Failed to load events: {}\n{}", e, retry_hint());
        }
    };

    let matched = query.apply(&response.events);
    println!("{}", ResultCount(matched.len()).to_string().dimmed());

    if matched.is_empty() {
        if !query.search.is_empty() {
            println!("{}", "Try a different search term or filter.".dimmed());
        }
        return Ok(());
    }

    for event in matched {
        println!();
        println!("{}", event.render());
    }

    Ok(())
}
