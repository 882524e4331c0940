use anyhow::Result;
use owo_colors::OwoColorize;

use crate::utils::tui::with_spinner;

use super::AppContext;

pub async fn run(ctx: &AppContext) -> Result<()> {
    let client = ctx.client()?;

    match with_spinner("Checking planner API...", client.health()).await {
        Ok(health) => {
            let status = health.status.unwrap_or_else(|| "ok".to_string());
            println!("{} {} ({})", "●".green(), client.root(), status);
            Ok(())
        }
        Err(e) => {
            tracing::debug!(error = ?e, "health check failed");
            println!("{} {} is unreachable", "●".red(), client.root());
            Err(e)
        }
    }
}
