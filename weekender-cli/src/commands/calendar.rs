use anyhow::Result;

use weekender_core::calendar::{first_of_month, month_grid, parse_month};

use crate::render::render_month;

use super::{AppContext, range_from_args};

/// Print one month with an optional range highlighted.
pub fn run(
    ctx: &AppContext,
    month: Option<String>,
    start: Option<String>,
    end: Option<String>,
) -> Result<()> {
    let today = ctx.today();
    let range = range_from_args(start.as_deref(), end.as_deref(), ctx.hours())?;

    let month = match month {
        Some(m) => parse_month(&m)?,
        None => range.start_day().map(first_of_month).unwrap_or_else(|| first_of_month(today)),
    };

    let days = month_grid(month, today, &range);
    println!("{}", render_month(month, &days));
    Ok(())
}
