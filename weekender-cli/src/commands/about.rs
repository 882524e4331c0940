use owo_colors::OwoColorize;

use weekender_core::itinerary::AVAILABLE_INTERESTS;

use super::AppContext;

pub fn run(ctx: &AppContext) {
    println!("{}", "weekender".bold());
    println!("Plan a weekend in {}: pick your dates, browse what's on", ctx.settings.city);
    println!("this week, and ask the planner for a day-by-day itinerary.");
    println!();
    println!("{}", "How it works".bold());
    println!("  1. Pick a date range (`weekender pick`, or a preset like `--preset this-weekend`)");
    println!("  2. Tell the planner what you like (--interest, --budget, --mobility, --environment)");
    println!("  3. Get an itinerary built from local events, food and attractions (`weekender plan`)");
    println!();
    println!("{} {}", "Interests:".dimmed(), AVAILABLE_INTERESTS.join(", "));
    println!("{} {}", "Planner API:".dimmed(), ctx.settings.api_root());
}
