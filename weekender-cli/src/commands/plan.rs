use anyhow::Result;
use owo_colors::OwoColorize;

use weekender_core::calendar::QuickSelect;
use weekender_core::config::Settings;
use weekender_core::date_range::DateRange;
use weekender_core::itinerary::{BudgetLevel, EnvironmentPreference, ItineraryRequest, Mobility};

use crate::render::Render;
use crate::utils::tui::with_spinner;

use super::{AppContext, pick, range_from_args, retry_hint};

/// Planner form values given on the command line. Unset fields keep the
/// form defaults.
#[derive(Debug, Default)]
pub struct PlanArgs {
    pub preset: Option<QuickSelect>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub pick: bool,
    pub interests: Vec<String>,
    pub budget: Option<BudgetLevel>,
    pub mobility: Option<Mobility>,
    pub environment: Option<EnvironmentPreference>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub max_distance: Option<f64>,
    pub options: bool,
}

/// Work out the dates: explicit endpoints, then a preset, then this weekend.
fn resolve_range(ctx: &AppContext, args: &PlanArgs) -> Result<DateRange> {
    let today = ctx.today();
    let hours = ctx.hours();

    let range = if args.start.is_some() || args.end.is_some() {
        range_from_args(args.start.as_deref(), args.end.as_deref(), hours)?
    } else {
        args.preset.unwrap_or(QuickSelect::ThisWeekend).range(today, hours)
    };

    if args.pick {
        return pick::pick_range(ctx, range);
    }
    Ok(range)
}

fn build_request(args: &PlanArgs, settings: &Settings, range: DateRange) -> Result<ItineraryRequest> {
    let city = args.city.clone().unwrap_or_else(|| settings.city.clone());
    let address = args.address.clone().unwrap_or_else(|| settings.user_address.clone());

    let mut request = ItineraryRequest::new(city, address, range);
    request.max_distance_miles = args.max_distance.unwrap_or(settings.max_distance_miles);

    let prefs = &mut request.preferences;
    if let Some(budget) = args.budget {
        prefs.budget_level = budget;
    }
    if let Some(mobility) = args.mobility {
        prefs.mobility = mobility;
    }
    if let Some(environment) = args.environment {
        prefs.environment = environment;
    }
    if !args.interests.is_empty() {
        prefs.interests.clear();
        for interest in &args.interests {
            if !prefs.interests.iter().any(|i| i.eq_ignore_ascii_case(interest)) {
                prefs.toggle_interest(interest)?;
            }
        }
    }

    request.validate()?;
    Ok(request)
}

pub async fn run(ctx: &AppContext, args: PlanArgs) -> Result<()> {
    let range = resolve_range(ctx, &args)?;
    let request = build_request(&args, &ctx.settings, range)?;
    tracing::info!(
        start = %request.start_date,
        end = %request.end_date,
        interests = ?request.preferences.interests,
        "requesting itinerary"
    );

    println!("{}", request.range().render());
    println!();

    let client = ctx.client()?;

    if args.options {
        let message = "Building itinerary options (this can take a few minutes)...";
        let response = match with_spinner(message, client.create_itinerary_options(&request)).await {
            Ok(response) => response,
            Err(e) => anyhow::bail!("Failed to create itinerary options: {}\n{}", e, retry_hint()),
        };

        if response.options.is_empty() {
            println!("{}", "The planner returned no options.".dimmed());
        }
        for (i, option) in response.options.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{}", format!("Option {}", i + 1).bold().underline());
            println!("{}", option.render());
        }
        for warning in &response.warnings {
            println!("{} {}", "!".yellow(), warning.yellow());
        }
        return Ok(());
    }

    let message = "Building your itinerary (this can take a few minutes)...";
    let itinerary = match with_spinner(message, client.create_itinerary(&request)).await {
        Ok(itinerary) => itinerary,
        Err(e) => anyhow::bail!("Failed to create itinerary: {}\n{}", e, retry_hint()),
    };

    tracing::debug!(activities = itinerary.activity_count(), "itinerary received");
    println!("{}", itinerary.render());
    Ok(())
}
