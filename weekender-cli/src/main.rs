mod client;
mod commands;
mod logging;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use weekender_core::calendar::QuickSelect;
use weekender_core::config::Settings;
use weekender_core::events::{EnvironmentFilter, EventQuery, SortBy};
use weekender_core::food::{DEFAULT_FOOD_LIMIT, DEFAULT_FOOD_LOCATION, FoodSearch};
use weekender_core::itinerary::{BudgetLevel, EnvironmentPreference, Mobility};

use commands::AppContext;
use commands::plan::PlanArgs;

#[derive(Parser)]
#[command(name = "weekender")]
#[command(about = "Pick your dates, see what's on, and plan a weekend itinerary")]
struct Cli {
    /// Config file (defaults to ~/.config/weekender/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, hide = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the planner API is reachable
    Health,
    /// What weekender does
    About,
    /// Show a month, optionally with a date range highlighted
    Calendar {
        /// Month to show (YYYY-MM); defaults to the range start or this month
        #[arg(short, long)]
        month: Option<String>,

        /// Range start (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        #[arg(long)]
        start: Option<String>,

        /// Range end (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        #[arg(long)]
        end: Option<String>,
    },
    /// Pick a date range interactively
    Pick {
        /// Initial range start
        #[arg(long)]
        start: Option<String>,

        /// Initial range end
        #[arg(long)]
        end: Option<String>,
    },
    /// Print the dates of a quick-select preset
    Weekend {
        /// this-weekend, next-weekend or friday-night
        #[arg(default_value = "this-weekend")]
        preset: QuickSelect,
    },
    /// Browse this week's events
    Events {
        /// Match against event titles and details
        #[arg(short, long, default_value = "")]
        search: String,

        /// all, indoor, outdoor or unknown
        #[arg(short, long, default_value = "all")]
        environment: EnvironmentFilter,

        /// date or title
        #[arg(long, default_value = "date")]
        sort: SortBy,
    },
    /// Request an itinerary from the planner
    Plan {
        /// this-weekend, next-weekend or friday-night (default: this-weekend)
        #[arg(short, long, conflicts_with_all = ["start", "end"])]
        preset: Option<QuickSelect>,

        /// Start date/time (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        #[arg(long)]
        start: Option<String>,

        /// End date/time (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        #[arg(long)]
        end: Option<String>,

        /// Pick the dates interactively first
        #[arg(long)]
        pick: bool,

        /// Interest to plan around; repeat for several
        #[arg(short, long = "interest")]
        interests: Vec<String>,

        /// low, medium or high
        #[arg(long)]
        budget: Option<BudgetLevel>,

        /// walk, transit or drive
        #[arg(long)]
        mobility: Option<Mobility>,

        /// indoor, outdoor or either
        #[arg(long)]
        environment: Option<EnvironmentPreference>,

        /// Starting address
        #[arg(short, long)]
        address: Option<String>,

        /// City to plan in
        #[arg(long)]
        city: Option<String>,

        /// How far from the starting address to look, in miles
        #[arg(long)]
        max_distance: Option<f64>,

        /// Ask for several alternative itineraries
        #[arg(long)]
        options: bool,
    },
    /// Search for places to eat
    Food {
        query: String,

        #[arg(short, long, default_value = DEFAULT_FOOD_LOCATION)]
        location: String,

        #[arg(long, default_value_t = DEFAULT_FOOD_LIMIT)]
        limit: u32,

        /// Price tier, e.g. "1,2"
        #[arg(long)]
        price: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = tracing::subscriber::with_default(logging::bootstrap(cli.verbose), || match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    })?;
    logging::init(&settings, cli.verbose);

    let ctx = AppContext::new(settings, cli.today.as_deref())?;

    match cli.command {
        Commands::Health => commands::health::run(&ctx).await,
        Commands::About => {
            commands::about::run(&ctx);
            Ok(())
        }
        Commands::Calendar { month, start, end } => commands::calendar::run(&ctx, month, start, end),
        Commands::Pick { start, end } => commands::pick::run(&ctx, start, end),
        Commands::Weekend { preset } => {
            commands::weekend::run(&ctx, preset);
            Ok(())
        }
        Commands::Events {
            search,
            environment,
            sort,
        } => {
            let query = EventQuery {
                search,
                environment,
                sort_by: sort,
            };
            commands::events::run(&ctx, query).await
        }
        Commands::Plan {
            preset,
            start,
            end,
            pick,
            interests,
            budget,
            mobility,
            environment,
            address,
            city,
            max_distance,
            options,
        } => {
            let args = PlanArgs {
                preset,
                start,
                end,
                pick,
                interests,
                budget,
                mobility,
                environment,
                address,
                city,
                max_distance,
                options,
            };
            commands::plan::run(&ctx, args).await
        }
        Commands::Food {
            query,
            location,
            limit,
            price,
        } => {
            let search = FoodSearch {
                query,
                location,
                limit,
                price,
            };
            commands::food::run(&ctx, search).await
        }
    }
}
