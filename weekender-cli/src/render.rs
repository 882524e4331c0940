//! Terminal rendering for weekender types.
//!
//! Extension traits that add colored output to weekender-core types using owo_colors.

use chrono::{NaiveDate, NaiveDateTime};
use owo_colors::{OwoColorize, Style};

use weekender_core::calendar::{CalendarDay, DatePicker, QuickSelect};
use weekender_core::date_range::DateRange;
use weekender_core::events::EventItem;
use weekender_core::food::FoodPlace;
use weekender_core::itinerary::{Activity, DayPlan, ItineraryResponse};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

const DAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

fn day_style(day: &CalendarDay) -> Style {
    if day.is_selected {
        return Style::new().black().on_yellow().bold();
    }
    let mut style = Style::new();
    if !day.is_current_month || day.is_past {
        style = style.dimmed();
    } else if day.is_in_range {
        style = style.black().on_bright_yellow();
    } else if day.is_weekend {
        style = style.yellow();
    }
    if day.is_today {
        style = style.bold().underline();
    }
    style
}

impl Render for CalendarDay {
    fn render(&self) -> String {
        format!("{:>2}", self.day()).style(day_style(self)).to_string()
    }
}

/// Month header, weekday labels and six week rows.
pub fn render_month(month: NaiveDate, days: &[CalendarDay]) -> String {
    let mut lines = Vec::new();
    let title = month.format("%B %Y").to_string();
    lines.push(format!("{:^20}", title).bold().to_string());
    lines.push(DAY_LABELS.join(" ").dimmed().to_string());

    for week in days.chunks(7) {
        let cells: Vec<String> = week.iter().map(|d| d.render()).collect();
        lines.push(cells.join(" "));
    }

    lines.join("\n")
}

/// Long form of a picked endpoint, e.g. "Saturday, January 13 9:00 AM".
pub fn format_endpoint(value: NaiveDateTime) -> String {
    value.format("%A, %B %-d %-I:%M %p").to_string()
}

impl Render for DateRange {
    fn render(&self) -> String {
        if self.start.is_none() && self.end.is_none() {
            return "No dates selected".dimmed().to_string();
        }

        let mut lines = vec!["Selected dates:".dimmed().to_string()];
        if let Some(start) = self.start {
            lines.push(format!("  {} {}", "Start:".green(), format_endpoint(start)));
        }
        if let Some(end) = self.end {
            lines.push(format!("  {} {}", "End:  ".red(), format_endpoint(end)));
        }
        lines.join("\n")
    }
}

/// Key that selects a preset in the interactive picker.
pub fn preset_key(preset: &QuickSelect) -> char {
    match preset {
        QuickSelect::ThisWeekend => 't',
        QuickSelect::NextWeekend => 'w',
        QuickSelect::FridayNight => 'f',
    }
}

/// Full picker view: prompt, presets, month grid and current selection.
pub fn render_picker(picker: &DatePicker, today: NaiveDate) -> String {
    let presets: Vec<String> = QuickSelect::ALL
        .iter()
        .map(|p| format!("[{}] {}", preset_key(p), p.label()))
        .collect();

    [
        picker.prompt().bold().to_string(),
        presets.join("   ").dimmed().to_string(),
        String::new(),
        render_month(picker.visible_month(), &picker.grid(today)),
        String::new(),
        picker.range().render(),
    ]
    .join("\n")
}

impl Render for EventItem {
    fn render(&self) -> String {
        let mut lines = Vec::new();
        let when = self.date_hint.as_deref().unwrap_or("");
        let env = match self.environment.as_deref() {
            Some("indoor") => "indoor".cyan().to_string(),
            Some("outdoor") => "outdoor".green().to_string(),
            _ => "mixed".dimmed().to_string(),
        };

        lines.push(format!("{} {} {}", self.title.bold(), when.yellow(), env));
        if let Some(details) = &self.details {
            lines.push(format!("   {}", details));
        }
        if let Some(url) = &self.url {
            lines.push(format!("   {}", url.dimmed()));
        }
        lines.join("\n")
    }
}

impl Render for Activity {
    fn render(&self) -> String {
        let time = match (&self.start_time, &self.end_time) {
            (Some(start), Some(end)) => format!("{}-{}", short_time(start), short_time(end)),
            (Some(start), None) => short_time(start).to_string(),
            _ => String::new(),
        };

        let mut head = format!("{:>11}  {} {}", time, self.name.bold(), format!("({})", self.category).dimmed());
        if let Some(cost) = self.cost_estimate {
            head.push_str(&format!(" ${:.0}", cost));
        }
        if let Some(source) = &self.source {
            head.push_str(&format!(" {}", format!("[{}]", source).dimmed()));
        }

        let mut lines = vec![head];
        for extra in [&self.address, &self.notes, &self.external_url].into_iter().flatten() {
            lines.push(format!("{:>11}  {}", "", extra.dimmed()));
        }
        lines.join("\n")
    }
}

/// "10:00:00" -> "10:00"
fn short_time(time: &str) -> &str {
    time.get(..5).unwrap_or(time)
}

impl Render for DayPlan {
    fn render(&self) -> String {
        let label = match self.day() {
            Some(day) => day.format("%A %b %-d").to_string(),
            None => self.date.clone(),
        };

        let mut lines = vec![label.bold().to_string()];
        if self.activities.is_empty() {
            lines.push(format!("{:>11}  {}", "", "Nothing planned".dimmed()));
        }
        lines.extend(self.activities.iter().map(|a| a.render()));
        lines.join("\n")
    }
}

impl Render for ItineraryResponse {
    fn render(&self) -> String {
        let mut lines = vec![format!("🗓️  {}", self.title.bold())];
        if let Some(summary) = &self.summary {
            lines.push(summary.dimmed().to_string());
        }

        for day in &self.days {
            lines.push(String::new());
            lines.push(day.render());
        }

        if !self.warnings.is_empty() {
            lines.push(String::new());
            for warning in &self.warnings {
                lines.push(format!("{} {}", "!".yellow(), warning.yellow()));
            }
        }

        if !self.sources.is_empty() {
            let sources: Vec<String> =
                self.sources.iter().map(|(name, count)| format!("{name}: {count}")).collect();
            lines.push(String::new());
            lines.push(format!("Sources: {}", sources.join(", ")).dimmed().to_string());
        }

        lines.join("\n")
    }
}

impl Render for FoodPlace {
    fn render(&self) -> String {
        let mut head = self.name.bold().to_string();
        if let Some(rating) = self.rating {
            head.push_str(&format!(" {}", format!("★ {:.1}", rating).yellow()));
        }
        if let Some(price) = &self.price {
            head.push_str(&format!(" {}", price.green()));
        }

        let mut lines = vec![head];
        for extra in [&self.address, &self.url].into_iter().flatten() {
            lines.push(format!("   {}", extra.dimmed()));
        }
        lines.join("\n")
    }
}
