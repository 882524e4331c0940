use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use dialoguer::Input;
use owo_colors::OwoColorize;

use weekender_core::calendar::{DatePicker, QuickSelect};
use weekender_core::date_range::{DateRange, parse_date};

use crate::render::render_picker;

use super::{AppContext, range_from_args};

/// One line of picker input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Day number within the visible month.
    Click(NaiveDate),
    /// Full date, possibly in another month.
    Jump(NaiveDate),
    Preset(QuickSelect),
    Navigate(i32),
    Done,
    Help,
}

fn parse_action(input: &str, visible_month: NaiveDate) -> Option<Action> {
    let input = input.trim().to_ascii_lowercase();
    match input.as_str() {
        "<" | "p" | "prev" => return Some(Action::Navigate(-1)),
        ">" | "n" | "next" => return Some(Action::Navigate(1)),
        "" | "d" | "done" | "q" => return Some(Action::Done),
        "?" | "h" | "help" => return Some(Action::Help),
        "t" => return Some(Action::Preset(QuickSelect::ThisWeekend)),
        "w" => return Some(Action::Preset(QuickSelect::NextWeekend)),
        "f" => return Some(Action::Preset(QuickSelect::FridayNight)),
        _ => {}
    }

    if let Ok(preset) = input.parse::<QuickSelect>() {
        return Some(Action::Preset(preset));
    }
    if let Ok(day) = input.parse::<u32>() {
        return visible_month.with_day(day).map(Action::Click);
    }
    parse_date(&input).ok().map(Action::Jump)
}

const HELP: &str = "\
  <day>         pick a day of the shown month (e.g. 13)
  YYYY-MM-DD    pick any date
  < / >         previous / next month
  t, w, f       this weekend, next weekend, Friday night
  done          finish (or just press enter)";

/// Run the picker until the user is done and return the chosen range.
pub fn pick_range(ctx: &AppContext, initial: DateRange) -> Result<DateRange> {
    let today = ctx.today();

    // The host keeps its own copy of the values, updated on every change.
    let selected = Rc::new(RefCell::new(initial.to_inputs()));
    let sink = Rc::clone(&selected);

    let mut picker = DatePicker::new(today, ctx.hours())
        .with_range(initial)
        .on_change(move |start, end| {
            *sink.borrow_mut() = (start.to_string(), end.to_string());
        });
    if let Some(start) = initial.start_day() {
        picker.show_month(start);
    }

    loop {
        println!("\n{}\n", render_picker(&picker, today));

        let line = Input::<String>::new()
            .with_prompt("Pick (? for help)")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        match parse_action(&line, picker.visible_month()) {
            Some(Action::Click(date)) => {
                if !picker.click(date, today) {
                    println!("{}", "That day is in the past.".red());
                }
            }
            Some(Action::Jump(date)) => {
                picker.show_month(date);
                if !picker.click(date, today) {
                    println!("{}", "That day is in the past.".red());
                }
            }
            Some(Action::Preset(preset)) => picker.quick_select(preset, today),
            Some(Action::Navigate(delta)) => picker.navigate(delta),
            Some(Action::Help) => println!("{}", HELP),
            Some(Action::Done) => break,
            None => println!("{} {}", "Didn't understand".red(), line.trim()),
        }
    }

    let (start, end) = selected.borrow().clone();
    Ok(DateRange::from_inputs(&start, &end))
}

pub fn run(ctx: &AppContext, start: Option<String>, end: Option<String>) -> Result<()> {
    let initial = range_from_args(start.as_deref(), end.as_deref(), ctx.hours())?;
    let range = pick_range(ctx, initial)?;

    let (start, end) = range.to_inputs();
    println!("{} {}", start, end);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_day_number_clicks_visible_month() {
        assert_eq!(
            parse_action("13", jan()),
            Some(Action::Click(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()))
        );
        assert_eq!(parse_action("32", jan()), None);
    }

    #[test]
    fn test_full_date_jumps() {
        assert_eq!(
            parse_action("2024-03-02", jan()),
            Some(Action::Jump(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()))
        );
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(parse_action("<", jan()), Some(Action::Navigate(-1)));
        assert_eq!(parse_action(" > ", jan()), Some(Action::Navigate(1)));
        assert_eq!(parse_action("", jan()), Some(Action::Done));
        assert_eq!(parse_action("f", jan()), Some(Action::Preset(QuickSelect::FridayNight)));
        assert_eq!(
            parse_action("next-weekend", jan()),
            Some(Action::Preset(QuickSelect::NextWeekend))
        );
        assert_eq!(parse_action("someday", jan()), None);
    }
}
