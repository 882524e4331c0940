//! Click-to-select range state machine.
//!
//! The picker owns only the selection, the selection mode and the visible
//! month. "Today" is passed into every call that needs it, and every change
//! is reported to the host through the change listener as a pair of
//! ISO-minute strings.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use super::grid::{CalendarDay, first_of_month, month_grid, shift_month};
use super::preset::QuickSelect;
use super::DayHours;
use crate::date_range::DateRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    #[default]
    SelectingStart,
    SelectingEnd,
}

type ChangeListener = Box<dyn FnMut(&str, &str)>;

pub struct DatePicker {
    range: DateRange,
    mode: SelectionMode,
    visible_month: NaiveDate,
    hours: DayHours,
    on_change: Option<ChangeListener>,
}

impl DatePicker {
    /// Empty picker showing the month that contains `today`.
    pub fn new(today: NaiveDate, hours: DayHours) -> Self {
        DatePicker {
            range: DateRange::default(),
            mode: SelectionMode::SelectingStart,
            visible_month: first_of_month(today),
            hours,
            on_change: None,
        }
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = ordered(range);
        self
    }

    /// Register the host's change listener, called with `(start, end)`.
    pub fn on_change(mut self, listener: impl FnMut(&str, &str) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    /// Replace the selection with values supplied by the host.
    /// Does not notify the listener. An end before the start is dropped.
    pub fn sync_inputs(&mut self, start: &str, end: &str) {
        self.range = ordered(DateRange::from_inputs(start, end));
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn visible_month(&self) -> NaiveDate {
        self.visible_month
    }

    pub fn hours(&self) -> DayHours {
        self.hours
    }

    /// Hint shown above the grid.
    pub fn prompt(&self) -> &'static str {
        match self.mode {
            SelectionMode::SelectingStart => "Choose your start date, then end date",
            SelectionMode::SelectingEnd => "Now select your end date",
        }
    }

    /// The visible month's grid.
    pub fn grid(&self, today: NaiveDate) -> Vec<CalendarDay> {
        month_grid(self.visible_month, today, &self.range)
    }

    /// Handle a click on `date`. Returns false if the day was not clickable.
    ///
    /// A date earlier than the current start always becomes the new start,
    /// whatever the mode. So does a click on the start's own day when the
    /// start is later than the end-of-day time.
    pub fn click(&mut self, date: NaiveDate, today: NaiveDate) -> bool {
        let in_visible_month =
            date.year() == self.visible_month.year() && date.month() == self.visible_month.month();
        if !in_visible_month || date < today {
            tracing::debug!(%date, "ignoring click on unavailable day");
            return false;
        }

        let end = date.and_time(self.hours.day_end);
        let before_start = self.range.start.is_some_and(|start| end < start);

        if self.mode == SelectionMode::SelectingStart || before_start {
            let start = date.and_time(self.hours.day_start);
            self.range.start = Some(start);
            if self.range.end.is_some_and(|end| end < start) {
                self.range.end = None;
            }
            self.mode = SelectionMode::SelectingEnd;
        } else {
            self.range.end = Some(end);
            self.mode = SelectionMode::SelectingStart;
        }

        self.emit();
        true
    }

    /// Overwrite both endpoints from a preset.
    pub fn quick_select(&mut self, preset: QuickSelect, today: NaiveDate) {
        self.range = preset.range(today, self.hours);
        self.mode = SelectionMode::SelectingStart;
        self.emit();
    }

    /// Move the visible month. The selection is untouched.
    pub fn navigate(&mut self, delta: i32) {
        self.visible_month = shift_month(self.visible_month, delta);
    }

    /// Jump straight to the month containing `date`.
    pub fn show_month(&mut self, date: NaiveDate) {
        self.visible_month = first_of_month(date);
    }

    fn emit(&mut self) {
        let (start, end) = self.range.to_inputs();
        tracing::debug!(start = %start, end = %end, mode = ?self.mode, "selection changed");
        if let Some(listener) = self.on_change.as_mut() {
            listener(&start, &end);
        }
    }
}

fn ordered(mut range: DateRange) -> DateRange {
    if let (Some(start), Some(end)) = (range.start, range.end)
        && end < start
    {
        range.end = None;
    }
    range
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("range", &self.range)
            .field("mode", &self.mode)
            .field("visible_month", &self.visible_month)
            .field("hours", &self.hours)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::date_range::parse_input;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn recording_picker(today: NaiveDate) -> (DatePicker, Rc<RefCell<Vec<(String, String)>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let picker = DatePicker::new(today, DayHours::default())
            .on_change(move |start, end| sink.borrow_mut().push((start.to_string(), end.to_string())));
        (picker, calls)
    }

    #[test]
    fn test_two_clicks_select_a_range() {
        let today = day(2024, 1, 10);
        let (mut picker, calls) = recording_picker(today);

        assert!(picker.click(day(2024, 1, 12), today));
        assert_eq!(picker.mode(), SelectionMode::SelectingEnd);
        assert!(picker.click(day(2024, 1, 14), today));
        assert_eq!(picker.mode(), SelectionMode::SelectingStart);

        assert_eq!(
            *calls.borrow(),
            vec![
                ("2024-01-12T09:00".to_string(), String::new()),
                ("2024-01-12T09:00".to_string(), "2024-01-14T21:00".to_string()),
            ]
        );
    }

    #[test]
    fn test_earlier_click_replaces_start_while_selecting_end() {
        let today = day(2024, 1, 1);
        let (mut picker, calls) = recording_picker(today);
        picker.sync_inputs("2024-01-10T09:00", "");

        picker.click(day(2024, 1, 10), today);
        assert_eq!(picker.mode(), SelectionMode::SelectingEnd);

        assert!(picker.click(day(2024, 1, 5), today));
        assert_eq!(picker.range().start_day(), Some(day(2024, 1, 5)));
        assert_eq!(picker.range().end, None);
        assert_eq!(picker.mode(), SelectionMode::SelectingEnd);
        assert_eq!(
            calls.borrow().last().unwrap(),
            &("2024-01-05T09:00".to_string(), String::new())
        );
    }

    #[test]
    fn test_new_start_after_end_clears_end() {
        let today = day(2024, 1, 1);
        let (mut picker, _) = recording_picker(today);
        picker.click(day(2024, 1, 5), today);
        picker.click(day(2024, 1, 7), today);

        picker.click(day(2024, 1, 20), today);
        assert_eq!(picker.range().start_day(), Some(day(2024, 1, 20)));
        assert_eq!(picker.range().end, None);
    }

    #[test]
    fn test_new_start_before_end_keeps_end() {
        let today = day(2024, 1, 1);
        let (mut picker, _) = recording_picker(today);
        picker.click(day(2024, 1, 5), today);
        picker.click(day(2024, 1, 10), today);

        picker.click(day(2024, 1, 8), today);
        assert_eq!(picker.range().start_day(), Some(day(2024, 1, 8)));
        assert_eq!(picker.range().end_day(), Some(day(2024, 1, 10)));
    }

    #[test]
    fn test_same_day_range() {
        let today = day(2024, 1, 10);
        let (mut picker, _) = recording_picker(today);
        picker.click(today, today);
        picker.click(today, today);
        let range = picker.range();
        assert!(range.start.unwrap() <= range.end.unwrap());
        assert_eq!(range.start_day(), range.end_day());
    }

    #[test]
    fn test_click_on_late_start_day_restarts_instead_of_ending() {
        let today = day(2024, 1, 10);
        let (mut picker, calls) = recording_picker(today);
        picker.sync_inputs("2024-01-13T22:00", "");
        picker.click(day(2024, 1, 13), today);
        picker.sync_inputs("2024-01-13T22:00", "");
        assert_eq!(picker.mode(), SelectionMode::SelectingEnd);

        assert!(picker.click(day(2024, 1, 13), today));
        let range = picker.range();
        assert_eq!(range.start, parse_input("2024-01-13T09:00"));
        assert_eq!(range.end, None);
        assert_eq!(picker.mode(), SelectionMode::SelectingEnd);
        assert_eq!(
            calls.borrow().last().unwrap(),
            &("2024-01-13T09:00".to_string(), String::new())
        );

        picker.click(day(2024, 1, 13), today);
        let range = picker.range();
        assert!(range.start.unwrap() <= range.end.unwrap());
    }

    #[test]
    fn test_host_values_with_end_before_start_drop_the_end() {
        let today = day(2024, 1, 10);
        let (mut picker, calls) = recording_picker(today);
        picker.sync_inputs("2024-01-20T09:00", "2024-01-15T21:00");
        assert_eq!(picker.range().start_day(), Some(day(2024, 1, 20)));
        assert_eq!(picker.range().end, None);
        assert!(calls.borrow().is_empty());

        let reversed = DateRange::from_inputs("2024-01-20T09:00", "2024-01-15T21:00");
        let picker = DatePicker::new(today, DayHours::default()).with_range(reversed);
        assert_eq!(picker.range().end, None);

        let same_day = DateRange::from_inputs("2024-01-13T09:00", "2024-01-13T21:00");
        let picker = DatePicker::new(today, DayHours::default()).with_range(same_day);
        assert_eq!(picker.range(), same_day);
    }

    #[test]
    fn test_past_day_is_never_clickable() {
        let today = day(2024, 1, 10);
        let (mut picker, calls) = recording_picker(today);
        assert!(!picker.click(day(2024, 1, 9), today));

        picker.quick_select(QuickSelect::ThisWeekend, today);
        assert!(!picker.click(day(2024, 1, 9), today));
        picker.click(day(2024, 1, 11), today);
        assert!(!picker.click(day(2024, 1, 9), today));

        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn test_days_outside_visible_month_are_ignored() {
        let today = day(2024, 1, 10);
        let (mut picker, calls) = recording_picker(today);
        assert!(!picker.click(day(2024, 2, 1), today));
        assert!(calls.borrow().is_empty());

        picker.navigate(1);
        assert!(picker.click(day(2024, 2, 1), today));
    }

    #[test]
    fn test_quick_select_resets_mode_and_notifies() {
        let today = day(2024, 1, 10);
        let (mut picker, calls) = recording_picker(today);
        picker.click(day(2024, 1, 11), today);
        assert_eq!(picker.mode(), SelectionMode::SelectingEnd);

        picker.quick_select(QuickSelect::ThisWeekend, today);
        assert_eq!(picker.mode(), SelectionMode::SelectingStart);
        assert_eq!(
            calls.borrow().last().unwrap(),
            &("2024-01-13T09:00".to_string(), "2024-01-14T21:00".to_string())
        );
    }

    #[test]
    fn test_navigation_leaves_selection_alone() {
        let today = day(2024, 1, 10);
        let (mut picker, calls) = recording_picker(today);
        picker.quick_select(QuickSelect::NextWeekend, today);
        let before = picker.range();

        picker.navigate(-1);
        assert_eq!(picker.visible_month(), day(2023, 12, 1));
        picker.navigate(2);
        assert_eq!(picker.visible_month(), day(2024, 2, 1));

        assert_eq!(picker.range(), before);
        assert_eq!(picker.mode(), SelectionMode::SelectingStart);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_grid_reflects_selection() {
        let today = day(2024, 1, 10);
        let mut picker = DatePicker::new(today, DayHours::default());
        picker.quick_select(QuickSelect::ThisWeekend, today);
        let grid = picker.grid(today);
        let selected: Vec<_> = grid.iter().filter(|d| d.is_selected).map(|d| d.date).collect();
        assert_eq!(selected, vec![day(2024, 1, 13), day(2024, 1, 14)]);
    }

    #[test]
    fn test_prompt_follows_mode() {
        let today = day(2024, 1, 10);
        let mut picker = DatePicker::new(today, DayHours::default());
        assert_eq!(picker.prompt(), "Choose your start date, then end date");
        picker.click(today, today);
        assert_eq!(picker.prompt(), "Now select your end date");
    }
}
