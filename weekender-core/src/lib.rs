//! Core types for weekender.
//!
//! This crate holds everything that does not touch the network or the terminal:
//! - `calendar`: the date-range picker (month grid, presets, selection state machine)
//! - `date_range` and `clock`: the range entity and the explicit "now" input
//! - `events`, `itinerary`, `food`: planner API wire types and list filtering
//! - `config`: layered client settings

pub mod calendar;
pub mod clock;
pub mod config;
pub mod date_range;
pub mod error;
pub mod events;
pub mod food;
pub mod itinerary;

pub use date_range::DateRange;
pub use error::{WeekenderError, WeekenderResult};
