use owo_colors::OwoColorize;

use weekender_core::calendar::QuickSelect;

use crate::render::Render;

use super::AppContext;

/// Print the range a preset selects today, in input form and long form.
pub fn run(ctx: &AppContext, preset: QuickSelect) {
    let range = preset.range(ctx.today(), ctx.hours());
    let (start, end) = range.to_inputs();

    println!("{}", preset.label().bold());
    println!("{} {}", start, end);
    println!("{}", range.render());
}
