use super::setup::USAGE;
use calgrid::error::CalError;
use calgrid::model::CalendarGrid;
use colored::Colorize;

pub(super) fn print_grid(grid: &CalendarGrid) {
    println!("{}", grid);
}

pub fn print_error(err: &CalError) {
    eprintln!("{} {}", "Error:".red().bold(), err);
    if err.is_usage() {
        eprintln!("{}", USAGE);
    }
}
