use super::render::print_grid;
use super::setup::Cli;
use calgrid::api::CalendarApi;
use calgrid::error::{CalError, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

/// A lone argument may be `--help` or `--version`; any other shape is taken as plain values,
/// so a start day such as `-x` reaches validation.
fn parse_args(argv: Vec<String>) -> std::result::Result<Cli, clap::Error> {
    if argv.len() == 2 {
        Cli::try_parse_from(argv)
    } else {
        Ok(Cli::from_values(argv.into_iter().skip(1)))
    }
}

pub fn run() -> Result<()> {
    let argv: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let cli = match parse_args(argv) {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                return Ok(());
            }
            _ => return Err(CalError::InvalidArguments(first_line(&e.to_string()))),
        },
    };

    let (month, year, start_day) = required_args(&cli)?;
    debug!(month, year, start_day, "calendar requested");

    let api = CalendarApi::default();
    let grid = api.month_grid(month, year, start_day)?;
    print_grid(&grid);
    Ok(())
}

fn required_args(cli: &Cli) -> Result<(&str, &str, &str)> {
    match (
        cli.month.as_deref(),
        cli.year.as_deref(),
        cli.start_day.as_deref(),
    ) {
        (Some(month), Some(year), Some(start_day)) if cli.extra.is_empty() => {
            Ok((month, year, start_day))
        }
        _ => Err(CalError::ArgumentCount {
            found: cli.positional_count(),
        }),
    }
}

// clap renders "error: <what>" followed by its own usage block; keep only the first part
fn first_line(message: &str) -> String {
    let line = message.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
