use clap::Parser;

pub const USAGE: &str = "Usage: calgrid <month> <year> <startDay>";

#[derive(Parser, Debug)]
#[command(
    name = "calgrid",
    bin_name = "calgrid",
    version = env!("CALGRID_VERSION"),
    allow_negative_numbers = true,
    override_usage = "calgrid <month> <year> <startDay>"
)]
#[command(about = "Print a month's calendar starting on any weekday", long_about = None)]
pub struct Cli {
    /// Month number (1-12)
    pub month: Option<String>,

    /// Four digit year (1980-2030)
    pub year: Option<String>,

    /// First column of the grid: Su, Mo, Tu, We, Th, Fr or Sa
    pub start_day: Option<String>,

    // Anything past the third value, counted so the error can say how many were given
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl Cli {
    /// Fill the positional slots in order, without looking for flags.
    pub fn from_values(values: impl IntoIterator<Item = String>) -> Self {
        let mut values = values.into_iter();
        Self {
            month: values.next(),
            year: values.next(),
            start_day: values.next(),
            extra: values.collect(),
        }
    }

    pub fn positional_count(&self) -> usize {
        [&self.month, &self.year, &self.start_day]
            .iter()
            .filter(|v| v.is_some())
            .count()
            + self.extra.len()
    }
}
