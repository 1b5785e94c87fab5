//! # CLI Layer
//!
//! One client of the calgrid library. This is the only place that reads argv, writes to
//! stdout/stderr, or decides on an exit status (the latter together with `main.rs`).
//!
//! - `setup`: clap definitions and the version string
//! - `commands`: `run()`, dispatch to [`calgrid::api::CalendarApi`]
//! - `render`: printing the grid and errors

mod commands;
mod render;
mod setup;

pub use commands::run;
pub use render::print_error;
