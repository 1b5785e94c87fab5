//! # Calgrid Architecture
//!
//! Calgrid prints one month as a text grid whose first column is any weekday the user picks.
//! The logic lives in this library; the binary is a thin client around it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints the grid or the error           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - CalendarApi: validate, then render                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - validate: raw strings → CalendarMonth or CalError        │
//! │  - render: CalendarMonth → CalendarGrid (infallible)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Date arithmetic (weekday of the 1st, month length, leap years) is delegated to `chrono`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Validation and layout
//! - [`model`]: `StartDay`, `CalendarMonth`, `CalendarGrid` and the name tables
//! - [`config`]: Accepted year range
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
