//! # Logsheet - equipment logsheet submission and review
//!
//! A command-line client for the daily equipment logsheets kept by machine
//! operators: fill in a shift, let the working hours, meter run and
//! production be derived, submit it, and follow its review.
//!
//! ## Features
//!
//! - **Totals Calculation**: hour buckets per work status, overnight shifts, meter run
//! - **Submission**: interactive form with operator defaults and 12-hour time entry
//! - **Dashboard**: status counts, detail view, CSV and JSON export
//! - **Review**: pending queue, accept or reject with a reason
//! - **Accounts**: bulk user creation, password change, cached encrypted password
//!
//! ## Usage
//!
//! ```rust,no_run
//! use logsheet::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
