//! Core library modules of the logsheet client.
//!
//! ## Features
//!
//! - **Totals**: working hours, meter run and production derived from a shift
//! - **Submission**: logsheet model, form reducer, time-of-day input
//! - **Session**: token claims, roles, encrypted password cache
//! - **Infrastructure**: configuration, data storage, messaging
//! - **Presentation**: console tables, status summary, file export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use logsheet::libs::form::{FormAction, LogsheetForm};
//!
//! let mut form = LogsheetForm::new();
//! form.apply(FormAction::CommencedTime("08:00".into()));
//! form.apply(FormAction::CompletedTime("17:00".into()));
//! assert_eq!(form.totals().working_hours, 9.0);
//! ```

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod form;
pub mod logsheet;
pub mod messages;
pub mod secret;
pub mod session;
pub mod summary;
pub mod totals;
pub mod view;
