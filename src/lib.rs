//! dtutil - formatting, parsing and differences for local date-times
//!
//! This library wraps chrono with letter-based patterns (`MM/dd/yyyy HH:mm`)
//! and a calendar-aware difference in a chosen unit. Every operation is a
//! pure function; there is no shared state.
//!
//! # Modules
//!
//! * [`utils`] - The date-time operations
//! * [`pattern`] - Pattern compiler
//! * [`unit`] - Difference units
//! * [`error`] - Error types
//! * [`cli`] - Command-line front end
//! * [`config`] - Application configuration management

/// Command-line parsing and dispatch
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Error types shared by all operations
pub mod error;

/// Logging setup
pub mod logger;

/// Letter-based date-time pattern compiler
pub mod pattern;

/// Units for date-time differences
pub mod unit;

/// Utility functions for date/time handling
pub mod utils;

pub use error::{DateTimeError, Result};
pub use pattern::Pattern;
pub use unit::Unit;
pub use utils::datetime::{diff, format_default, format_with_pattern, parse_default, parse_with_pattern};
