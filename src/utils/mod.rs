//! Utility modules for dtutil.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date-time formatting, parsing and difference functions
//!
//! All utilities are pure functions over caller-owned values and are safe to
//! call from any thread.

pub mod datetime;
