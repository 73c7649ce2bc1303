//! Utility modules for web, DOM, and display formatting.
//!
//! Provides:
//! - [`race_with_timeout`] - Promise racing with a timeout
//! - [`js_error_message`] - Readable text for thrown JS values
//! - [`truncate_address`] - Compact address display

pub mod dom;
mod format;
mod web;

pub use format::truncate_address;
pub use web::{RaceResult, js_error_message, race_with_timeout};
