//! Report module for workout summaries.

pub mod message;

pub use message::{InfoMessage, Locale, ReportError, ReportFormat};
