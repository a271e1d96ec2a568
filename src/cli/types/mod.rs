//! Type-safe wrappers and enums for command-line arguments and API data.

pub mod ids;
pub mod options;
pub mod time;
