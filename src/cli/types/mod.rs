//! Type-safe wrappers and enums for roster data.

pub mod format;
pub mod ids;
