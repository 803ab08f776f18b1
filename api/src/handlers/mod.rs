//! Cross-route handler utilities

pub mod error;
