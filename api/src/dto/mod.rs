//! Request and response payloads

pub mod auth;
pub mod error;
pub mod product;

pub use error::{ErrorResponse, ErrorResponseExt};
