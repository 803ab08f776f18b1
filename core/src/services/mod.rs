//! Business services

pub mod auth;
pub mod token;

pub use auth::AuthService;
pub use token::{TokenCodec, TokenConfig};
