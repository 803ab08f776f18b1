//! Authentication service module
//!
//! Handles the session lifecycle: login issues an access/refresh pair,
//! protected requests validate access tokens, refresh mints new access
//! tokens, logout revokes refresh tokens.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
