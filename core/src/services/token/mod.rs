//! Token codec module for signing and verifying session tokens
//!
//! Access and refresh tokens are both signed claims payloads; they differ
//! in secret and in whether an expiry is embedded and enforced.

mod codec;
mod config;

pub use codec::TokenCodec;
pub use config::TokenConfig;
