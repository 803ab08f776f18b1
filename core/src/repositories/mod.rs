//! Repository and store interfaces with their in-process implementations.

pub mod product;
pub mod token_store;

pub use product::{FailingProductRepository, MockProductRepository, ProductRepository};
pub use token_store::{InMemoryTokenStore, TokenStore};
