//! Product catalog persistence interface.

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub mod mock;

pub use mock::{FailingProductRepository, MockProductRepository};
pub use r#trait::ProductRepository;
