//! PostgreSQL repository implementations

mod product_repository_impl;

pub use product_repository_impl::PgProductRepository;
