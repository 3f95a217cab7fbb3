//! Concrete sqlx repository implementations.

pub mod product;
pub mod user;

pub use product::ProductRepository;
pub use user::UserRepository;
