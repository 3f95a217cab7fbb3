//! # vitrine-auth
//!
//! Authentication primitives for Vitrine.
//!
//! ## Modules
//!
//! - `jwt` — session token creation and verification
//! - `password` — bcrypt password hashing and verification

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
