//! # vitrine-entity
//!
//! Domain entity models for Vitrine. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.
//!
//! Wire and column names stay Portuguese (the schema this service inherits);
//! Rust identifiers are English, bridged with serde/sqlx renames.

pub mod product;
pub mod user;
