//! Relational storage layer for userql.
//!
//! Users live in a single SQLite table managed by the embedded migrations
//! under `migrations/`:
//!
//! ```sql
//! CREATE TABLE users (
//!     id       TEXT PRIMARY KEY NOT NULL,
//!     name     TEXT NOT NULL,
//!     email    TEXT NOT NULL,
//!     password TEXT NOT NULL
//! );
//! ```
//!
//! ## Components
//!
//! - [`UserRepository`]: CRUD operations for users over a shared pool

mod repository;

pub use repository::{UserRepository, generate_id};
