//! Data models for userql.
//!
//! - [`User`]: The single persisted entity
//! - [`NewUser`]: Field values for inserting a user
//! - [`UserUpdate`]: Partial field values for overwriting a user

mod user;

pub use user::{NewUser, User, UserUpdate};
