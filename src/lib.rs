//! # userql - a minimal GraphQL API for users
//!
//! userql exposes create, read, update and delete operations on a single
//! `User` entity over GraphQL, backed by SQLite. Every resolver is a direct
//! pass-through to one data-access call.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://localhost:4000/graphql
//! userql serve
//!
//! # Create a user
//! userql mutate 'createUser(name: "Ann", email: "ann@x.com", password: "pw1") { id }'
//!
//! # List users
//! userql query '{ users { id name email } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Server configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: The `User` data model
//! - [`storage`]: SQLite-backed data access

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `userql.yml` files and CLI overrides.
pub mod config;

/// Error types and result aliases.
///
/// Defines `UserqlError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server mounting it.
pub mod graphql;

pub mod logging;

/// Data models for userql.
pub mod model;

/// Relational storage layer.
///
/// Wraps the shared SQLite pool and the embedded migrations.
pub mod storage;
