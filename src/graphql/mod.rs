//! GraphQL schema, resolvers and HTTP server for userql.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server on http://localhost:4000/graphql
//! userql serve
//!
//! # Execute a query from the CLI
//! userql query '{ users { id name email } }'
//!
//! # Execute a mutation from the CLI
//! userql mutate 'createUser(name: "Ann", email: "ann@x.com", password: "pw1") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `users`, `user`
//! - **Mutations**: `createUser`, `updateUser`, `deleteUser`

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, UserqlSchema, build_schema, sdl};
pub use server::{GRAPHQL_PATH, endpoint_url, router, run_server};
pub use types::*;
