use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::error::UserqlError;
use crate::model::{NewUser, UserUpdate};
use crate::storage::UserRepository;

use super::types::*;

pub type UserqlSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around the process-wide repository.
pub fn build_schema(repo: UserRepository) -> UserqlSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(repo)
        .finish()
}

/// Render the schema as SDL.
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

fn get_repo<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a UserRepository> {
    ctx.data::<UserRepository>()
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// List every user
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Option<User>>>> {
        let users = get_repo(ctx)?.find_many().await?;
        Ok(Some(users.into_iter().map(|u| Some(u.into())).collect()))
    }

    /// Get a single user by ID, or null if none matches
    async fn user(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<User>> {
        let user = get_repo(ctx)?.find_unique(&id).await?;
        Ok(user.map(Into::into))
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create a new user
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        password: String,
    ) -> async_graphql::Result<Option<User>> {
        let user = get_repo(ctx)?
            .create(NewUser {
                name,
                email,
                password,
            })
            .await?;
        Ok(Some(user.into()))
    }

    /// Update the name and password of the user with the given email
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> async_graphql::Result<Option<User>> {
        // The record is located by email; `id` does not take part.
        tracing::debug!(id = id.as_str(), "updateUser keyed on email");

        let email = email.ok_or(UserqlError::MissingArgument("email"))?;
        let user = get_repo(ctx)?
            .update_by_email(&email, UserUpdate { name, password })
            .await?;
        Ok(Some(user.into()))
    }

    /// Delete a user, returning its state before removal
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<User>> {
        let user = get_repo(ctx)?.delete(&id).await?;
        Ok(Some(user.into()))
    }
}
