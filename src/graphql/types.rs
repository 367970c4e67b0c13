use crate::model;
use async_graphql::{ID, SimpleObject};

#[derive(SimpleObject, Clone, Debug)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<model::User> for User {
    fn from(user: model::User) -> Self {
        Self {
            id: ID(user.id),
            name: user.name,
            email: user.email,
            password: user.password,
        }
    }
}
