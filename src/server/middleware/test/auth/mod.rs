use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, BearerToken, Permission},
        session::AuthSession,
    },
    model::user::User,
    service::auth::token::TokenService,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod bearer;
mod current_user;
mod require;

const SECRET: &str = "middleware-test-secret";

fn domain_user(user: entity::user::Model) -> User {
    User::from_entity(user).unwrap()
}
