use crate::{
    model::user::UserRole,
    server::{data::user::UserRepository, error::AppError, model::user::CreateUserParams},
};
use entity::prelude::User;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_username_or_email;
mod set_email_verified;
mod set_role;
mod update_password_hash;
