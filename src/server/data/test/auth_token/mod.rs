use crate::server::{
    data::auth_token::AuthTokenRepository, error::AppError, model::auth_token::TokenPurpose,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod delete_by_user_and_purpose;
mod find_valid;
