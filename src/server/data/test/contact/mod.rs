use crate::{
    model::contact::ContactType,
    server::{data::contact::ContactRepository, error::AppError, model::contact::CreateContactParams},
};
use chrono::{Duration, Utc};
use entity::prelude::Contact;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
