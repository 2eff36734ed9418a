//! Cron jobs run alongside the web server.

pub mod livery_review;
pub mod maintenance;
