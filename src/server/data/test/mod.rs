mod auth_token;
mod contact;
mod livery;
mod session;
mod user;
