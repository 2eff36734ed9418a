#[cfg(feature = "web")]
pub mod admin;
#[cfg(feature = "web")]
pub mod auth;
#[cfg(feature = "web")]
pub mod contact;
#[cfg(feature = "web")]
pub mod helper;
#[cfg(feature = "web")]
pub mod livery;
#[cfg(feature = "web")]
pub mod upload;
