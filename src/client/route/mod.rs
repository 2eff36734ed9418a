pub mod admin;
pub mod contact;
pub mod edit_livery;
pub mod home;
pub mod liveries;
pub mod livery_detail;
pub mod login;
pub mod my_liveries;
pub mod not_found;
pub mod register;
pub mod reset_password;
pub mod upload;
pub mod verify_email;

pub use admin::Admin;
pub use contact::Contact;
pub use edit_livery::EditLivery;
pub use home::Home;
pub use liveries::Liveries;
pub use livery_detail::LiveryDetail;
pub use login::Login;
pub use my_liveries::MyLiveries;
pub use not_found::NotFound;
pub use register::Register;
pub use reset_password::ResetPassword;
pub use upload::Upload;
pub use verify_email::VerifyEmail;
