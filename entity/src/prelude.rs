pub use super::auth_token::Entity as AuthToken;
pub use super::contact::Entity as Contact;
pub use super::livery::Entity as Livery;
pub use super::session::Entity as Session;
pub use super::user::Entity as User;
