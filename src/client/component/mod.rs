pub mod header;
pub mod layout;
pub mod livery_card;
pub mod markdown;
pub mod page;
pub mod protected_layout;

pub use header::Header;
pub use layout::Layout;
pub use livery_card::{LiveryCard, StatusBadge};
pub use markdown::Markdown;
pub use page::Page;
pub use protected_layout::{ProtectedLayout, RequiresAdmin, RequiresLoggedIn};
