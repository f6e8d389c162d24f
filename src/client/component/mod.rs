pub mod formatted_text;
pub mod header;
pub mod layout;
pub mod modal;
pub mod notification;
pub mod page;
pub mod pagination;

pub use formatted_text::FormattedText;
pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use notification::{NotificationList, Notifications};
pub use page::Page;
pub use pagination::Pagination;
