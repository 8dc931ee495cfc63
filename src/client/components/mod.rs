pub mod attendance;
pub mod confirm_dialog;
pub mod navbar;
pub mod notice_banner;
pub mod page;

pub use confirm_dialog::ConfirmDialog;
pub use navbar::Navbar;
pub use notice_banner::NoticeBanner;
pub use page::Page;
