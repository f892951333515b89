//! UI Components
//!
//! Reusable Leptos components.

mod dashboard;
mod delete_confirm_button;
mod login_page;
mod register_page;
mod search_bar;
mod status_banner;
mod sweet_card;
mod sweet_form;

pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use login_page::LoginPage;
pub use register_page::RegisterPage;
pub use search_bar::SearchBar;
pub use status_banner::StatusBanner;
pub use sweet_card::SweetCard;
pub use sweet_form::SweetForm;
