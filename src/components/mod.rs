//! UI Components
//!
//! Reusable Leptos components.

mod navbar;
mod loading;
mod pagination;
mod search_bar;
mod stat_card;
mod delete_confirm_button;

pub use navbar::{Navbar, Route};
pub use loading::Loading;
pub use pagination::Pagination;
pub use search_bar::SearchBar;
pub use stat_card::StatCard;
pub use delete_confirm_button::DeleteConfirmButton;
