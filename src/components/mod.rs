//! UI Components
//!
//! Reusable Leptos components.

mod category_panel;
mod subcategory_panel;
mod entry_modal;
mod image_input;
mod pagination_bar;
mod delete_confirm_button;
mod toaster;

pub use category_panel::CategoryPanel;
pub use subcategory_panel::SubCategoryPanel;
pub use toaster::Toaster;
