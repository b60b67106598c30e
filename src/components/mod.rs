//! UI Components
//!
//! Pages and the Leptos components they are built from.

mod catalog_page;
mod feedback_message;
mod form_field;
mod login_page;
mod product_grid;
mod register_page;
mod search_bar;
mod session_badge;
mod submit_button;

pub use catalog_page::CatalogPage;
pub use feedback_message::FeedbackMessage;
pub use form_field::FormField;
pub use login_page::LoginPage;
pub use product_grid::ProductGrid;
pub use register_page::RegisterPage;
pub use search_bar::SearchBar;
pub use session_badge::SessionBadgeButton;
pub use submit_button::SubmitButton;
