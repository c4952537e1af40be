//! UI Components

mod app;
mod index_page;
mod not_found;
mod status;

pub use app::{App, MainLayout};
pub use index_page::IndexPage;
pub use not_found::NotFoundPage;
