pub mod api;
pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod profile;
pub mod theme;

pub use app::App;
