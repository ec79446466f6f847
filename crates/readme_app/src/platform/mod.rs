mod app;
mod clipboard;
mod effects;
mod terminal;
pub mod logging;
mod ui;

pub use app::run_app;
