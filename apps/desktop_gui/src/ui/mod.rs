//! UI layer: app shell, upload form state, and result rendering.

pub mod app;
pub mod result_panel;
pub mod upload;

pub use app::ReadReviewApp;
