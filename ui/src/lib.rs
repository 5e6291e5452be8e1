//! egui front-end for QR Studio.

pub mod app;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::QrStudioApp;
