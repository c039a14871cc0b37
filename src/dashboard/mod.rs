//! Studio UI Module
//!
//! The egui render layer: forwards clicks and key presses to the coordinator
//! and draws whatever the coordinator's instructions describe.

pub mod app;
pub mod components;
pub mod surface;
pub mod theme;
pub mod views;

pub use app::run_dashboard;
