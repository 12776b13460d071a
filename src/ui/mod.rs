//! UI module for the kTBS launcher
//!
//! Window construction and dialogs, organized into submodules.

pub mod dialogs;
pub mod window;

pub use window::build_ui;
