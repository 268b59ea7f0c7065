//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod endpoints;
pub mod footer;
pub mod header;
pub mod health_panel;
pub mod logs;
pub mod models_panel;
