//! Showcase component modules
//!
//! Contains all individual rendering components

pub mod celebration;
pub mod charts;
pub mod content;
pub mod footer;
pub mod header;
pub mod sidebar;
pub mod tables;
