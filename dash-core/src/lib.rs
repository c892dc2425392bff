//! Core types for the admin dashboard.
//!
//! - `nav`: the page enum and the fixed navigation registry
//! - `sidebar`: the Expanded/Collapsed state machine and its width transition
//! - `icon`: the icon set referenced by the registry and stat cards
//! - `config`: layout and logging configuration embedded at compile time
//! - `error`: the shared error type

pub mod config;
pub mod error;
pub mod icon;
pub mod nav;
pub mod sidebar;

pub use error::{DashError, Result};
