//! Static data behind the dashboard's chart widgets and tables.
//!
//! All datasets are CSV fixtures embedded at compile time; nothing is fetched
//! at runtime. This crate turns them into typed rows and derives what the
//! widgets draw from them.

pub mod dataset;
pub mod filter;
pub mod format;
pub mod loader;
pub mod models;
pub mod pie;

pub use dataset::Dataset;
