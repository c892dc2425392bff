//! Shared Dioxus components and D3.js bridge for the admin dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: reactive `AppState` with Dioxus signals
//! - `components`: the sidebar, chart cards, stat cards and tables

pub mod components;
pub mod js_bridge;
pub mod state;
