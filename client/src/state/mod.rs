//! Client-side reactive state modules.
//!
//! DESIGN
//! ======
//! State types are plain Rust structs wrapped in `RwSignal`s and provided via
//! Leptos context. Keeping them free of browser types lets the transitions be
//! unit tested off-browser.

pub mod contact;
pub mod theme;
pub mod ui;
