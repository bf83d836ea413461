//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page sections from the static `content` tables and
//! read/write shared state from Leptos context providers.

pub mod achievements;
pub mod certificates;
pub mod contact;
pub mod education;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;
pub mod theme_toggle;
pub mod training;
