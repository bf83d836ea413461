//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single scrolling page; `home` stacks the section components
//! in reading order.

pub mod home;
