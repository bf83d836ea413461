//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no backend API of its own; the only outbound call is the
//! contact form delivery through `relay`.

pub mod relay;
