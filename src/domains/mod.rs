//! Domains module containing business logic organized by bounded contexts.
//!
//! The server only exposes tools; prompts and resources are not served.

pub mod tools;
