//! Shared types for the AI Sommelier site.
//!
//! - `content`: static content model, embedded store and lookup functions
//! - `contact`: contact form submission DTO and its validation rules

pub mod contact;
pub mod content;
