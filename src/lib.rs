//! Product recommendation service with natural-language explanations
//!
//! The engine turns a user's interaction history into a preference profile,
//! scores the catalog against it, and pairs the ranked results with an
//! explanation from an LLM collaborator (or a deterministic template when
//! the collaborator is unavailable).

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
