//! Shared types for the wordle clone server
//!
//! Models are serialized with the exact field names the web client expects,
//! so changing a field name here is a wire-format change.

pub mod constants;
pub mod messages;
pub mod models;

pub use messages::ApiMessage;
pub use models::*;
