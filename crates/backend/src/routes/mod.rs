//! REST API routes

pub mod games;
pub mod health;
pub mod users;

// Re-export all route handlers
pub use games::*;
pub use health::*;
pub use users::*;
