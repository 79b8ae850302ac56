//! Database operations for the backend using tokio-postgres

mod error;
mod users;
mod games;
mod store;
#[cfg(test)]
mod memory;

// Re-export everything
pub use error::*;
pub use users::*;
pub use games::*;
pub use store::*;
#[cfg(test)]
pub use memory::*;
