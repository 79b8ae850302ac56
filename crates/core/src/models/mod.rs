//! Data models shared between the server and its clients

mod game;
mod user;
mod validation;

pub use game::*;
pub use user::*;
pub use validation::*;
