//! Fixed response messages
//!
//! Client-facing error text is generic on purpose and never includes the
//! rejected input.

pub const PING_MESSAGE: &str = "Server is up and running";

pub const INVALID_REQUEST_BODY: &str = "Invalid request body";

pub const INVALID_GAME_MODE: &str = "Invalid game mode";

pub const INVALID_ID: &str = "Invalid ID";

pub const GAME_NOT_FOUND: &str = "Game record with specified id not found";

pub const USER_NOT_FOUND: &str = "User with specified id not found";

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
