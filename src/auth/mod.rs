//! Auth Module
//!
//! Demo-grade signup and login backed by an in-memory user directory.
//! Passwords are stored as SHA-256 digests and logins are answered with a
//! session token. Nothing here survives a restart.
//!
//! ## Submodules
//! - **`users`**: The concurrent `UserDirectory` (accounts and sessions).
//! - **`handlers`**: `/signup` and `/login` HTTP handlers.

pub mod handlers;
pub mod users;
