//! Feature modules. Each has a `controller` (handlers), `service` (logic)
//! and `router`.

pub mod auth;
pub mod users;
