//! Flag protocol
//!
//! JSON request/response payloads for the two flag operations and the
//! command abstraction that decodes and executes them.

pub mod command;
pub mod get;
pub mod set;

pub use command::{Command, decode};
pub use get::{GetCmd, GetFlagResponse};
pub use set::{SetCmd, SetFlagResponse};

/// Request path of the GET command
pub const GET_PATH: &str = "/get";
/// Request path of the SET command
pub const SET_PATH: &str = "/set";
