pub mod commands;
pub mod handlers;

pub use commands::{BackendArg, Cli, Commands};
