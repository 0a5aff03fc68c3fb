//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into calls on the core services and
//! render the outcome. No scaffolding rules live here.

pub mod completions;
pub mod config;
pub mod init;
pub mod manifest;
