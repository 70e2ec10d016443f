//! Command pipeline
//!
//! Raw line -> parser -> Command (+ prefilled answers) -> CommandExecutor,
//! with the Prompter gathering every answer the command needs.

pub mod executor;
pub mod input;
pub mod parser;
pub mod repl;

pub use executor::{CommandExecutor, Flow};
pub use input::Prompter;
pub use parser::{Command, CommandLine, OverwriteTarget};
pub use repl::run_session;
