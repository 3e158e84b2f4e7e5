//! CLI command implementations.

pub mod completions;
pub mod dispatcher;
pub mod encode;
pub mod init;
pub mod patterns;
pub mod validate;

pub use completions::CompletionsCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use encode::EncodeCommand;
pub use init::InitCommand;
pub use patterns::PatternsCommand;
pub use validate::ValidateCommand;
