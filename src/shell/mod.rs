//! Shell command execution.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{CapturedOutput, CommandRunner, CommandStatus, SystemRunner};
pub use mock::MockRunner;
pub use platform::shell_invocation;
