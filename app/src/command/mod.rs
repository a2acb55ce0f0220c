//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type, enabling
//! compile-time dispatch with no boxing or dynamic trait objects.

mod init;
mod quiz;
mod run;
mod version;

pub use init::InitStrategy;
pub use quiz::QuizStrategy;
pub use run::{RunInput, RunStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type,
/// enabling type-safe parameter passing without runtime casting.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
