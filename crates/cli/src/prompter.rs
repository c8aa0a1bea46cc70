use anyhow::Result;
use thiserror::Error;

/// Error type for user cancellation (Ctrl+C or ESC)
#[derive(Debug, Error)]
#[error("")]
pub struct UserCancelled;

/// Dependency injection interface for interactive prompts.
///
/// Commands accept `&dyn Prompter` so tests can answer prompts without a terminal.
pub trait Prompter: Send + Sync {
    /// # Errors
    /// Returns error if user cancels the confirmation or interaction fails.
    fn confirm(&self, message: &str) -> Result<bool>;
}

fn handle_inquire_result<T>(result: Result<T, inquire::InquireError>) -> Result<T> {
    match result {
        Ok(v) => Ok(v),
        Err(
            inquire::InquireError::OperationCanceled | inquire::InquireError::OperationInterrupted,
        ) => Err(UserCancelled.into()),
        Err(e) => Err(e.into()),
    }
}

/// Real implementation using inquire crate
#[derive(Default)]
pub struct InquirePrompter;

#[cfg(not(tarpaulin_include))]
impl Prompter for InquirePrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        handle_inquire_result(inquire::Confirm::new(message).with_default(true).prompt())
    }
}

/// Mock implementation that returns predefined values (for testing)
pub struct MockPrompter {
    pub confirm_value: bool,
}

impl Default for MockPrompter {
    fn default() -> Self {
        Self {
            confirm_value: true,
        }
    }
}

impl Prompter for MockPrompter {
    fn confirm(&self, _message: &str) -> Result<bool> {
        Ok(self.confirm_value)
    }
}
