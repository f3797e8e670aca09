use async_trait::async_trait;

/// Yes/no confirmation capability.
///
/// Destructive operations ask before overwriting or deleting an install.
/// The CLI binds this to a stdin prompt; tests and the updater substitute
/// non-interactive implementations.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, message: &str, default_yes: bool) -> std::io::Result<bool>;
}

/// Answers yes to everything. Used where confirmation is bypassed.
pub struct AutoApprove;

#[async_trait]
impl Confirm for AutoApprove {
    async fn confirm(&self, _message: &str, _default_yes: bool) -> std::io::Result<bool> {
        Ok(true)
    }
}
