//! Yes/no prompt shown before destructive actions.

use async_trait::async_trait;

#[async_trait]
pub trait Confirm: Send + Sync {
    /// Shows `prompt` and waits for the seller's answer.
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Always gives the same answer.
#[derive(Debug, Clone, Copy)]
pub struct StaticConfirm(pub bool);

#[async_trait]
impl Confirm for StaticConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!(prompt, answer = self.0, "Confirmation");
        self.0
    }
}
