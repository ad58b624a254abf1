//! Moderation actions for the product store.
//!
//! Approval is owned by an external moderation process; the seller screen only reads
//! it. These actions are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

/// Custom actions for product records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    /// Marks the record as approved.
    Approve,
    /// Sends the record back to the moderation queue.
    ReturnToPending,
}
