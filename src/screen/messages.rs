//! Messages flowing into the screen task.
//!
//! [`ScreenCommand`]s come from the seller through a
//! [`ScreenHandle`](crate::screen::ScreenHandle). [`Completion`]s come back from the
//! remote calls and timers the screen spawned.

use tokio::sync::oneshot;

use crate::links::LinkKind;
use crate::model::{ProductId, ProductRecord, ProductStatus, UserId};
use crate::product_actor::ProductError;
use crate::screen::ScreenError;
use crate::surface::ClipboardError;

/// One-shot reply channel for a seller command.
pub type Reply<T> = oneshot::Sender<Result<T, ScreenError>>;

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// Confirmed and removed from the store.
    Deleted,
    /// The seller declined the prompt. Nothing was sent to the store.
    Cancelled,
}

#[derive(Debug)]
pub enum ScreenCommand {
    /// Flip Active/Inactive. Replies with the new status.
    ToggleStatus {
        id: ProductId,
        respond_to: Reply<ProductStatus>,
    },
    /// Ask for confirmation, then delete.
    Delete {
        id: ProductId,
        respond_to: Reply<Deletion>,
    },
    /// Write a share link to the clipboard. Replies with the copied URL.
    CopyLink {
        id: ProductId,
        kind: LinkKind,
        respond_to: Reply<String>,
    },
}

#[derive(Debug)]
pub(crate) enum Completion {
    Fetched {
        token: u64,
        owner: UserId,
        result: Result<Vec<ProductRecord>, ProductError>,
    },
    StatusSet {
        id: ProductId,
        status: ProductStatus,
        result: Result<ProductRecord, ProductError>,
        respond_to: Reply<ProductStatus>,
    },
    Deleted {
        id: ProductId,
        result: Result<Deletion, ProductError>,
        respond_to: Reply<Deletion>,
    },
    Copied {
        id: ProductId,
        kind: LinkKind,
        url: String,
        result: Result<(), ClipboardError>,
        respond_to: Reply<String>,
    },
    CopyExpired {
        kind: LinkKind,
        epoch: u64,
    },
}
