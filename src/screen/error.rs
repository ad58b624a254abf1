//! Errors returned to callers of a [`ScreenHandle`](crate::screen::ScreenHandle).

use thiserror::Error;

use crate::model::ProductId;
use crate::product_actor::ProductError;
use crate::surface::ClipboardError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScreenError {
    /// The document store rejected or failed the call.
    #[error("Store error: {0}")]
    Store(#[from] ProductError),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// The product is not in the displayed list.
    #[error("Product not on screen: {0}")]
    UnknownProduct(ProductId),

    /// The screen task has stopped and no longer accepts commands.
    #[error("Screen closed")]
    ScreenClosed,

    /// The screen stopped before answering.
    #[error("Screen dropped the request")]
    ScreenDropped,
}
