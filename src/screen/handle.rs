use tokio::sync::{mpsc, oneshot, watch};
use tracing::debug;

use crate::config::ScreenConfig;
use crate::links::LinkKind;
use crate::model::{ProductId, ProductStatus};
use crate::screen::messages::{Deletion, Reply, ScreenCommand};
use crate::screen::view::{self, ScreenView};
use crate::screen::{ScreenError, ScreenState};

/// Drives a running [`ProductScreen`](crate::screen::ProductScreen) and observes its state.
///
/// Cheap to clone. The screen stops once every handle is dropped.
#[derive(Clone)]
pub struct ScreenHandle {
    sender: mpsc::Sender<ScreenCommand>,
    state: watch::Receiver<ScreenState>,
    config: ScreenConfig,
}

impl ScreenHandle {
    pub(crate) fn new(
        sender: mpsc::Sender<ScreenCommand>,
        state: watch::Receiver<ScreenState>,
        config: ScreenConfig,
    ) -> Self {
        Self {
            sender,
            state,
            config,
        }
    }

    async fn request<R>(
        &self,
        command: impl FnOnce(Reply<R>) -> ScreenCommand,
    ) -> Result<R, ScreenError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(command(respond_to))
            .await
            .map_err(|_| ScreenError::ScreenClosed)?;
        response.await.map_err(|_| ScreenError::ScreenDropped)?
    }

    /// Flips the product between Active and Inactive. Returns the new status.
    pub async fn toggle_status(&self, id: ProductId) -> Result<ProductStatus, ScreenError> {
        debug!(%id, "toggle_status called");
        self.request(|respond_to| ScreenCommand::ToggleStatus { id, respond_to })
            .await
    }

    /// Deletes the product once the seller confirmed.
    pub async fn delete(&self, id: ProductId) -> Result<Deletion, ScreenError> {
        debug!(%id, "delete called");
        self.request(|respond_to| ScreenCommand::Delete { id, respond_to })
            .await
    }

    /// Copies the product's share link of the given kind. Returns the copied URL.
    pub async fn copy_link(&self, id: ProductId, kind: LinkKind) -> Result<String, ScreenError> {
        debug!(%id, %kind, "copy_link called");
        self.request(|respond_to| ScreenCommand::CopyLink {
            id,
            kind,
            respond_to,
        })
        .await
    }

    /// The latest published state.
    pub fn state(&self) -> ScreenState {
        self.state.borrow().clone()
    }

    /// A receiver that is notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<ScreenState> {
        self.state.clone()
    }

    /// Renders the latest published state.
    pub fn view(&self) -> ScreenView {
        view::render(&self.state.borrow(), &self.config)
    }
}
