//! # Product Screen
//!
//! The seller's "My Products" screen, run as an actor.
//!
//! [`ProductScreen`] owns the displayed list and processes three inputs one at a time:
//! seller commands from a [`ScreenHandle`], identity changes from its
//! [`IdentitySubscription`], and completions of the remote calls it spawned. Remote
//! calls (store, clipboard, confirmation prompt) never run on the screen task itself,
//! so the screen keeps answering while they are pending. The local list is patched only
//! after the store confirmed a change.
//!
//! ```ignore
//! let (screen, handle) = ProductScreen::new(products, &identity, surface, config);
//! tokio::spawn(screen.run());
//!
//! identity.sign_in(Identity::new("seller_a"));
//! handle.toggle_status(id).await?;
//! ```

pub mod error;
pub mod handle;
pub mod messages;
pub mod state;
pub mod view;

pub use error::ScreenError;
pub use handle::ScreenHandle;
pub use messages::{Deletion, ScreenCommand};
pub use state::{CopiedLinks, Phase, ProductList, ScreenState};
pub use view::{Badge, ProductCard, ScreenView, Tone};

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, info_span, warn, Instrument};

use crate::clients::{ActorClient, ProductClient};
use crate::config::ScreenConfig;
use crate::identity::{IdentityProvider, IdentitySubscription};
use crate::links::{share_link, LinkKind};
use crate::model::{Identity, ProductId, ProductStatus, UserId};
use crate::screen::messages::{Completion, Reply};
use crate::surface::Surface;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this product?";

const LOAD_FAILED: &str = "Failed to load your products.";
const STATUS_FAILED: &str = "Failed to change the product status.";
const DELETED: &str = "Product deleted.";
const DELETE_FAILED: &str = "Failed to delete the product.";
const COPY_FAILED: &str = "Could not copy the link.";
const NOT_ON_SCREEN: &str = "This product is no longer on your list.";

fn status_toast(status: ProductStatus) -> &'static str {
    match status {
        ProductStatus::Active => "Product activated.",
        ProductStatus::Inactive => "Product deactivated.",
    }
}

fn copied_toast(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Product => "Product link copied!",
        LinkKind::Checkout => "Checkout link copied!",
    }
}

/// The screen actor. Build with [`ProductScreen::new`], then spawn [`ProductScreen::run`].
pub struct ProductScreen {
    commands: mpsc::Receiver<ScreenCommand>,
    completions: mpsc::UnboundedReceiver<Completion>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    identity: IdentitySubscription,
    products: ProductClient,
    surface: Surface,
    config: ScreenConfig,
    state: ScreenState,
    published: watch::Sender<ScreenState>,
    /// Bumped on every identity change; fetch results carrying an older token are stale.
    fetch_token: u64,
    /// Owner of the records currently in `state.products`.
    loaded_owner: Option<UserId>,
}

impl ProductScreen {
    /// Creates the screen and the handle that drives it.
    ///
    /// Subscribes to `identity` right away; the subscription lives as long as the screen.
    pub fn new(
        products: ProductClient,
        identity: &IdentityProvider,
        surface: Surface,
        config: ScreenConfig,
    ) -> (Self, ScreenHandle) {
        let (command_tx, commands) = mpsc::channel(config.buffer_size.max(1));
        let (completion_tx, completions) = mpsc::unbounded_channel();
        let (published, state_rx) = watch::channel(ScreenState::default());

        let handle = ScreenHandle::new(command_tx, state_rx, config.clone());
        let screen = Self {
            commands,
            completions,
            completion_tx,
            identity: identity.subscribe(),
            products,
            surface,
            config,
            state: ScreenState::default(),
            published,
            fetch_token: 0,
            loaded_owner: None,
        };
        (screen, handle)
    }

    /// Runs the screen until every [`ScreenHandle`] has been dropped.
    pub async fn run(mut self) {
        info!(origin = %self.config.origin, "Screen started");

        let initial = self.identity.current();
        self.on_identity(initial);

        let mut watching = true;
        loop {
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(command) => self.on_command(command),
                    None => break,
                },
                change = self.identity.changed(), if watching => match change {
                    Some(identity) => self.on_identity(identity),
                    None => {
                        debug!("Identity provider gone");
                        watching = false;
                    }
                },
                Some(completion) = self.completions.recv() => self.on_completion(completion),
            }
        }

        info!(products = self.state.products.len(), "Screen stopped");
    }

    fn publish(&self) {
        self.published.send_replace(self.state.clone());
    }

    fn on_identity(&mut self, identity: Option<Identity>) {
        self.fetch_token += 1;
        let token = self.fetch_token;

        let Some(identity) = identity else {
            info!(token, "No identity, showing sign-in prompt");
            self.loaded_owner = None;
            self.state.phase = Phase::SignedOut;
            self.state.products.clear();
            self.state.copied.clear();
            self.publish();
            return;
        };

        let owner = identity.uid;
        if self.loaded_owner.as_ref() != Some(&owner) {
            self.loaded_owner = None;
            self.state.products.clear();
            self.state.copied.clear();
        }
        self.state.phase = Phase::Loading;
        self.publish();

        info!(%owner, token, "Loading products");
        let products = self.products.clone();
        let completions = self.completion_tx.clone();
        let span = info_span!("load_products", %owner, token);
        tokio::spawn(
            async move {
                let result = products.list_for_owner(owner.clone()).await;
                let _ = completions.send(Completion::Fetched {
                    token,
                    owner,
                    result,
                });
            }
            .instrument(span),
        );
    }

    fn on_command(&mut self, command: ScreenCommand) {
        match command {
            ScreenCommand::ToggleStatus { id, respond_to } => self.toggle_status(id, respond_to),
            ScreenCommand::Delete { id, respond_to } => self.delete(id, respond_to),
            ScreenCommand::CopyLink {
                id,
                kind,
                respond_to,
            } => self.copy_link(id, kind, respond_to),
        }
    }

    /// Answers a command for a product that is not displayed.
    fn reject_unknown<R>(&self, id: ProductId, respond_to: Reply<R>) {
        warn!(%id, "Product not on screen");
        self.surface.notifier.error(NOT_ON_SCREEN);
        let _ = respond_to.send(Err(ScreenError::UnknownProduct(id)));
    }

    fn toggle_status(&mut self, id: ProductId, respond_to: Reply<ProductStatus>) {
        let Some(current) = self.state.products.get(&id).map(|record| record.status) else {
            return self.reject_unknown(id, respond_to);
        };
        let status = current.toggled();
        debug!(%id, from = %current, to = %status, "Toggling status");

        let products = self.products.clone();
        let completions = self.completion_tx.clone();
        let span = info_span!("toggle_status", %id, %status);
        tokio::spawn(
            async move {
                let result = products.set_status(id.clone(), status).await;
                let _ = completions.send(Completion::StatusSet {
                    id,
                    status,
                    result,
                    respond_to,
                });
            }
            .instrument(span),
        );
    }

    fn delete(&mut self, id: ProductId, respond_to: Reply<Deletion>) {
        if self.state.products.get(&id).is_none() {
            return self.reject_unknown(id, respond_to);
        }

        let products = self.products.clone();
        let confirm = self.surface.confirm.clone();
        let completions = self.completion_tx.clone();
        let span = info_span!("delete_product", %id);
        tokio::spawn(
            async move {
                let result = if confirm.confirm(DELETE_PROMPT).await {
                    products.delete(id.clone()).await.map(|()| Deletion::Deleted)
                } else {
                    Ok(Deletion::Cancelled)
                };
                let _ = completions.send(Completion::Deleted {
                    id,
                    result,
                    respond_to,
                });
            }
            .instrument(span),
        );
    }

    fn copy_link(&mut self, id: ProductId, kind: LinkKind, respond_to: Reply<String>) {
        if self.state.products.get(&id).is_none() {
            return self.reject_unknown(id, respond_to);
        }
        let url = share_link(&self.config.origin, kind, &id);
        debug!(%id, %kind, %url, "Copying link");

        let clipboard = self.surface.clipboard.clone();
        let completions = self.completion_tx.clone();
        let span = info_span!("copy_link", %id, %kind);
        tokio::spawn(
            async move {
                let result = clipboard.write_text(&url).await;
                let _ = completions.send(Completion::Copied {
                    id,
                    kind,
                    url,
                    result,
                    respond_to,
                });
            }
            .instrument(span),
        );
    }

    fn on_completion(&mut self, completion: Completion) {
        match completion {
            Completion::Fetched {
                token,
                owner,
                result,
            } => {
                if token != self.fetch_token {
                    debug!(%owner, token, current = self.fetch_token, "Discarding stale fetch");
                    return;
                }
                self.state.phase = Phase::Ready;
                match result {
                    Ok(records) => {
                        info!(%owner, count = records.len(), "Products loaded");
                        self.state.products.replace(records);
                        self.loaded_owner = Some(owner);
                    }
                    Err(e) => {
                        warn!(%owner, error = %e, "Loading products failed");
                        self.surface.notifier.error(LOAD_FAILED);
                    }
                }
                self.publish();
            }
            Completion::StatusSet {
                id,
                status,
                result,
                respond_to,
            } => match result {
                Ok(_) => {
                    if !self.state.products.set_status(&id, status) {
                        debug!(%id, "Toggled product left the screen meanwhile");
                    }
                    info!(%id, %status, "Status changed");
                    self.publish();
                    self.surface.notifier.info(status_toast(status));
                    let _ = respond_to.send(Ok(status));
                }
                Err(e) => {
                    warn!(%id, error = %e, "Status change failed");
                    self.surface.notifier.error(STATUS_FAILED);
                    let _ = respond_to.send(Err(e.into()));
                }
            },
            Completion::Deleted {
                id,
                result,
                respond_to,
            } => match result {
                Ok(Deletion::Deleted) => {
                    self.state.products.remove(&id);
                    info!(%id, remaining = self.state.products.len(), "Product deleted");
                    self.publish();
                    self.surface.notifier.success(DELETED);
                    let _ = respond_to.send(Ok(Deletion::Deleted));
                }
                Ok(Deletion::Cancelled) => {
                    debug!(%id, "Deletion cancelled");
                    let _ = respond_to.send(Ok(Deletion::Cancelled));
                }
                Err(e) => {
                    warn!(%id, error = %e, "Deletion failed");
                    self.surface.notifier.error(DELETE_FAILED);
                    let _ = respond_to.send(Err(e.into()));
                }
            },
            Completion::Copied {
                id,
                kind,
                url,
                result,
                respond_to,
            } => match result {
                Ok(()) => {
                    let epoch = self.state.copied.mark(kind, id.clone());
                    info!(%id, %kind, "Link copied");
                    self.publish();
                    self.surface.notifier.success(copied_toast(kind));
                    self.expire_later(kind, epoch);
                    let _ = respond_to.send(Ok(url));
                }
                Err(e) => {
                    warn!(%id, %kind, error = %e, "Copying link failed");
                    self.surface.notifier.error(COPY_FAILED);
                    let _ = respond_to.send(Err(e.into()));
                }
            },
            Completion::CopyExpired { kind, epoch } => {
                if self.state.copied.expire(kind, epoch) {
                    debug!(%kind, "Copy confirmation expired");
                    self.publish();
                }
            }
        }
    }

    fn expire_later(&self, kind: LinkKind, epoch: u64) {
        let completions = self.completion_tx.clone();
        let after = self.config.copy_feedback;
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = completions.send(Completion::CopyExpired { kind, epoch });
        });
    }
}
