use tracing::{error, info};

use crate::clients::ProductClient;
use crate::config::ScreenConfig;
use crate::identity::IdentityProvider;
use crate::screen::{ProductScreen, ScreenHandle};
use crate::surface::Surface;

/// The running system: the product store, the identity provider and one seller screen.
///
/// # Example
///
/// ```ignore
/// let market = Marketplace::new(ScreenConfig::default(), surface);
/// market.products.create_product(NewProduct::new("seller_a", "Honey", 80.0)).await?;
/// market.identity.sign_in(Identity::new("seller_a"));
/// market.shutdown().await?;
/// ```
pub struct Marketplace {
    /// Client for the product store. Seeding and moderation go through here.
    pub products: ProductClient,

    /// Who is signed in.
    pub identity: IdentityProvider,

    /// The seller's "My Products" screen.
    pub screen: ScreenHandle,

    /// Store task first, screen task second.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Marketplace {
    /// Spawns the store and the screen. Must be called inside a Tokio runtime.
    pub fn new(config: ScreenConfig, surface: Surface) -> Self {
        let (product_actor, product_client) = crate::product_actor::new();
        let products = ProductClient::new(product_client);
        let store_handle = tokio::spawn(product_actor.run(()));

        let identity = IdentityProvider::default();
        let (screen, handle) = ProductScreen::new(products.clone(), &identity, surface, config);
        let screen_handle = tokio::spawn(screen.run());

        Self {
            products,
            identity,
            screen: handle,
            handles: vec![store_handle, screen_handle],
        }
    }

    /// Stops the screen, then the store, and waits for both tasks.
    ///
    /// Clones of the handle or client made by the caller must be dropped first,
    /// otherwise the matching task keeps running and this call waits for it.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if every task ended cleanly
    /// - `Err(String)` if a task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down marketplace...");

        drop(self.screen);
        drop(self.products);
        drop(self.identity);

        for handle in self.handles.into_iter().rev() {
            if let Err(e) = handle.await {
                error!("Task failed: {:?}", e);
                return Err(format!("Task failed: {:?}", e));
            }
        }

        info!("Marketplace shutdown complete.");
        Ok(())
    }
}
