//! # Seller Catalog demo
//!
//! Seeds the store with two sellers, then walks one of them through the screen: load,
//! toggle, copy a checkout link, delete, sign out.

use seller_catalog::config::ScreenConfig;
use seller_catalog::lifecycle::{setup_tracing, Marketplace};
use seller_catalog::links::LinkKind;
use seller_catalog::model::{Identity, NewProduct};
use seller_catalog::screen::{Phase, ScreenView};
use seller_catalog::surface::{MemoryClipboard, StaticConfirm, Surface, TracingNotifier};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ScreenConfig::from_env().map_err(|e| e.to_string())?;
    let clipboard = MemoryClipboard::new();
    let surface = Surface::new(TracingNotifier, clipboard.clone(), StaticConfirm(true));
    let market = Marketplace::new(config, surface);

    let span = tracing::info_span!("seeding");
    let (cashews, capulana) = async {
        let products = &market.products;
        let cashews = products
            .create_product(NewProduct::new("seller_a", "Cashew nuts", 1500.0))
            .await
            .map_err(|e| e.to_string())?;
        let capulana = products
            .create_product(NewProduct::new("seller_a", "Capulana", 420.5))
            .await
            .map_err(|e| e.to_string())?;
        products
            .create_product(NewProduct::new("seller_b", "Piri-piri sauce", 180.0))
            .await
            .map_err(|e| e.to_string())?;
        products
            .approve(cashews.clone())
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((cashews, capulana))
    }
    .instrument(span)
    .await?;

    let mut state = market.screen.subscribe();
    market
        .identity
        .sign_in(Identity::new("seller_a").with_display_name("Ana"));
    state
        .wait_for(|s| s.phase == Phase::Ready)
        .await
        .map_err(|e| e.to_string())?;

    if let ScreenView::Products { heading, cards } = market.screen.view() {
        info!(heading, cards = cards.len(), "Rendered");
        for card in &cards {
            info!(
                title = %card.title,
                price = %card.price_label,
                status = %card.status.label,
                approval = %card.approval.label,
                "Card"
            );
        }
    }

    let status = market
        .screen
        .toggle_status(cashews.clone())
        .await
        .map_err(|e| e.to_string())?;
    info!(id = %cashews, %status, "Toggled");

    let url = market
        .screen
        .copy_link(cashews, LinkKind::Checkout)
        .await
        .map_err(|e| e.to_string())?;
    info!(%url, clipboard = ?clipboard.contents(), "Copied");

    let outcome = market
        .screen
        .delete(capulana.clone())
        .await
        .map_err(|e| e.to_string())?;
    info!(id = %capulana, ?outcome, remaining = market.screen.state().products.len(), "Deleted");

    market.identity.sign_out();
    state
        .wait_for(|s| s.phase == Phase::SignedOut)
        .await
        .map_err(|e| e.to_string())?;
    drop(state);

    market.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
