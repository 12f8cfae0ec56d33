use cart_store::cart_actor::CartError;
use cart_store::config::CartConfig;
use cart_store::lifecycle::{setup_tracing, CartSystem};
use cart_store::model::{Product, ProductId};
use cart_store::services::{FileStore, MemoryStore, PersistentStore, TracingNotifier};
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = CartConfig::load(config_path.as_deref())?;
    info!(?config, "Starting cart demo");

    let storage: Arc<dyn PersistentStore> = match &config.data_dir {
        Some(dir) => Arc::new(FileStore::new(dir)),
        None => Arc::new(MemoryStore::new()),
    };
    let system = CartSystem::new(&config, storage, Arc::new(TracingNotifier));

    let outcome = run_demo(&system).await;
    if let Err(e) = &outcome {
        error!(error = %e, "Demo failed");
    }

    // Shut down even when the demo failed.
    system.shutdown().await?;
    outcome?;

    info!("Demo completed successfully");
    Ok(())
}

async fn run_demo(system: &CartSystem) -> Result<(), Box<dyn Error>> {
    let span = tracing::info_span!("catalog_seeding");
    async {
        let catalog = &system.catalog_client;
        catalog
            .insert_product(Product::new(1, "Running Sneaker", 179.9, "sneaker.jpg"), 3)
            .await?;
        catalog
            .insert_product(Product::new(2, "Trail Boot", 259.0, "boot.jpg"), 1)
            .await?;
        catalog
            .insert_product(Product::new(3, "Slip-On", 99.5, "slip-on.jpg"), 5)
            .await
    }
    .instrument(span)
    .await?;

    let cart = &system.cart_client;

    // A cart persisted by an earlier run is reported, then emptied so the
    // script below always starts from the same state.
    let span = tracing::info_span!("restore");
    async {
        let restored = cart.cart().await?;
        if !restored.is_empty() {
            info!(
                size = restored.len(),
                items = restored.total_items(),
                "Found cart from a previous run, clearing it"
            );
            for entry in restored.entries() {
                cart.remove_product(entry.product_id).await?;
            }
        }
        Ok::<_, CartError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("shopping");
    async {
        cart.add_product(ProductId(1)).await?;
        cart.add_product(ProductId(2)).await?;
        cart.add_product(ProductId(1)).await?;

        // The slip-on has not been added yet.
        match cart.update_product_amount(ProductId(3), 1).await {
            Ok(_) => warn!("Update of a product outside the cart was accepted"),
            Err(e) => error!(error = %e, "Update rejected"),
        }

        cart.add_product(ProductId(3)).await?;
        cart.update_product_amount(ProductId(3), 4).await?;

        // Only one boot is in stock.
        match cart.add_product(ProductId(2)).await {
            Ok(_) => warn!("Add beyond stock was accepted"),
            Err(e) => error!(error = %e, "Add rejected"),
        }

        cart.remove_product(ProductId(2)).await?;
        Ok::<_, CartError>(())
    }
    .instrument(span)
    .await?;

    let committed = cart.cart().await?;
    for entry in committed.entries() {
        info!(
            product_id = %entry.product_id,
            title = %entry.display.title,
            quantity = entry.quantity,
            line_total = entry.line_total(),
            "Cart line"
        );
    }
    info!(
        items = committed.total_items(),
        subtotal = committed.subtotal(),
        "Cart summary"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_store::mock::RecordingNotifier;

    fn quantities(cart: &cart_store::model::Cart) -> Vec<(u32, u32)> {
        cart.entries()
            .iter()
            .map(|e| (e.product_id.0, e.quantity))
            .collect()
    }

    #[tokio::test]
    async fn test_demo_reruns_over_persisted_cart() {
        let config = CartConfig::default();
        let storage = MemoryStore::new();

        for _ in 0..2 {
            let system = CartSystem::new(
                &config,
                Arc::new(storage.clone()),
                Arc::new(RecordingNotifier::new()),
            );

            run_demo(&system).await.unwrap();

            let cart = system.cart_client.cart().await.unwrap();
            assert_eq!(quantities(&cart), vec![(1, 2), (3, 4)]);
            system.shutdown().await.unwrap();
        }

        assert!(storage.get(&config.storage_key).is_some());
    }
}
