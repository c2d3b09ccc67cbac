use item_store::{ItemDraft, ItemStore, StoreClient, StoreError};
use tracing::{error, info};

/// The runtime orchestrator for the catalog.
///
/// Owns the store actor's task handle and the primary client. The HTTP
/// layer gets its own clone of the client via [`CatalogSystem::store`].
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::start();
/// system.seed().await?;
/// // ... serve requests against system.store.clone() ...
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for the store actor.
    pub store: StoreClient,

    /// Task handle for the running actor (used for graceful shutdown).
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Creates the store actor and spawns its run loop.
    pub fn start() -> Self {
        let (actor, store) = ItemStore::new(32);
        let handle = tokio::spawn(actor.run());
        Self { store, handle }
    }

    /// Populates the store with the example items so the list view has
    /// something to show on first use. Call once, before serving.
    pub async fn seed(&self) -> Result<(), StoreError> {
        let item_a = self
            .store
            .save(ItemDraft {
                name: "itemA".to_string(),
                price: 10000,
                quantity: 10,
            })
            .await?;
        let item_b = self
            .store
            .save(ItemDraft {
                name: "itemB".to_string(),
                price: 20000,
                quantity: 20,
            })
            .await?;
        info!(first = %item_a.id, second = %item_b.id, "Seeded example items");
        Ok(())
    }

    /// Gracefully shuts the system down.
    ///
    /// Dropping the client closes the channel; the actor drains whatever
    /// is queued and exits its loop. Any remaining client clones (e.g.
    /// inside a still-running router) must be dropped by the caller first,
    /// or the actor keeps serving them.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog system...");
        drop(self.store);

        if let Err(e) = self.handle.await {
            error!("Store actor task failed: {:?}", e);
            return Err(format!("Store actor task failed: {e:?}"));
        }

        info!("Catalog system shutdown complete.");
        Ok(())
    }
}
