use tracing::{error, info};

use crate::clients::DirectoryClient;
use crate::config::DirectoryConfig;
use crate::store::DirectoryState;
use crate::store_actor::StoreActor;

/// Starts the store actor and hands out the client wired to it.
pub struct DirectorySystem {
    pub client: DirectoryClient,
    handle: tokio::task::JoinHandle<()>,
}

impl DirectorySystem {
    /// Must be called from within a tokio runtime.
    pub fn new(config: &DirectoryConfig) -> Self {
        let initial = if config.seed_sample_data {
            DirectoryState::seeded()
        } else {
            DirectoryState::default()
        };
        Self::with_state(config, initial)
    }

    pub fn with_state(config: &DirectoryConfig, initial: DirectoryState) -> Self {
        info!(
            channel_capacity = config.channel_capacity,
            employee_count = initial.len(),
            "Starting directory system"
        );
        let (actor, store) = StoreActor::new(config.channel_capacity, initial);
        let handle = tokio::spawn(actor.run());

        Self {
            client: DirectoryClient::new(store),
            handle,
        }
    }

    /// Drops the client (closing the actor's mailbox) and waits for the actor.
    ///
    /// Clones of the client still held elsewhere keep the actor alive.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down directory system...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Store actor task failed: {:?}", e);
            return Err(format!("Store actor task failed: {:?}", e));
        }

        info!("Directory system shutdown complete.");
        Ok(())
    }
}
