use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::ws::registry::ClientRegistry;

/// Fans a state key out to every registered client.
///
/// Delivery is best-effort and at-most-once: each publish makes exactly one
/// send attempt per client present in the snapshot, and a failed attempt
/// prunes that client on the spot. A pruned client must reconnect to receive
/// future broadcasts.
pub struct StatePublisher {
    registry: Arc<ClientRegistry>,
}

impl StatePublisher {
    pub fn new(registry: Arc<ClientRegistry>) -> Self {
        Self { registry }
    }

    /// Send `key` to every registered client. Returns the delivered count.
    ///
    /// The snapshot is taken under the registry lock and iterated after it
    /// is released; `try_send` never blocks, so one wedged client cannot
    /// stall delivery to the rest.
    pub fn publish(&self, key: &str) -> usize {
        let targets = self.registry.snapshot();
        if targets.is_empty() {
            debug!(state = %key, "no clients connected, skipping broadcast");
            return 0;
        }

        let mut delivered = 0;
        for (id, sender) in targets {
            match sender.try_send(key.to_string()) {
                Ok(()) => delivered += 1,
                Err(e) => {
                    // Closed and Full both mean the client is gone or wedged;
                    // the failed send is treated as its disconnect.
                    let remaining = self.registry.remove(&id);
                    warn!(client_id = %id, remaining, error = %e, "send failed, pruning client");
                }
            }
        }

        info!(state = %key, delivered, "broadcast state");
        delivered
    }
}
