use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use tokio::sync::mpsc;
use uuid::Uuid;

/// Opaque identifier for one live client connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(String);

impl ClientId {
    /// Generate a fresh random client ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outbound payload channel for one connection. The connection task drains
/// the receiving end into its socket sink.
pub type ClientSender = mpsc::Sender<String>;

/// Thread-safe set of active client connections.
///
/// Membership is mutated from two directions: connection tasks add and
/// remove themselves on connect/disconnect, and the publisher prunes entries
/// whose send failed. A single mutex serializes every membership operation;
/// the lock is never held across I/O, callers snapshot first and send after
/// the lock is released.
pub struct ClientRegistry {
    clients: Mutex<HashMap<ClientId, ClientSender>>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self {
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Register a connection. Returns the new number of active clients.
    ///
    /// Re-inserting an existing id replaces its sender; the registry never
    /// holds two entries for one connection.
    pub fn add(&self, id: ClientId, sender: ClientSender) -> usize {
        let mut clients = self.clients.lock().unwrap();
        clients.insert(id, sender);
        clients.len()
    }

    /// Deregister a connection. Removing an absent id is a no-op, so the
    /// publisher pruning a client and that client's own disconnect can both
    /// run in either order. Returns the new number of active clients.
    pub fn remove(&self, id: &ClientId) -> usize {
        let mut clients = self.clients.lock().unwrap();
        clients.remove(id);
        clients.len()
    }

    /// Point-in-time copy of the current membership, taken under the lock.
    pub fn snapshot(&self) -> Vec<(ClientId, ClientSender)> {
        let clients = self.clients.lock().unwrap();
        clients
            .iter()
            .map(|(id, tx)| (id.clone(), tx.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.clients.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.lock().unwrap().is_empty()
    }
}

impl Default for ClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}
