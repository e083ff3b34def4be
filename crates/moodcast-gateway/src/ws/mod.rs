//! WebSocket subsystem: connection lifecycle, the client registry, and
//! state fan-out.

pub mod connection;
pub mod publish;
pub mod registry;
