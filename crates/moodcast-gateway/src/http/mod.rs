//! Plain HTTP endpoints.

pub mod health;
