//! Adapters - concrete implementations of the ports plus the HTTP surface.

pub mod ai;
pub mod http;
pub mod script;
pub mod storage;
pub mod transcript;
