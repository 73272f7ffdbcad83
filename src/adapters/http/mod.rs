//! HTTP adapters.

pub mod chat;
