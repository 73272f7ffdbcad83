//! Application layer - use cases wiring the domain to the ports.

mod process_message;

pub use process_message::ProcessMessageHandler;
