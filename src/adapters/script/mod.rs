//! Script adapters - loading the intake script from external sources.

mod json_loader;

pub use json_loader::{load_script, parse_script};
