//! Domain layer - pure business logic with no infrastructure dependencies.

pub mod intake;
