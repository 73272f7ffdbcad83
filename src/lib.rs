//! Sally Intake - scripted conversational intake assistant.
//!
//! Walks visitors through an ordered question script, validates mandatory
//! answers, answers off-script questions through an external language model,
//! and hands sensitive topics off to a human channel.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
