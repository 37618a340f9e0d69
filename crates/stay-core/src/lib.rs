//! Core types and definitions for the STAY encounter.
//!
//! This crate defines the vocabulary shared across the other crates:
//! zone geometry, configuration, errors, events, snapshot state, and constants.
//! It has no dependency on any runtime, scene host, or ECS.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
