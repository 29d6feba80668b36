//! Workflow logic for building membership sets and checking exported witnesses.
//!
//! The CLI is a thin layer over [`commands`]; everything here takes plain config structs and
//! paths so it can be driven from other front ends.

pub mod commands;
pub mod common;
pub mod export;
mod secrets;
