//! Application command implementations.
//!
//! This module contains the core logic for each CLI subcommand.

mod build_membership_set;
mod nullifier_uniqueness;
mod verify_witness;

pub use build_membership_set::build_membership_set;
pub use verify_witness::{check_witness_record, verify_witness};

/// Generates and prints the JSON schemas of the exported root and witness records.
///
/// # Errors
/// Returns an error if serialization to JSON fails.
#[allow(clippy::print_stdout, reason = "Prints schema to stdout")]
pub fn membership_schema() -> eyre::Result<()> {
    let root = schemars::schema_for!(zmember_core::schema::records::RootRecord);
    let witness = schemars::schema_for!(zmember_core::schema::records::WitnessRecord);
    println!(
        "Root Record JSON Schema:\n{}",
        serde_json::to_string_pretty(&root)?
    );
    println!(
        "Witness Record JSON Schema:\n{}",
        serde_json::to_string_pretty(&witness)?
    );
    Ok(())
}
