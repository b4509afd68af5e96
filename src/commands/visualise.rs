//! Visualise command - print the bit pattern of a decimal value

use anyhow::{Context, Result};
use cursor_list::visualise::{self, IntType};

/// Fixed message for any rejected input
pub const INPUT_ERROR: &str = "Input error.";

/// Render `decimal` as the bit pattern of `type_name`
///
/// An unknown type is an error. A decimal value the type cannot hold is not:
/// the returned line is [`INPUT_ERROR`] in place of the bits.
pub fn execute(type_name: &str, decimal: &str) -> Result<String> {
    let ty: IntType = type_name
        .parse()
        .with_context(|| format!("Failed to visualise '{}' as {}", decimal, type_name))?;

    match visualise::decimal_to_binary(ty, decimal) {
        Ok(bits) => {
            tracing::debug!(%ty, decimal, "visualised value");
            Ok(bits)
        }
        Err(err) => {
            tracing::debug!(%err, %ty, "rejected decimal input");
            Ok(INPUT_ERROR.to_string())
        }
    }
}
