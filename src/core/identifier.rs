//! Identifier validation and quoting for generated SQL.
//!
//! Table and column names cannot be bound as statement parameters, so every
//! identifier that ends up in generated SQL goes through this module:
//! validate for suspicious input (null bytes, excessive length), then apply
//! PostgreSQL double-quoting with embedded quotes doubled.
//!
//! Quoting makes names case-sensitive, exactly as they are spelled by the
//! caller.

use crate::error::{BulkError, Result};

/// Maximum identifier length. PostgreSQL truncates identifiers at
/// NAMEDATALEN - 1 bytes; anything longer is a caller mistake.
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Validate an identifier.
///
/// Rejects empty identifiers, identifiers containing null bytes, and
/// identifiers exceeding [`MAX_IDENTIFIER_LENGTH`] bytes.
///
/// # Errors
///
/// Returns [`BulkError::Identifier`] with a descriptive message.
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(BulkError::Identifier(
            "identifier cannot be empty".to_string(),
        ));
    }

    if name.contains('\0') {
        return Err(BulkError::Identifier(format!(
            "identifier contains null byte: {:?}",
            name
        )));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(BulkError::Identifier(format!(
            "identifier exceeds {} bytes (got {}): {:?}",
            MAX_IDENTIFIER_LENGTH,
            name.len(),
            name
        )));
    }

    Ok(())
}

/// Quote a PostgreSQL identifier.
///
/// Escapes double quotes by doubling them and wraps the name in double
/// quotes. Validates the identifier first.
pub fn quote_ident(name: &str) -> Result<String> {
    validate_identifier(name)?;
    Ok(format!("\"{}\"", name.replace('"', "\"\"")))
}
