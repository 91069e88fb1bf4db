//! SQLite storage layer.
//!
//! Repository implementations backed by SQLite with WAL mode and split
//! read/write connection pools. Records are stored as JSON documents and
//! filtered with `json_extract`.

pub mod history;
pub mod pool;
pub mod restaurant;

use tablepick_types::error::RepositoryError;

/// Validate a collection name before it is spliced into SQL.
///
/// Table names come from configuration and cannot be bound as parameters,
/// so only `[A-Za-z_][A-Za-z0-9_]*` is accepted.
pub fn validate_identifier(name: &str) -> Result<&str, RepositoryError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(name)
    } else {
        Err(RepositoryError::InvalidIdentifier(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        for name in ["restaurants", "requests_history", "_t1", "T"] {
            assert_eq!(validate_identifier(name).unwrap(), name);
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        for name in ["", "1table", "drop table", "a;b", "x\"y", "ünïcode"] {
            assert!(
                matches!(
                    validate_identifier(name),
                    Err(RepositoryError::InvalidIdentifier(_))
                ),
                "{name:?} should be rejected"
            );
        }
    }
}
