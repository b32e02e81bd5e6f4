//! Parsed email address value type.

use super::error::ValidationError;
use std::fmt;

/// A structurally valid `local@domain` pair.
///
/// Parsing strips one display-name wrapper (`"Ann Smith <ann@gmail.com>"`
/// becomes `ann@gmail.com`) and requires exactly one `@` with non-empty
/// parts on both sides. Provider policy (the domain allow-list) is enforced
/// separately by [`rules::validate_email`](super::rules::validate_email).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    local: String,
    domain: String,
}

impl EmailAddress {
    /// Parses a raw input into local part and domain.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEmail`] when the input does not
    /// split into exactly two non-empty parts around a single `@`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let address = strip_display_name(raw);
        let Some((local, domain)) = address.split_once('@') else {
            return Err(ValidationError::InvalidEmail);
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self {
            local: local.to_owned(),
            domain: domain.to_owned(),
        })
    }

    /// Returns the local part (before the `@`).
    #[must_use]
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Returns the domain (after the `@`).
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local, self.domain)
    }
}

/// Unwraps a `"Display Name <address>"` form to the bare address.
///
/// Inputs without an angle-bracket wrapper are returned trimmed.
fn strip_display_name(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_suffix('>')
        .and_then(|inner| inner.rsplit_once('<'))
        .map_or(trimmed, |(_, address)| address.trim())
}
