//! Utility functions and types.

use std::fmt::{Debug, Formatter};

/// Redact hides secret material such as SAS signatures or delegation key
/// values when printed through `Debug`.
///
/// - Empty input prints `EMPTY`.
/// - Input shorter than 12 bytes is fully masked as `***`.
/// - Longer input keeps the first and last three characters, so two
///   redacted signatures can still be told apart in logs.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = self.0;
        if s.is_empty() {
            return f.write_str("EMPTY");
        }
        if s.len() < 12 {
            return f.write_str("***");
        }

        // Base64 signatures are ASCII, but fall back to full masking if the
        // edges are not on char boundaries.
        match (s.get(..3), s.get(s.len() - 3..)) {
            (Some(head), Some(tail)) => write!(f, "{head}***{tail}"),
            _ => f.write_str("***"),
        }
    }
}
