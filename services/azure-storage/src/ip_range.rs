use std::fmt;

/// Range of IP addresses allowed to use a SAS.
///
/// Formats as `start` or `start-end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SasIpRange {
    /// Starting IP address, e.g. `10.0.0.1`.
    pub start: String,
    /// Optional ending IP address. A single address is allowed when absent.
    pub end: Option<String>,
}

impl SasIpRange {
    /// Allow a single IP address.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: None,
        }
    }

    /// Allow every address between `start` and `end`, inclusive.
    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }
}

impl fmt::Display for SasIpRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end.as_deref() {
            Some(end) if !end.is_empty() => write!(f, "{}-{}", self.start, end),
            _ => f.write_str(&self.start),
        }
    }
}
