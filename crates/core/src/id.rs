//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::Serialize;

use crate::error::DomainError;

/// Identifier of a flavor record.
///
/// Assigned by the store from a monotonic counter starting at 1; never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FlavorId(u64);

impl FlavorId {
    pub const FIRST: FlavorId = FlavorId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The identifier allocated after this one, or `None` once the id space is exhausted.
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl core::fmt::Display for FlavorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for FlavorId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("FlavorId: {e}")))?;
        Ok(Self(value))
    }
}
