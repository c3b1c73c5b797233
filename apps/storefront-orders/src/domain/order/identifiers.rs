//! Order identifier and route-segment parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend identifier of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Wrap a raw backend identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Parse the string path segment supplied by the router.
    ///
    /// Surrounding whitespace is ignored. Anything other than a positive
    /// base-10 integer is rejected.
    pub fn parse_route(segment: &str) -> Result<Self, InvalidOrderId> {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            return Err(InvalidOrderId::Empty);
        }

        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidOrderId::NotNumeric {
                segment: segment.to_string(),
            });
        }

        let value: i64 = trimmed.parse().map_err(|_| InvalidOrderId::OutOfRange {
            segment: segment.to_string(),
        })?;

        if value == 0 {
            return Err(InvalidOrderId::NotPositive { value });
        }

        Ok(Self(value))
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = InvalidOrderId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_route(s)
    }
}

impl From<i64> for OrderId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Route segment that does not name an order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidOrderId {
    /// Segment was empty or blank.
    #[error("order id is empty")]
    Empty,

    /// Segment contained something other than ASCII digits.
    #[error("order id is not numeric: {segment:?}")]
    NotNumeric {
        /// The raw segment.
        segment: String,
    },

    /// Segment does not fit a 64-bit identifier.
    #[error("order id out of range: {segment:?}")]
    OutOfRange {
        /// The raw segment.
        segment: String,
    },

    /// Identifier parsed but is not positive.
    #[error("order id must be positive, got {value}")]
    NotPositive {
        /// The parsed value.
        value: i64,
    },
}
