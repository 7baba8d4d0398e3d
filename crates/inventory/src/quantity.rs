use serde::{Deserialize, Serialize};

use livraria_core::input::leading_int;

use crate::draft::MovementError;

/// Smallest quantity a single movement may carry.
pub const MIN_QUANTITY: i64 = 1;

/// Largest quantity a single movement may carry (five digits).
pub const MAX_QUANTITY: i64 = 99_999;

/// Movement quantity, always within `[MIN_QUANTITY, MAX_QUANTITY]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(i64);

impl Quantity {
    /// Parse operator input.
    ///
    /// Checks run in this order: blank input, negative value, more than five
    /// digits, then unreadable or zero.
    pub fn parse(input: &str) -> Result<Self, MovementError> {
        if input.is_empty() {
            return Err(MovementError::MissingFields);
        }
        match leading_int(input) {
            Some(n) if n < 0 => Err(MovementError::NegativeQuantity),
            Some(n) if n > MAX_QUANTITY => Err(MovementError::QuantityTooLarge),
            Some(0) | None => Err(MovementError::InvalidQuantity),
            Some(n) => Ok(Self(n)),
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = MovementError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            n if n < 0 => Err(MovementError::NegativeQuantity),
            0 => Err(MovementError::InvalidQuantity),
            n if n > MAX_QUANTITY => Err(MovementError::QuantityTooLarge),
            n => Ok(Self(n)),
        }
    }
}

impl From<Quantity> for i64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
