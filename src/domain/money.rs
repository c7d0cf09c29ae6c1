use crate::error::SolidError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;
use std::ops::{Add, Sub};

/// A monetary value (fee, bandwidth cost, total charge).
///
/// Wraps `rust_decimal::Decimal` so fee formulas stay exact:
/// `100 * 0.029 + 0.30` is `3.20`, not `3.2000000000000002`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Distance between two values, regardless of order.
    pub fn abs_diff(self, other: Self) -> Self {
        Self((self.0 - other.0).abs())
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0.normalize())
    }
}

/// A strictly positive amount charged to a customer, capped at
/// [`Amount::MAX`] so fee and total arithmetic cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    pub const MAX: Decimal = dec!(1000000000000);

    pub fn new(value: Decimal) -> Result<Self, SolidError> {
        if value <= Decimal::ZERO {
            return Err(SolidError::Validation(
                "Amount must be positive".to_string(),
            ));
        }
        if value > Self::MAX {
            return Err(SolidError::Validation(format!(
                "Amount must not exceed {}",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Amount> for Money {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0.normalize())
    }
}

/// Linear fee formula: `quantity * rate + flat`.
///
/// Both parts are fixed, non-negative literals, so every fee is monotonic
/// non-decreasing in the quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeSchedule {
    rate: Decimal,
    flat: Decimal,
}

impl FeeSchedule {
    /// Percentage-only schedule.
    pub(crate) const fn percentage(rate: Decimal) -> Self {
        Self {
            rate,
            flat: Decimal::ZERO,
        }
    }

    pub(crate) const fn percentage_plus_flat(rate: Decimal, flat: Decimal) -> Self {
        Self { rate, flat }
    }

    pub fn apply(&self, quantity: Decimal) -> Money {
        Money(quantity * self.rate + self.flat)
    }
}
