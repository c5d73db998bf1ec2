//! # Unit Types
//!
//! Lightweight newtype wrappers for the time quantities the heuristic tables
//! deal in. Some constants are expressed in minutes per unit of work, others
//! in hours, and mixing them up silently inflates savings by 60x, so the
//! tables hand out typed values and the engine converts explicitly.
//!
//! Monetary amounts stay plain `f64` in the profile currency; conversion
//! between currencies is not modelled.
//!
//! ## Example
//!
//! ```rust
//! use roi_core::units::{Hours, Minutes};
//!
//! let saved = Minutes(90.0);
//! let hours: Hours = saved.into();
//! assert_eq!(hours.0, 1.5);
//! ```

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

/// Months in a year, used for every monthly/annual conversion
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Minutes in an hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

// ============================================================================
// Time Units
// ============================================================================

/// Duration in minutes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Minutes(pub f64);

/// Duration in hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(pub f64);

impl From<Minutes> for Hours {
    fn from(min: Minutes) -> Self {
        Hours(min.0 / MINUTES_PER_HOUR)
    }
}

impl From<Hours> for Minutes {
    fn from(h: Hours) -> Self {
        Minutes(h.0 * MINUTES_PER_HOUR)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self(0.0), |acc, x| acc + x)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Minutes);
impl_arithmetic!(Hours);
