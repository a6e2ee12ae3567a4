//! # Unit Types
//!
//! Type-safe wrappers for the two lengths quilters shop in: inches for cutting
//! and yards for buying off the bolt. They are plain `f64` newtypes so JSON
//! stays clean (just numbers).
//!
//! ## Example
//!
//! ```rust
//! use quilt_core::units::{Inches, Yards};
//!
//! let length = Inches(54.0);
//! let yards: Yards = length.into();
//! assert_eq!(yards.0, 1.5);
//! assert_eq!(Yards(1.6).round_up_to_quarter().0, 1.75);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Inches in one yard of fabric
pub const INCHES_PER_YARD: f64 = 36.0;

/// Fabric is sold in quarter-yard increments
pub const YARD_INCREMENTS_PER_YARD: f64 = 4.0;

/// Unicode labels for eighth-inch fractions, indexed by eighths (0..8)
pub const EIGHTH_LABELS: [&str; 8] = ["", "⅛", "¼", "⅜", "½", "⅝", "¾", "⅞"];

// ============================================================================
// Length Units
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in yards
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Yards(pub f64);

impl From<Inches> for Yards {
    fn from(inches: Inches) -> Self {
        Yards(inches.0 / INCHES_PER_YARD)
    }
}

impl Yards {
    /// Round up to the next quarter yard.
    ///
    /// Never rounds down: a value already on a quarter boundary is returned as-is.
    pub fn round_up_to_quarter(self) -> Self {
        Yards(round_up_to_quarter(self.0))
    }
}

impl fmt::Display for Inches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}\"", self.0)
    }
}

impl fmt::Display for Yards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} yds", self.0)
    }
}

/// Round a raw yardage up to the next quarter yard: `ceil(yards * 4) / 4`.
pub fn round_up_to_quarter(yards: f64) -> f64 {
    (yards * YARD_INCREMENTS_PER_YARD).ceil() / YARD_INCREMENTS_PER_YARD
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Inches);
impl_arithmetic!(Yards);
