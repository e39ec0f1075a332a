//! # Unit Types
//!
//! Newtype wrappers for the two component quantities the calculator picks.
//! They serialize as plain numbers and display with engineering prefixes the
//! way values are printed on a parts list.
//!
//! ## Units
//!
//! - Resistance: ohms (Ω), displayed as Ω / kΩ / MΩ
//! - Capacitance: microfarads (µF), the unit capacitor series are quoted in
//! - Time: seconds, kept as bare `f64` fields suffixed `_s`
//!
//! ## Example
//!
//! ```rust
//! use timer_core::units::{Microfarads, Ohms};
//!
//! assert_eq!(Ohms(4_700.0).to_string(), "4.7kΩ");
//! assert_eq!(Ohms(1_000_000.0).to_string(), "1MΩ");
//! assert_eq!(Microfarads(470.0).to_string(), "470µF");
//!
//! let c = Microfarads(470.0);
//! assert!((c.farads() - 470e-6).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Microfarads per farad
pub const UF_PER_F: f64 = 1e6;

/// Ohms per kilohm
pub const OHMS_PER_KOHM: f64 = 1_000.0;

/// Round to 3 decimals so binary noise (0.30000000000000004) never reaches a label.
fn trim(value: f64) -> f64 {
    (value * 1_000.0).round() / 1_000.0
}

/// Fixed-point text with `digits` decimals. Exact decimal ties round away
/// from zero (`2.25` -> `"2.3"`); everything else rounds to nearest.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    // Every finite f64 has at most 1074 fractional decimal digits
    let exact = format!("{:.1074}", magnitude);
    let is_tie = exact.split_once('.').is_some_and(|(_, frac)| {
        let mut rest = frac.bytes().skip(digits);
        rest.next() == Some(b'5') && rest.all(|b| b == b'0')
    });
    // One ulp above a tie formats to the upper neighbour
    let rounded = if is_tie {
        f64::from_bits(magnitude.to_bits() + 1)
    } else {
        magnitude
    };

    let text = format!("{:.*}", digits, rounded);
    if value < 0.0 {
        format!("-{}", text)
    } else {
        text
    }
}

// ============================================================================
// Resistance
// ============================================================================

/// Resistance in ohms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ohms(pub f64);

impl Ohms {
    /// Value in kilohms
    pub fn kilohms(self) -> f64 {
        self.0 / OHMS_PER_KOHM
    }
}

impl fmt::Display for Ohms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ohms = self.0;
        if ohms.abs() >= 1e6 {
            write!(f, "{}MΩ", trim(ohms / 1e6))
        } else if ohms.abs() >= 1e3 {
            write!(f, "{}kΩ", trim(ohms / 1e3))
        } else {
            write!(f, "{}Ω", trim(ohms))
        }
    }
}

// ============================================================================
// Capacitance
// ============================================================================

/// Capacitance in microfarads
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Microfarads(pub f64);

impl Microfarads {
    /// Convert from farads
    pub fn from_farads(farads: f64) -> Self {
        Microfarads(farads * UF_PER_F)
    }

    /// Value in farads
    pub fn farads(self) -> f64 {
        self.0 / UF_PER_F
    }
}

impl fmt::Display for Microfarads {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}µF", trim(self.0))
    }
}
