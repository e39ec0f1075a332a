//! Standard Component Values
//!
//! Preferred-value tables the calculator snaps to, plus the closest-value
//! search used for snapping.
//!
//! ## Tables
//!
//! - [`CAPACITORS_UF`] - E12 capacitor values in µF (1 µF to 10 000 µF,
//!   thinned above 1000 µF to the sizes actually stocked)
//! - [`RESISTORS_KOHM`] - E24 resistor values in kΩ (10 kΩ to 1 MΩ)
//!
//! ## Tie Breaking
//!
//! When two members are equally close to the target, the one that comes
//! first in table order wins. A later member only replaces the current best
//! if it is strictly closer.

use serde::Serialize;

/// An ordered, non-empty table of preferred component values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandardSeries {
    /// Series name for display (e.g., "E24")
    pub name: &'static str,
    /// Unit the raw values are expressed in (e.g., "kΩ")
    pub unit: &'static str,
    values: &'static [f64],
}

impl StandardSeries {
    /// Build a series. Panics at compile time when used in a `const` with an empty table.
    pub const fn new(name: &'static str, unit: &'static str, values: &'static [f64]) -> Self {
        assert!(!values.is_empty(), "standard series must not be empty");
        StandardSeries { name, unit, values }
    }

    /// Raw table values, in series order
    pub fn values(&self) -> &'static [f64] {
        self.values
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `value` is exactly a member of the series
    pub fn contains(&self, value: f64) -> bool {
        self.values.iter().any(|&v| v == value)
    }

    /// Member closest to `target`, earliest member on ties.
    pub fn closest(&self, target: f64) -> f64 {
        pick_closest(self.values[0], self.values[1..].iter().copied(), target)
    }

    /// Member closest to `target` after multiplying every member by `factor`.
    ///
    /// Returns the scaled value, e.g. ohms for the kΩ resistor table with
    /// `factor = 1000.0`.
    pub fn closest_scaled(&self, target: f64, factor: f64) -> f64 {
        let scaled = self.values[1..].iter().map(|&v| v * factor);
        pick_closest(self.values[0] * factor, scaled, target)
    }
}

/// Closest member of an arbitrary slice, `None` if the slice is empty.
///
/// ```rust
/// use timer_core::components::series::closest_value;
///
/// assert_eq!(closest_value(4.0, &[1.0, 3.0, 5.0]), Some(3.0));
/// assert_eq!(closest_value(4.0, &[]), None);
/// ```
pub fn closest_value(target: f64, values: &[f64]) -> Option<f64> {
    let (&first, rest) = values.split_first()?;
    Some(pick_closest(first, rest.iter().copied(), target))
}

fn pick_closest(first: f64, rest: impl Iterator<Item = f64>, target: f64) -> f64 {
    rest.fold(first, |best, candidate| {
        if (candidate - target).abs() < (best - target).abs() {
            candidate
        } else {
            best
        }
    })
}

/// Standard capacitor values (E12 series), µF
pub const CAPACITORS_UF: StandardSeries = StandardSeries::new(
    "E12",
    "µF",
    &[
        1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2, //
        10.0, 12.0, 15.0, 18.0, 22.0, 27.0, 33.0, 39.0, 47.0, 56.0, 68.0, 82.0, //
        100.0, 120.0, 150.0, 180.0, 220.0, 270.0, 330.0, 390.0, 470.0, 560.0, 680.0, 820.0, //
        1000.0, 2200.0, 3300.0, 4700.0, 10000.0,
    ],
);

/// Standard resistor values (E24 series), kΩ
pub const RESISTORS_KOHM: StandardSeries = StandardSeries::new(
    "E24",
    "kΩ",
    &[
        10.0, 11.0, 12.0, 13.0, 15.0, 16.0, 18.0, 20.0, 22.0, 24.0, 27.0, 30.0, //
        33.0, 36.0, 39.0, 43.0, 47.0, 51.0, 56.0, 62.0, 68.0, 75.0, 82.0, 91.0, //
        100.0, 110.0, 120.0, 130.0, 150.0, 160.0, 180.0, 200.0, 220.0, 240.0, 270.0, 300.0, //
        330.0, 360.0, 390.0, 430.0, 470.0, 510.0, 560.0, 620.0, 680.0, 750.0, 820.0, 910.0, //
        1000.0,
    ],
);
