//! # Component Data
//!
//! Reference data for the parts a monostable 555 circuit is built from.
//!
//! - [`series`] - Standard resistor and capacitor values, closest-value search
//! - [`transistors`] - Driver transistor tiers and selection policy

pub mod series;
pub mod transistors;

pub use series::{closest_value, StandardSeries, CAPACITORS_UF, RESISTORS_KOHM};
pub use transistors::{select_transistor, SelectedTransistor, TransistorKind, TransistorTier, TRANSISTOR_TIERS};
