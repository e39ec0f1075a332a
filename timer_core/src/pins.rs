//! # 555 Pin Reference
//!
//! Documentation for the eight pins of the DIP-8 package. Pins 2 (trigger)
//! and 3 (output) open the monostable calculator; the rest are reference
//! only.
//!
//! ## Package Layout
//!
//! ```text
//!        +---\_/---+
//!  GND  1|         |8  VCC
//!  TRIG 2|  NE555  |7  DIS
//!  OUT  3|         |6  THR
//!  RST  4|         |5  CV
//!        +---------+
//! ```

use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

/// Which row of the DIP package a pin sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PackageSide {
    /// Pins 1-4, numbered top to bottom
    Left,
    /// Pins 5-8, numbered bottom to top
    Right,
}

/// Reference data for one pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PinInfo {
    pub number: u8,
    /// Short label printed next to the pin (e.g., "TRIG")
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Accent color hint for front ends
    pub color: &'static str,
    /// Whether selecting this pin opens the calculator form
    pub has_calculator: bool,
}

impl PinInfo {
    pub fn package_side(&self) -> PackageSide {
        if self.number <= 4 {
            PackageSide::Left
        } else {
            PackageSide::Right
        }
    }
}

pub static PINS: [PinInfo; 8] = [
    PinInfo {
        number: 1,
        label: "GND",
        title: "Ground",
        description: "Connect to negative supply",
        color: "slate",
        has_calculator: false,
    },
    PinInfo {
        number: 2,
        label: "TRIG",
        title: "Trigger Input",
        description: "Monostable Mode Calculator",
        color: "blue",
        has_calculator: true,
    },
    PinInfo {
        number: 3,
        label: "OUT",
        title: "Output",
        description: "Transistor Driver Design",
        color: "green",
        has_calculator: true,
    },
    PinInfo {
        number: 4,
        label: "RST",
        title: "Reset",
        description: "Active low reset - tie to VCC",
        color: "red",
        has_calculator: false,
    },
    PinInfo {
        number: 5,
        label: "CV",
        title: "Control Voltage",
        description: "2/3 VCC reference - use 0.01µF cap",
        color: "yellow",
        has_calculator: false,
    },
    PinInfo {
        number: 6,
        label: "THR",
        title: "Threshold",
        description: "Timing threshold comparator",
        color: "purple",
        has_calculator: false,
    },
    PinInfo {
        number: 7,
        label: "DIS",
        title: "Discharge",
        description: "Timing capacitor discharge",
        color: "orange",
        has_calculator: false,
    },
    PinInfo {
        number: 8,
        label: "VCC",
        title: "Power Supply",
        description: "4.5V to 16V recommended",
        color: "red",
        has_calculator: false,
    },
];

/// Look up a pin by its package number (1-8).
pub fn pin(number: u8) -> CalcResult<&'static PinInfo> {
    PINS.iter()
        .find(|p| p.number == number)
        .ok_or_else(|| CalcError::unknown_pin(number))
}

/// Pins that open the calculator
pub fn calculator_pins() -> impl Iterator<Item = &'static PinInfo> {
    PINS.iter().filter(|p| p.has_calculator)
}

/// Pins in the order a diagram draws them: left column 1-4 top to bottom,
/// then right column 8-5 top to bottom.
pub fn diagram_order() -> impl Iterator<Item = &'static PinInfo> {
    PINS[..4].iter().chain(PINS[4..].iter().rev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pins_numbered_in_order() {
        for (i, p) in PINS.iter().enumerate() {
            assert_eq!(p.number as usize, i + 1);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(pin(2).unwrap().label, "TRIG");
        assert_eq!(pin(8).unwrap().title, "Power Supply");
    }

    #[test]
    fn test_unknown_pins() {
        assert_eq!(pin(0).unwrap_err(), CalcError::UnknownPin { pin: 0 });
        assert_eq!(pin(9).unwrap_err().error_code(), "UNKNOWN_PIN");
    }

    #[test]
    fn test_only_trigger_and_output_have_calculator() {
        let numbers: Vec<u8> = calculator_pins().map(|p| p.number).collect();
        assert_eq!(numbers, vec![2, 3]);
    }

    #[test]
    fn test_diagram_order_and_sides() {
        let numbers: Vec<u8> = diagram_order().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 8, 7, 6, 5]);
        assert_eq!(pin(4).unwrap().package_side(), PackageSide::Left);
        assert_eq!(pin(5).unwrap().package_side(), PackageSide::Right);
    }
}
