//! # Bill of Materials and Wiring
//!
//! Turns a [`TimerDesign`] into a shopping list and pin-by-pin build steps
//! for the classic push-button relay delay: button on the trigger, timing
//! R/C on discharge/threshold, the output driving a transistor that switches
//! a relay coil with a flyback diode across it.

use serde::{Deserialize, Serialize};

use crate::calculations::TimerDesign;
use crate::pins::PINS;
use crate::units::{Microfarads, Ohms};

/// Series resistor for the indicator LED
pub const LED_RESISTOR_OHMS: f64 = 470.0;
/// Decoupling capacitor on the control-voltage pin
pub const CONTROL_VOLTAGE_CAP_UF: f64 = 0.01;

/// One line of the parts list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomLine {
    pub quantity: u32,
    /// Part category (e.g., "Resistor")
    pub part: String,
    /// Value or part number with qualifiers
    pub value: String,
}

impl BomLine {
    fn new(quantity: u32, part: &str, value: impl Into<String>) -> Self {
        BomLine {
            quantity,
            part: part.to_string(),
            value: value.into(),
        }
    }
}

/// Wiring instruction for one pin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WiringStep {
    pub pin: u8,
    pub label: String,
    pub instruction: String,
}

fn driver_input(design: &TimerDesign) -> &'static str {
    if design.transistor.kind.is_bipolar() {
        "base"
    } else {
        "gate"
    }
}

fn bias_part(label: &str) -> String {
    if label.contains("resistor") {
        label.to_string()
    } else {
        format!("{} resistor", label)
    }
}

fn bias_line(label: &str, input: &str) -> String {
    if label.contains("resistor") {
        label.to_string()
    } else {
        format!("{} ({})", label, input)
    }
}

/// Parts needed to build `design`.
pub fn bill_of_materials(design: &TimerDesign) -> Vec<BomLine> {
    let t = &design.transistor;
    vec![
        BomLine::new(1, "IC 555 Timer", "NE555 (Monostable Mode)"),
        BomLine::new(1, "Resistor", format!("{} (timing)", design.resistor())),
        BomLine::new(1, "Capacitor", format!("{} (timing)", design.capacitor())),
        BomLine::new(1, "Capacitor", format!("{} (control voltage)", Microfarads(CONTROL_VOLTAGE_CAP_UF))),
        BomLine::new(1, "Transistor", format!("{} ({}, {})", t.name, t.kind.display_name(), t.specs)),
        BomLine::new(1, "Resistor", bias_line(&t.bias_resistor, driver_input(design))),
        BomLine::new(
            1,
            "Relay",
            format!("{}V SPDT, coil rated for ~{}mA", design.voltage_v, design.load_current_ma),
        ),
        BomLine::new(1, "Diode", "1N4007 (Flyback protection)"),
        BomLine::new(1, "Indicator LED", format!("2V with {} resistor", Ohms(LED_RESISTOR_OHMS))),
        BomLine::new(1, "Push Button", "Momentary NO"),
        BomLine::new(1, "Power", format!("{}V DC", design.voltage_v)),
    ]
}

/// Pin-by-pin wiring for `design`, pins 1 through 8.
pub fn wiring_guide(design: &TimerDesign) -> Vec<WiringStep> {
    let t = &design.transistor;

    PINS.iter()
        .map(|p| {
            let instruction = match p.number {
                1 => "Connect to battery negative".to_string(),
                2 => "Push button to ground, 10kΩ pull-up to VCC".to_string(),
                3 => format!("To {} {} via {}", t.name, driver_input(design), bias_part(&t.bias_resistor)),
                4 => format!("Tie to VCC ({}V)", design.voltage_v),
                5 => format!("{} capacitor to ground", Microfarads(CONTROL_VOLTAGE_CAP_UF)),
                6 => format!("Connect to pin 7 and the {} capacitor junction", design.capacitor()),
                7 => format!("Connect through the {} resistor to VCC", design.resistor()),
                _ => format!("Connect to {}V DC", design.voltage_v),
            };
            WiringStep {
                pin: p.number,
                label: p.label.to_string(),
                instruction,
            }
        })
        .collect()
}
