//! Driver Transistor Selection
//!
//! The 555 output pin can only source ~200 mA, so loads are switched through
//! a transistor. The choice is a priority-ordered decision list keyed on load
//! current: tiers are checked from the highest threshold down and the first
//! tier whose threshold the load exceeds wins. The last tier has no threshold
//! and catches everything else, zero and negative currents included.
//!
//! ## Bias Resistor
//!
//! Bipolar tiers with a formula rule size the base resistor for the assumed
//! gain with a 0.7 V base-emitter drop:
//!
//! ```text
//! R_base = round((V - 0.7) / (I_load / hFE) / g) * g
//! ```
//!
//! where `I_load` is in amps and `g` is the tier's rounding granularity.
//! Power tiers round coarsely (100 Ω or 10 Ω) so the figure reads like a part
//! you can buy; the small-signal tier keeps whole ohms.

use serde::{Deserialize, Serialize};

use crate::units::Ohms;

/// Base-emitter drop assumed for every bipolar tier
pub const VBE_DROP_V: f64 = 0.7;

/// Transistor technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransistorKind {
    /// NPN bipolar junction transistor (small signal)
    #[serde(rename = "NPN Transistor")]
    Npn,
    /// NPN bipolar power transistor
    #[serde(rename = "NPN Power Transistor")]
    NpnPower,
    /// N-channel enhancement MOSFET
    #[serde(rename = "N-Channel MOSFET")]
    NChannelMosfet,
}

impl TransistorKind {
    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TransistorKind::Npn => "NPN Transistor",
            TransistorKind::NpnPower => "NPN Power Transistor",
            TransistorKind::NChannelMosfet => "N-Channel MOSFET",
        }
    }

    /// Whether the device is driven through a base (current) rather than a gate
    pub fn is_bipolar(&self) -> bool {
        !matches!(self, TransistorKind::NChannelMosfet)
    }
}

/// How the base/gate resistor is chosen for a tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BiasRule {
    /// Fixed part, shown verbatim
    Fixed(&'static str),
    /// Sized from supply voltage and load current for an assumed gain
    Formula {
        /// Assumed DC current gain (hFE)
        gain: f64,
        /// Result is rounded to the nearest multiple of this many ohms
        granularity_ohms: f64,
    },
}

impl BiasRule {
    /// Computed resistance in ohms, `None` for fixed parts.
    pub fn ohms(&self, voltage_v: f64, load_current_ma: f64) -> Option<f64> {
        match *self {
            BiasRule::Fixed(_) => None,
            BiasRule::Formula { gain, granularity_ohms } => {
                let base_current_a = load_current_ma / gain / 1000.0;
                let raw = (voltage_v - VBE_DROP_V) / base_current_a;
                Some(round_half_up(raw / granularity_ohms) * granularity_ohms + 0.0)
            }
        }
    }
}

/// Nearest integer, halves toward positive infinity (`-2.5` -> `-2`).
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Advisory attached to a tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WarningRule {
    /// Supply voltage above the device's comfortable rating
    VoltageAbove { limit_v: f64, message: &'static str },
    /// Load current above a fraction of the device's ceiling
    CurrentAbove { limit_ma: f64, message: &'static str },
}

impl WarningRule {
    /// Message when the rule is violated
    pub fn check(&self, voltage_v: f64, load_current_ma: f64) -> Option<&'static str> {
        match *self {
            WarningRule::VoltageAbove { limit_v, message } => (voltage_v > limit_v).then_some(message),
            WarningRule::CurrentAbove { limit_ma, message } => (load_current_ma > limit_ma).then_some(message),
        }
    }
}

/// One row of the selection table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransistorTier {
    /// Exclusive lower bound on load current (mA); `None` for the catch-all tier
    pub current_threshold_ma: Option<f64>,
    pub name: &'static str,
    pub kind: TransistorKind,
    /// Headline ratings (e.g., "45V, 800mA, hFE≈250")
    pub specs: &'static str,
    /// Maximum power dissipation label
    pub power_rating: &'static str,
    pub bias_rule: BiasRule,
    pub warning_rule: Option<WarningRule>,
}

impl TransistorTier {
    /// Whether this tier claims `load_current_ma`
    pub fn matches(&self, load_current_ma: f64) -> bool {
        match self.current_threshold_ma {
            Some(threshold) => load_current_ma > threshold,
            None => true,
        }
    }

    /// Resolve the tier into a concrete recommendation for the given operating point
    pub fn resolve(&self, voltage_v: f64, load_current_ma: f64) -> SelectedTransistor {
        let bias_resistor_ohms = self.bias_rule.ohms(voltage_v, load_current_ma);
        let bias_resistor = match (self.bias_rule, bias_resistor_ohms) {
            (BiasRule::Fixed(label), _) => label.to_string(),
            (_, Some(ohms)) => format!("{:.0}Ω", ohms),
            (_, None) => String::new(),
        };

        SelectedTransistor {
            name: self.name.to_string(),
            kind: self.kind,
            specs: self.specs.to_string(),
            power_rating: self.power_rating.to_string(),
            bias_resistor,
            bias_resistor_ohms,
            warning: self
                .warning_rule
                .and_then(|rule| rule.check(voltage_v, load_current_ma))
                .map(str::to_string),
        }
    }
}

/// Selection table, highest threshold first. Order is significant.
pub static TRANSISTOR_TIERS: [TransistorTier; 6] = [
    TransistorTier {
        current_threshold_ma: Some(1500.0),
        name: "IRFZ44N",
        kind: TransistorKind::NChannelMosfet,
        specs: "55V, 49A, RDS(on)=17.5mΩ",
        power_rating: "94W",
        bias_rule: BiasRule::Fixed("10kΩ gate resistor"),
        warning_rule: Some(WarningRule::VoltageAbove {
            limit_v: 50.0,
            message: "⚠️ Voltage near transistor limit!",
        }),
    },
    TransistorTier {
        current_threshold_ma: Some(800.0),
        name: "D13007",
        kind: TransistorKind::NpnPower,
        specs: "400V, 8A, hFE≈40",
        power_rating: "80W",
        bias_rule: BiasRule::Formula { gain: 40.0, granularity_ohms: 100.0 },
        warning_rule: None,
    },
    TransistorTier {
        current_threshold_ma: Some(500.0),
        name: "TIP41C",
        kind: TransistorKind::NpnPower,
        specs: "100V, 6A, hFE≈50",
        power_rating: "65W",
        bias_rule: BiasRule::Formula { gain: 50.0, granularity_ohms: 100.0 },
        warning_rule: None,
    },
    TransistorTier {
        current_threshold_ma: Some(150.0),
        name: "2N3055",
        kind: TransistorKind::NpnPower,
        specs: "60V, 15A, hFE≈50",
        power_rating: "115W",
        bias_rule: BiasRule::Formula { gain: 50.0, granularity_ohms: 10.0 },
        warning_rule: None,
    },
    TransistorTier {
        current_threshold_ma: Some(100.0),
        name: "BC337",
        kind: TransistorKind::Npn,
        specs: "45V, 800mA, hFE≈250",
        power_rating: "625mW",
        bias_rule: BiasRule::Formula { gain: 250.0, granularity_ohms: 1.0 },
        warning_rule: None,
    },
    TransistorTier {
        current_threshold_ma: None,
        name: "BC548",
        kind: TransistorKind::Npn,
        specs: "30V, 100mA, hFE≈300",
        power_rating: "500mW",
        bias_rule: BiasRule::Fixed("4.7kΩ"),
        // 80% of the 100 mA collector rating
        warning_rule: Some(WarningRule::CurrentAbove {
            limit_ma: 80.0,
            message: "⚠️ Near current limit!",
        }),
    },
];

/// A transistor recommendation for one operating point.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "BC337",
///   "kind": "NPN Transistor",
///   "specs": "45V, 800mA, hFE≈250",
///   "power_rating": "625mW",
///   "bias_resistor": "23542Ω",
///   "bias_resistor_ohms": 23542.0,
///   "warning": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedTransistor {
    /// Part number
    pub name: String,
    pub kind: TransistorKind,
    pub specs: String,
    pub power_rating: String,
    /// Base or gate resistor as it should appear on a parts list
    pub bias_resistor: String,
    /// Computed base resistor in ohms (formula tiers only)
    pub bias_resistor_ohms: Option<f64>,
    /// Tier advisory, if the operating point is near a device limit
    pub warning: Option<String>,
}

impl SelectedTransistor {
    /// Computed base resistor as a typed value
    pub fn bias_ohms(&self) -> Option<Ohms> {
        self.bias_resistor_ohms.map(Ohms)
    }
}

/// Tier claiming `load_current_ma`. Always succeeds: the last tier is a catch-all.
pub fn tier_for(load_current_ma: f64) -> &'static TransistorTier {
    TRANSISTOR_TIERS
        .iter()
        .find(|tier| tier.matches(load_current_ma))
        .unwrap_or(&TRANSISTOR_TIERS[TRANSISTOR_TIERS.len() - 1])
}

/// Pick a driver transistor for the load and size its bias resistor.
///
/// # Example
///
/// ```rust
/// use timer_core::components::transistors::select_transistor;
///
/// let t = select_transistor(2000.0, 12.0);
/// assert_eq!(t.name, "IRFZ44N");
/// assert_eq!(t.bias_resistor, "10kΩ gate resistor");
/// assert!(t.warning.is_none());
/// ```
pub fn select_transistor(load_current_ma: f64, voltage_v: f64) -> SelectedTransistor {
    let tier = tier_for(load_current_ma);
    tracing::trace!(load_current_ma, tier = tier.name, "transistor tier selected");
    tier.resolve(voltage_v, load_current_ma)
}
