//! # Design Advisories
//!
//! Practical notes attached to every successful calculation. Rules are
//! evaluated independently and appended in a fixed order, so the same design
//! always produces the same list. The last entry is always a success note
//! naming the chosen transistor.

use serde::{Deserialize, Serialize};

use super::monostable::TimerDesign;
use crate::units::to_fixed;

/// Delay error (percent, either sign) above which a trimmer is suggested
pub const TRIM_ERROR_PERCENT: f64 = 10.0;
/// Capacitors above this (µF) are electrolytic in practice
pub const ELECTROLYTIC_ABOVE_UF: f64 = 1000.0;
/// Resistors above this (Ω) drift unless metal film
pub const METAL_FILM_ABOVE_OHMS: f64 = 1_000_000.0;
/// Delays above this (s) are better served by astable + counter
pub const LONG_DELAY_S: f64 = 60.0;
/// Supplies below this (V) may not pull in a common relay coil
pub const LOW_RELAY_VOLTAGE_V: f64 = 6.0;
/// Load power (W) above which the switch needs a heatsink
pub const HEATSINK_ABOVE_W: f64 = 1.0;

/// How prominently a suggestion should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
    Success,
}

impl Severity {
    /// Short tag for terminal output
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Warning => "[WARN]",
            Severity::Info => "[INFO]",
            Severity::Success => "[OK]",
        }
    }
}

/// One advisory line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub severity: Severity,
    pub text: String,
}

impl Suggestion {
    pub fn warning(text: impl Into<String>) -> Self {
        Suggestion {
            severity: Severity::Warning,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Suggestion {
            severity: Severity::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Suggestion {
            severity: Severity::Success,
            text: text.into(),
        }
    }
}

/// Build the advisory list for a finished design.
///
/// Reads only the chosen components, the echoed inputs and the derived
/// figures; `design.suggestions` itself is ignored.
pub fn advise(design: &TimerDesign) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if design.delay_error_percent.abs() > TRIM_ERROR_PERCENT {
        suggestions.push(Suggestion::warning(format!(
            "Delay error: {}%. Consider using a trimmer potentiometer for fine adjustment.",
            to_fixed(design.delay_error_percent, 1)
        )));
    }

    if design.capacitor_uf > ELECTROLYTIC_ABOVE_UF {
        suggestions.push(Suggestion::info(
            "Large capacitor needed. Use electrolytic type with proper polarity.",
        ));
    }

    if design.resistor_ohms > METAL_FILM_ABOVE_OHMS {
        suggestions.push(Suggestion::warning(
            "Very high resistance. Use metal film resistor for stability.",
        ));
    }

    if design.requested_delay_s > LONG_DELAY_S {
        suggestions.push(Suggestion::info(
            "Long delay. Consider astable mode with counter IC for better accuracy.",
        ));
    }

    if design.voltage_v < LOW_RELAY_VOLTAGE_V {
        suggestions.push(Suggestion::warning(
            "Low voltage. Ensure relay coil is rated for this voltage.",
        ));
    }

    if design.power_dissipation_w > HEATSINK_ABOVE_W {
        suggestions.push(Suggestion::warning(format!(
            "High power dissipation ({}W). Ensure adequate heatsinking.",
            to_fixed(design.power_dissipation_w, 1)
        )));
    }

    suggestions.push(Suggestion::success(format!(
        "Selected {} can safely handle {}mA at {}V.",
        design.transistor.name, design.load_current_ma, design.voltage_v
    )));

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::monostable::{calculate, TimerInput};

    fn design(delay_s: f64, voltage_v: f64, load_current_ma: f64) -> TimerDesign {
        calculate(&TimerInput::new(delay_s, voltage_v, load_current_ma)).unwrap()
    }

    #[test]
    fn test_quiet_design_has_only_success() {
        // 5 s, 9 V, 50 mA: 3.4% error, 0.45 W
        let d = design(5.0, 9.0, 50.0);
        assert_eq!(d.suggestions.len(), 1);
        assert_eq!(d.suggestions[0].severity, Severity::Success);
        assert_eq!(d.suggestions[0].text, "Selected BC548 can safely handle 50mA at 9V.");
    }

    #[test]
    fn test_success_is_always_last() {
        for (delay, v, ma) in [(5.0, 12.0, 100.0), (500.0, 5.0, 3000.0), (0.001, 9.0, 10.0)] {
            let d = design(delay, v, ma);
            let last = d.suggestions.last().unwrap();
            assert_eq!(last.severity, Severity::Success);
            assert_eq!(d.suggestions.iter().filter(|s| s.severity == Severity::Success).count(), 1);
        }
    }

    #[test]
    fn test_fixed_order_when_many_fire() {
        // 500 s at 5 V, 3 A:
        // targetRC = 454.5, seed C at 10k = 45454 µF > 10000 -> R seed 1k -> snaps to 10k,
        // C = 45454 -> 10000 µF, T = 110 s (-78%), P = 15 W
        let d = design(500.0, 5.0, 3000.0);
        let texts: Vec<&str> = d.suggestions.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts.len(), 6);
        assert!(texts[0].starts_with("Delay error: -78.0%"));
        assert!(texts[1].starts_with("Large capacitor needed"));
        assert!(texts[2].starts_with("Long delay"));
        assert!(texts[3].starts_with("Low voltage"));
        assert_eq!(texts[4], "High power dissipation (15.0W). Ensure adequate heatsinking.");
        assert_eq!(texts[5], "Selected IRFZ44N can safely handle 3000mA at 5V.");
    }

    #[test]
    fn test_heatsink_wattage_rounds_tie_up() {
        // 9 V x 250 mA = 2.25 W exactly
        let d = design(5.0, 9.0, 250.0);
        assert!(d
            .suggestions
            .iter()
            .any(|s| s.text == "High power dissipation (2.3W). Ensure adequate heatsinking."));
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Suggestion::info("x")).unwrap();
        assert_eq!(json, r#"{"severity":"info","text":"x"}"#);
    }

    #[test]
    fn test_severity_tags() {
        assert_eq!(Severity::Warning.tag(), "[WARN]");
        assert_eq!(Severity::Success.tag(), "[OK]");
    }
}
