//! # Monostable Timing Calculation
//!
//! Picks standard timing components for a 555 in monostable (one-shot) mode
//! and a transistor to switch the load.
//!
//! ## Method
//!
//! 1. Validate inputs (hard errors reject, soft range checks warn)
//! 2. Target time constant from `T = 1.1 * R * C`
//! 3. Seed a resistor: 10 kΩ, or 1 MΩ when the implied capacitor is below
//!    0.01 µF, or 1 kΩ when it is above 10 000 µF
//! 4. Snap the resistor to E24, recompute the capacitor for that exact
//!    resistor, snap the capacitor to E12
//! 5. Recompute the delay from the standard parts and report the error
//! 6. Select the driver transistor and compute load power
//! 7. Attach advisories
//!
//! The resistor seed is a single guess, not a search over candidates; the
//! delay error reported is whatever that one resistor yields.
//!
//! ## Example
//!
//! ```rust
//! use timer_core::calculations::monostable::{calculate, TimerInput};
//!
//! let input = TimerInput::new(5.0, 12.0, 100.0);
//! let design = calculate(&input).unwrap();
//!
//! assert_eq!(design.resistor_ohms, 10_000.0);
//! assert_eq!(design.capacitor_uf, 470.0);
//! assert_eq!(design.transistor.name, "BC548");
//! println!("{}", design.lcd_summary()); // R=10.0kΩ C=470µF T=5.170s
//! ```

use serde::{Deserialize, Serialize};

use super::advisories::{advise, Suggestion};
use crate::components::series::{CAPACITORS_UF, RESISTORS_KOHM};
use crate::components::transistors::{select_transistor, SelectedTransistor};
use crate::errors::{CalcError, CalcResult};
use crate::units::{to_fixed, Microfarads, Ohms, OHMS_PER_KOHM, UF_PER_F};

/// Monostable period coefficient: T = 1.1 * R * C (ln 3)
pub const MONOSTABLE_K: f64 = 1.1;

/// Accepted delay range, exclusive of zero (s)
pub const MAX_DELAY_S: f64 = 10_000.0;
/// Smallest accepted load current (mA)
pub const MIN_LOAD_CURRENT_MA: f64 = 1.0;
/// Load current above which a dedicated MOSFET driver is advised (mA)
pub const MOSFET_DRIVER_ABOVE_MA: f64 = 5_000.0;
/// Recommended supply range for a bipolar 555 (V)
pub const SUPPLY_RANGE_V: (f64, f64) = (4.5, 16.0);

/// First resistor guess (Ω)
pub const SEED_RESISTOR_OHMS: f64 = 10_000.0;
/// Resistor used when the seed implies a sub-0.01 µF capacitor (Ω)
pub const SHORT_DELAY_RESISTOR_OHMS: f64 = 1_000_000.0;
/// Resistor used when the seed implies a capacitor above 10 000 µF (Ω)
pub const LONG_DELAY_RESISTOR_OHMS: f64 = 1_000.0;
/// Below this the seed capacitor is impractically small (µF)
pub const MIN_SEED_CAPACITOR_UF: f64 = 0.01;
/// Above this the seed capacitor is impractically large (µF)
pub const MAX_SEED_CAPACITOR_UF: f64 = 10_000.0;

pub const DELAY_RANGE_MESSAGE: &str = "Delay must be between 0 and 10000 seconds";
pub const LOAD_CURRENT_MESSAGE: &str = "Load current must be positive";
pub const VOLTAGE_FINITE_MESSAGE: &str = "Voltage must be a finite number";
pub const SUPPLY_RANGE_WARNING: &str = "555 optimal range: 4.5V-16V";
pub const MOSFET_DRIVER_WARNING: &str = "Consider using a MOSFET driver circuit";

/// Input parameters for a monostable delay.
///
/// ## JSON Example
///
/// ```json
/// {
///   "delay_s": 5.0,
///   "voltage_v": 12.0,
///   "load_current_ma": 100.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimerInput {
    /// Desired output pulse length in seconds
    pub delay_s: f64,

    /// Supply voltage in volts
    pub voltage_v: f64,

    /// Current drawn by the switched load (relay coil, lamp...) in mA
    pub load_current_ma: f64,
}

impl Default for TimerInput {
    fn default() -> Self {
        TimerInput {
            delay_s: 5.0,
            voltage_v: 12.0,
            load_current_ma: 100.0,
        }
    }
}

impl TimerInput {
    pub fn new(delay_s: f64, voltage_v: f64, load_current_ma: f64) -> Self {
        TimerInput {
            delay_s,
            voltage_v,
            load_current_ma,
        }
    }

    /// Validate input parameters.
    ///
    /// Collects every hard error before failing. On success returns the soft
    /// warnings (supply outside the recommended range, very heavy load).
    pub fn validate(&self) -> CalcResult<Vec<String>> {
        let mut issues = Vec::new();

        if !(self.delay_s > 0.0 && self.delay_s <= MAX_DELAY_S) {
            issues.push(CalcError::invalid_input(
                "delay_s",
                self.delay_s.to_string(),
                DELAY_RANGE_MESSAGE,
            ));
        }
        if !self.voltage_v.is_finite() {
            issues.push(CalcError::invalid_input(
                "voltage_v",
                self.voltage_v.to_string(),
                VOLTAGE_FINITE_MESSAGE,
            ));
        }
        if !(self.load_current_ma >= MIN_LOAD_CURRENT_MA && self.load_current_ma.is_finite()) {
            issues.push(CalcError::invalid_input(
                "load_current_ma",
                self.load_current_ma.to_string(),
                LOAD_CURRENT_MESSAGE,
            ));
        }

        if !issues.is_empty() {
            return Err(CalcError::ValidationFailed { issues });
        }

        let mut warnings = Vec::new();
        let (min_v, max_v) = SUPPLY_RANGE_V;
        if self.voltage_v < min_v || self.voltage_v > max_v {
            warnings.push(SUPPLY_RANGE_WARNING.to_string());
        }
        if self.load_current_ma > MOSFET_DRIVER_ABOVE_MA {
            warnings.push(MOSFET_DRIVER_WARNING.to_string());
        }
        Ok(warnings)
    }

    /// Target R·C product in ohm-farads (seconds)
    pub fn target_rc(&self) -> f64 {
        self.delay_s / MONOSTABLE_K
    }
}

/// A calculated monostable design.
///
/// Values carry full precision. Use [`TimerDesign::actual_delay_display`] and
/// friends for the rounded figures shown to users.
///
/// ## JSON Example
///
/// ```json
/// {
///   "requested_delay_s": 5.0,
///   "voltage_v": 12.0,
///   "load_current_ma": 100.0,
///   "resistor_ohms": 10000.0,
///   "capacitor_uf": 470.0,
///   "actual_delay_s": 5.17,
///   "delay_error_percent": 3.4,
///   "transistor": { "name": "BC548", "kind": "NPN Transistor", "...": "..." },
///   "power_dissipation_w": 1.2,
///   "warnings": [],
///   "suggestions": [ { "severity": "warning", "text": "High power dissipation (1.2W). Ensure adequate heatsinking." } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerDesign {
    /// Delay the user asked for (s)
    pub requested_delay_s: f64,

    /// Supply voltage (V)
    pub voltage_v: f64,

    /// Load current (mA)
    pub load_current_ma: f64,

    /// Timing resistor, an E24 value (Ω)
    pub resistor_ohms: f64,

    /// Timing capacitor, an E12 value (µF)
    pub capacitor_uf: f64,

    /// Delay realised by the standard parts (s)
    pub actual_delay_s: f64,

    /// (actual - requested) / requested * 100, signed
    pub delay_error_percent: f64,

    /// Driver transistor recommendation
    pub transistor: SelectedTransistor,

    /// Power delivered to the load, V * I (W)
    pub power_dissipation_w: f64,

    /// Soft input-range warnings
    pub warnings: Vec<String>,

    /// Advisories, success note last
    pub suggestions: Vec<Suggestion>,
}

impl TimerDesign {
    /// Timing resistor as a typed value
    pub fn resistor(&self) -> Ohms {
        Ohms(self.resistor_ohms)
    }

    /// Timing capacitor as a typed value
    pub fn capacitor(&self) -> Microfarads {
        Microfarads(self.capacitor_uf)
    }

    /// Actual delay, 3 decimals
    pub fn actual_delay_display(&self) -> String {
        to_fixed(self.actual_delay_s, 3)
    }

    /// Delay error, 2 decimals
    pub fn delay_error_display(&self) -> String {
        to_fixed(self.delay_error_percent, 2)
    }

    /// Power dissipation, 2 decimals
    pub fn power_display(&self) -> String {
        to_fixed(self.power_dissipation_w, 2)
    }

    /// One-line summary for the LCD strip: `R=10.0kΩ C=470µF T=5.170s`
    pub fn lcd_summary(&self) -> String {
        format!(
            "R={}kΩ C={}µF T={}s",
            to_fixed(self.resistor().kilohms(), 1),
            self.capacitor_uf,
            self.actual_delay_display()
        )
    }
}

/// Seed resistor (Ω) and the capacitor (µF) it implies for `target_rc`.
pub fn seed_components(target_rc: f64) -> (f64, f64) {
    let implied_uf = |r: f64| target_rc / r * UF_PER_F;

    let c_seed = implied_uf(SEED_RESISTOR_OHMS);
    let r_seed = if c_seed < MIN_SEED_CAPACITOR_UF {
        SHORT_DELAY_RESISTOR_OHMS
    } else if c_seed > MAX_SEED_CAPACITOR_UF {
        LONG_DELAY_RESISTOR_OHMS
    } else {
        SEED_RESISTOR_OHMS
    };

    (r_seed, implied_uf(r_seed))
}

/// Calculate a monostable design.
///
/// # Arguments
///
/// * `input` - Delay, supply voltage, load current
///
/// # Returns
///
/// * `Ok(TimerDesign)` - Standard parts, realised delay, transistor, advisories
/// * `Err(CalcError::ValidationFailed)` - Every rejected input
pub fn calculate(input: &TimerInput) -> CalcResult<TimerDesign> {
    let warnings = input.validate()?;

    let target_rc = input.target_rc();
    let (r_seed, c_seed) = seed_components(target_rc);
    tracing::debug!(target_rc, r_seed, c_seed, "seeded timing components");

    let resistor_ohms = RESISTORS_KOHM.closest_scaled(r_seed, OHMS_PER_KOHM);
    let c_actual = target_rc / resistor_ohms * UF_PER_F;
    let capacitor_uf = CAPACITORS_UF.closest(c_actual);
    tracing::debug!(resistor_ohms, c_actual, capacitor_uf, "snapped to standard values");

    let actual_delay_s = MONOSTABLE_K * resistor_ohms * Microfarads(capacitor_uf).farads();
    let delay_error_percent = (actual_delay_s - input.delay_s) / input.delay_s * 100.0;

    let transistor = select_transistor(input.load_current_ma, input.voltage_v);
    let power_dissipation_w = input.voltage_v * input.load_current_ma / 1000.0;

    let mut design = TimerDesign {
        requested_delay_s: input.delay_s,
        voltage_v: input.voltage_v,
        load_current_ma: input.load_current_ma,
        resistor_ohms,
        capacitor_uf,
        actual_delay_s,
        delay_error_percent,
        transistor,
        power_dissipation_w,
        warnings,
        suggestions: Vec::new(),
    };
    design.suggestions = advise(&design);

    tracing::debug!(
        actual_delay_s,
        delay_error_percent,
        transistor = %design.transistor.name,
        "monostable design complete"
    );
    Ok(design)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::advisories::Severity;

    #[test]
    fn test_default_input_matches_form_defaults() {
        let input = TimerInput::default();
        assert_eq!(input, TimerInput::new(5.0, 12.0, 100.0));
    }

    #[test]
    fn test_five_second_relay_timer() {
        // targetRC = 4.545; C at 10k = 454.5 µF -> 470 µF; T = 1.1 * 10k * 470µ = 5.17 s
        let d = calculate(&TimerInput::new(5.0, 12.0, 100.0)).unwrap();
        assert_eq!(d.resistor_ohms, 10_000.0);
        assert_eq!(d.capacitor_uf, 470.0);
        assert!((d.actual_delay_s - 5.17).abs() < 1e-9);
        assert!((d.delay_error_percent - 3.4).abs() < 1e-6);
        assert_eq!(d.actual_delay_display(), "5.170");
        assert_eq!(d.delay_error_display(), "3.40");

        // 100 mA is not above the 100 mA threshold
        assert_eq!(d.transistor.name, "BC548");
        assert_eq!(d.transistor.bias_resistor, "4.7kΩ");
        assert_eq!(d.transistor.warning.as_deref(), Some("⚠️ Near current limit!"));

        assert!((d.power_dissipation_w - 1.2).abs() < 1e-12);
        assert!(d.warnings.is_empty());
        assert_eq!(d.suggestions.len(), 2);
        assert_eq!(d.suggestions[0].severity, Severity::Warning);
        assert!(d.suggestions[0].text.contains("1.2W"));
        assert_eq!(d.lcd_summary(), "R=10.0kΩ C=470µF T=5.170s");
    }

    #[test]
    fn test_power_display_rounds_tie_up() {
        // 5 V x 25 mA = 0.125 W exactly
        let d = calculate(&TimerInput::new(5.0, 5.0, 25.0)).unwrap();
        assert_eq!(d.power_display(), "0.13");
    }

    #[test]
    fn test_high_current_selects_mosfet_and_heatsink() {
        let d = calculate(&TimerInput::new(5.0, 12.0, 2000.0)).unwrap();
        assert_eq!(d.transistor.name, "IRFZ44N");
        assert!(d.transistor.warning.is_none());
        assert!((d.power_dissipation_w - 24.0).abs() < 1e-12);
        assert!(d
            .suggestions
            .iter()
            .any(|s| s.text == "High power dissipation (24.0W). Ensure adequate heatsinking."));
    }

    #[test]
    fn test_short_delay_reseeds_to_one_megohm() {
        // C at 10k = 0.0001/1.1/1e4*1e6 = 0.0091 µF < 0.01 -> 1 MΩ
        let (r, c) = seed_components(0.0001 / MONOSTABLE_K);
        assert_eq!(r, 1_000_000.0);
        assert!(c < MIN_SEED_CAPACITOR_UF);

        let d = calculate(&TimerInput::new(0.0001, 12.0, 10.0)).unwrap();
        assert_eq!(d.resistor_ohms, 1_000_000.0);
        assert_eq!(d.capacitor_uf, 1.0);
        assert!(d.delay_error_percent > 10.0);
        assert!(d.suggestions[0].text.starts_with("Delay error:"));
    }

    #[test]
    fn test_long_delay_reseeds_to_one_kilohm() {
        // C at 10k = 1000/1.1/1e4*1e6 = 90909 µF > 10000 -> 1 kΩ, which snaps to the 10 kΩ floor
        let (r, _) = seed_components(1000.0 / MONOSTABLE_K);
        assert_eq!(r, 1_000.0);

        let d = calculate(&TimerInput::new(1000.0, 12.0, 10.0)).unwrap();
        assert_eq!(d.resistor_ohms, 10_000.0);
        assert_eq!(d.capacitor_uf, 10_000.0);
        assert!((d.actual_delay_s - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_seed_inside_bucket_keeps_ten_k() {
        let (r, c) = seed_components(1.0);
        assert_eq!(r, SEED_RESISTOR_OHMS);
        assert!((c - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_components_are_standard_members() {
        for delay in [0.0005, 0.01, 0.3, 1.0, 2.5, 7.0, 33.0, 120.0, 999.0, 10_000.0] {
            let d = calculate(&TimerInput::new(delay, 12.0, 50.0)).unwrap();
            assert!(RESISTORS_KOHM.contains(d.resistor_ohms / 1000.0), "R {} for {delay}", d.resistor_ohms);
            assert!(CAPACITORS_UF.contains(d.capacitor_uf), "C {} for {delay}", d.capacitor_uf);

            let recomputed = 1.1 * d.resistor_ohms * d.capacitor_uf * 1e-6;
            assert!((recomputed - d.actual_delay_s).abs() < 5e-4);

            let expected_error = (d.actual_delay_s / delay - 1.0) * 100.0;
            assert!((expected_error - d.delay_error_percent).abs() < 1e-6);
            assert_eq!(
                d.delay_error_percent.signum(),
                (d.actual_delay_s - delay).signum()
            );
        }
    }

    #[test]
    fn test_zero_delay_rejected() {
        let err = calculate(&TimerInput::new(0.0, 12.0, 100.0)).unwrap_err();
        assert_eq!(err.messages(), vec![DELAY_RANGE_MESSAGE.to_string()]);
    }

    #[test]
    fn test_delay_upper_bound_inclusive() {
        assert!(calculate(&TimerInput::new(10_000.0, 12.0, 100.0)).is_ok());
        assert!(calculate(&TimerInput::new(10_000.1, 12.0, 100.0)).is_err());
    }

    #[test]
    fn test_all_errors_collected() {
        let err = calculate(&TimerInput::new(-1.0, 12.0, 0.5)).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
        assert_eq!(
            err.messages(),
            vec![DELAY_RANGE_MESSAGE.to_string(), LOAD_CURRENT_MESSAGE.to_string()]
        );
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let err = calculate(&TimerInput::new(f64::NAN, f64::INFINITY, f64::NAN)).unwrap_err();
        assert_eq!(
            err.messages(),
            vec![
                DELAY_RANGE_MESSAGE.to_string(),
                VOLTAGE_FINITE_MESSAGE.to_string(),
                LOAD_CURRENT_MESSAGE.to_string(),
            ]
        );
    }

    #[test]
    fn test_soft_warnings_do_not_block() {
        let d = calculate(&TimerInput::new(5.0, 3.0, 6000.0)).unwrap();
        assert_eq!(
            d.warnings,
            vec![SUPPLY_RANGE_WARNING.to_string(), MOSFET_DRIVER_WARNING.to_string()]
        );
        assert!(calculate(&TimerInput::new(5.0, 4.5, 5000.0)).unwrap().warnings.is_empty());
        assert!(calculate(&TimerInput::new(5.0, 16.0, 1.0)).unwrap().warnings.is_empty());
    }

    #[test]
    fn test_calculation_is_repeatable() {
        let input = TimerInput::new(3.3, 9.0, 250.0);
        assert_eq!(calculate(&input).unwrap(), calculate(&input).unwrap());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let d = calculate(&TimerInput::default()).unwrap();
        let json = serde_json::to_string_pretty(&d).unwrap();
        assert!(json.contains("resistor_ohms"));
        assert!(json.contains("delay_error_percent"));
        let roundtrip: TimerDesign = serde_json::from_str(&json).unwrap();
        assert_eq!(d.resistor_ohms, roundtrip.resistor_ohms);
        assert!((d.actual_delay_s - roundtrip.actual_delay_s).abs() < 1e-9);
        assert_eq!(d.transistor, roundtrip.transistor);
        assert_eq!(d.suggestions, roundtrip.suggestions);
    }
}
