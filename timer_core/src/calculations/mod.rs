//! # Timer Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Design` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Design, CalcError>` - Pure calculation function
//!
//! [`compute`] wraps the monostable calculation in the flat, always-present
//! [`CalculationResult`] record that display code renders directly: a
//! `valid` flag, the error list, and the design when there is one.
//!
//! ## Available Calculations
//!
//! - [`monostable`] - One-shot delay: timing R/C, driver transistor, advisories
//! - [`advisories`] - Advisory rules attached to every design

pub mod advisories;
pub mod monostable;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use advisories::{Severity, Suggestion};
pub use monostable::{calculate, TimerDesign, TimerInput};

/// Outcome of one calculator run, ready for display.
///
/// Exactly one of `errors` / `design` is populated: `valid == false` means
/// `errors` lists every rejected input and `design` is `None`.
///
/// ## JSON Example (rejected)
///
/// ```json
/// {
///   "valid": false,
///   "errors": ["Delay must be between 0 and 10000 seconds"],
///   "design": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub design: Option<TimerDesign>,
}

impl CalculationResult {
    /// Soft warnings of a valid result, empty otherwise
    pub fn warnings(&self) -> &[String] {
        self.design.as_ref().map(|d| d.warnings.as_slice()).unwrap_or(&[])
    }

    /// Advisories of a valid result, empty otherwise
    pub fn suggestions(&self) -> &[Suggestion] {
        self.design.as_ref().map(|d| d.suggestions.as_slice()).unwrap_or(&[])
    }
}

impl From<crate::errors::CalcResult<TimerDesign>> for CalculationResult {
    fn from(result: crate::errors::CalcResult<TimerDesign>) -> Self {
        match result {
            Ok(design) => CalculationResult {
                valid: true,
                errors: Vec::new(),
                design: Some(design),
            },
            Err(err) => CalculationResult {
                valid: false,
                errors: err.messages(),
                design: None,
            },
        }
    }
}

/// Run the monostable calculator on three raw numbers.
///
/// # Example
///
/// ```rust
/// use timer_core::compute;
///
/// let ok = compute(5.0, 12.0, 100.0);
/// assert!(ok.valid);
///
/// let rejected = compute(0.0, 12.0, 100.0);
/// assert!(!rejected.valid);
/// assert_eq!(rejected.errors, vec!["Delay must be between 0 and 10000 seconds"]);
/// assert!(rejected.design.is_none());
/// ```
pub fn compute(delay_s: f64, voltage_v: f64, load_current_ma: f64) -> CalculationResult {
    calculate(&TimerInput::new(delay_s, voltage_v, load_current_ma)).into()
}
