//! # timer_core - 555 Timer Calculation Engine
//!
//! `timer_core` picks real, purchasable parts for a 555 timer delay circuit:
//! a standard timing resistor and capacitor, the delay they actually give,
//! a driver transistor with its bias resistor, and practical advice. All
//! inputs and outputs are JSON-serializable so any front end (terminal,
//! desktop, web) can render them directly.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over static reference tables
//! - **JSON-First**: All result types implement Serialize
//! - **Rich Errors**: Structured error types, every rejected input reported
//!
//! ## Quick Start
//!
//! ```rust
//! use timer_core::compute;
//!
//! let result = compute(5.0, 12.0, 100.0);
//! assert!(result.valid);
//!
//! let design = result.design.as_ref().unwrap();
//! println!("{}", design.lcd_summary());
//! println!("Driver: {} ({})", design.transistor.name, design.transistor.bias_resistor);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Monostable calculation, advisories, the display-ready result record
//! - [`components`] - Standard value series and transistor selection
//! - [`pins`] - Pin reference for the DIP-8 package
//! - [`bom`] - Parts list and wiring guide for a design
//! - [`units`] - Ohm / microfarad newtypes
//! - [`errors`] - Structured error types

pub mod bom;
pub mod calculations;
pub mod components;
pub mod errors;
pub mod pins;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, compute, CalculationResult, Severity, Suggestion, TimerDesign, TimerInput};
pub use components::{select_transistor, SelectedTransistor};
pub use errors::{CalcError, CalcResult};
pub use pins::{PinInfo, PINS};
