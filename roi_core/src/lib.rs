//! # roi_core - HR Software ROI Engine
//!
//! `roi_core` turns a short questionnaire about a company (headcount, rates,
//! which HR modules it wants, how it handles them today, and how much work
//! flows through them) into estimated hours saved, savings, cost, ROI and
//! payback. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `calculate(&RoiInput) -> DerivedMetrics` is pure and total
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Table-Driven**: Time-saved constants are exhaustive enum lookups
//! - **Rich Errors**: Structured error types at the I/O and validation boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use roi_core::{advise, calculate, RoiInput};
//! use roi_core::modules::{CurrentMethod, HrModule};
//!
//! let input = RoiInput::for_headcount(150)
//!     .with_method(HrModule::Payroll, CurrentMethod::Manual);
//!
//! let metrics = calculate(&input);
//! println!("ROI year 1: {:.0}%", metrics.roi_y1_percent);
//! println!("Payback: {}", metrics.payback);
//!
//! let advisory = advise(&input);
//! assert!(advisory.pain_signals.contains(&"Payroll: Manual processes".to_string()));
//! ```
//!
//! ## Modules
//!
//! - [`questionnaire`] - Engine input: profile, module selection, methods, volumes
//! - [`modules`] - HR modules and current-method maturity levels
//! - [`tables`] - Time-saved constants and HR/manager splits
//! - [`calculations`] - Hours, financials and advisory output
//! - [`export`] - CSV export rows
//! - [`currency`] - Supported currencies and amount formatting
//! - [`units`] - Type-safe time units
//! - [`errors`] - Structured error types
//! - [`file_io`] - Scenario files and atomic writes

pub mod calculations;
pub mod currency;
pub mod errors;
pub mod export;
pub mod file_io;
pub mod modules;
pub mod questionnaire;
pub mod tables;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{advise, calculate, calculate_checked, Advisory, DerivedMetrics, Payback};
pub use errors::{RoiError, RoiResult};
pub use file_io::load_scenario;
pub use questionnaire::RoiInput;
