//! # ROI Calculations
//!
//! The engine, split by stage:
//!
//! - [`hours`] - Volumes × time-saved constants → hours per module, split HR/manager
//! - [`financials`] - Hours → savings, costs, net benefit, ROI and payback
//! - [`advisory`] - Pain signals and recommendation bullets (no effect on figures)
//!
//! Every function here is pure: `RoiInput` in, plain data out. Recompute in
//! full whenever an answer changes; nothing is cached.
//!
//! ```rust
//! use roi_core::calculations::{advise, calculate};
//! use roi_core::questionnaire::RoiInput;
//!
//! let input = RoiInput::default();
//! let metrics = calculate(&input);
//! let advisory = advise(&input);
//!
//! assert!(metrics.net_benefit_y1 > 0.0);
//! assert_eq!(advisory.pain_signals.len(), 6);
//! ```

pub mod advisory;
pub mod financials;
pub mod hours;

pub use advisory::{advise, Advisory};
pub use financials::{calculate, calculate_checked, DerivedMetrics, Payback};
pub use hours::ModuleHours;
