//! # Savings, Cost, ROI and Payback
//!
//! Aggregates the per-module hours into money and derives the headline
//! figures. This is the engine's entry point: [`calculate`] is a pure, total
//! function of [`RoiInput`].
//!
//! ## Formulas
//!
//! ```text
//! admin savings      = Σ hr hours × HR hourly
//! manager savings    = Σ manager hours × manager hourly   (0 if manager time excluded)
//! other savings      = other monthly × 12
//! total savings      = admin + manager + other
//!
//! software (monthly) = employees × price per employee
//! software (annual)  = monthly × 12
//! total cost Y1      = annual software + one-time implementation
//! total cost Y2+     = annual software
//!
//! net benefit Y1     = total savings − total cost Y1
//! net benefit Y2+    = total savings − annual software
//! ROI Y1 %           = net Y1 / cost Y1 × 100       (0 if cost Y1 ≤ 0)
//! ROI Y2+ %          = net Y2 / annual software × 100 (0 if annual software ≤ 0)
//! ```
//!
//! Payback uses two different estimates:
//!
//! ```text
//! monthly net = total savings / 12 − monthly software
//! monthly net ≤ 0         → unbounded
//! implementation > 0      → implementation / monthly net
//! otherwise               → annual software / total savings × 12
//! ```
//!
//! ## Example
//!
//! ```rust
//! use roi_core::calculations::financials::calculate;
//! use roi_core::questionnaire::RoiInput;
//!
//! let metrics = calculate(&RoiInput::default());
//! assert!((metrics.total_savings_annual - 40_860.0).abs() < 1e-6);
//! assert!(metrics.roi_y1_percent > 0.0);
//! assert!(metrics.payback.is_bounded());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::RoiResult;
use crate::modules::HrModule;
use crate::questionnaire::RoiInput;
use crate::units::MONTHS_PER_YEAR;

use super::hours::{all_module_hours, ModuleHours};

/// Payback shown to users when savings never cover the running cost
pub const UNBOUNDED_PAYBACK_LABEL: &str = "> 24 months (adjust assumptions)";

/// Payback value written to exports when unbounded
pub const UNBOUNDED_PAYBACK_CSV: &str = ">24";

/// Payback period.
///
/// ## JSON
///
/// ```json
/// { "kind": "Months", "months": 4.23 }
/// { "kind": "Unbounded" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "months")]
pub enum Payback {
    /// Months until savings offset cost
    Months(f64),
    /// Monthly savings never exceed the monthly software cost
    Unbounded,
}

impl Payback {
    /// Months, if bounded
    pub fn months(&self) -> Option<f64> {
        match self {
            Payback::Months(m) => Some(*m),
            Payback::Unbounded => None,
        }
    }

    /// Whether the investment pays back at all
    pub fn is_bounded(&self) -> bool {
        matches!(self, Payback::Months(_))
    }

    /// Human-readable label ("4.2 months")
    pub fn display_label(&self) -> String {
        match self {
            Payback::Months(m) => format!("{:.1} months", one_decimal(*m)),
            Payback::Unbounded => UNBOUNDED_PAYBACK_LABEL.to_string(),
        }
    }

    /// Export value: one decimal, or ">24"
    pub fn csv_value(&self) -> String {
        match self {
            Payback::Months(m) => format!("{:.1}", one_decimal(*m)),
            Payback::Unbounded => UNBOUNDED_PAYBACK_CSV.to_string(),
        }
    }
}

/// Round half up to one decimal; `{:.1}` alone rounds exact ties to even.
fn one_decimal(months: f64) -> f64 {
    (months * 10.0 + 0.5).floor() / 10.0
}

impl std::fmt::Display for Payback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

/// Everything the engine derives from an [`RoiInput`].
///
/// Monetary values are in the profile currency. Hours are per year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    // === Hours ===
    /// Hours saved per module, one row per module in canonical order
    pub module_hours: Vec<ModuleHours>,

    /// HR staff hours saved per year across all modules
    pub admin_hours_year: f64,

    /// Manager hours saved per year across all modules
    pub manager_hours_year: f64,

    // === Savings (annual) ===
    /// Admin hours × HR hourly
    pub admin_savings_annual: f64,

    /// Manager hours × manager hourly, or 0 when manager time is excluded
    pub manager_savings_annual: f64,

    /// Other monthly savings × 12
    pub other_savings_annual: f64,

    /// Admin + manager + other
    pub total_savings_annual: f64,

    // === Cost ===
    /// Employees × price per employee
    pub monthly_software_cost: f64,

    /// Monthly software cost × 12
    pub annual_software_cost: f64,

    /// Annual software + one-time implementation
    pub total_cost_y1: f64,

    /// Annual software only
    pub total_cost_y2: f64,

    // === Outcomes ===
    /// Total savings − total cost Y1
    pub net_benefit_y1: f64,

    /// Total savings − annual software cost
    pub net_benefit_y2: f64,

    /// Net benefit Y1 / total cost Y1 × 100
    pub roi_y1_percent: f64,

    /// Net benefit Y2+ / annual software cost × 100
    pub roi_y2_percent: f64,

    /// Months to recover the investment
    pub payback: Payback,
}

impl DerivedMetrics {
    /// Hours row for a module
    pub fn hours_for(&self, module: HrModule) -> Option<&ModuleHours> {
        self.module_hours.iter().find(|h| h.module == module)
    }

    /// Admin + manager hours per year
    pub fn total_hours_year(&self) -> f64 {
        self.admin_hours_year + self.manager_hours_year
    }

    /// Whether year 1 already nets a positive benefit
    pub fn pays_off_in_year_one(&self) -> bool {
        self.net_benefit_y1 > 0.0
    }
}

/// ROI as a percentage, 0 when there is no cost to divide by.
pub fn roi_percent(net_benefit: f64, cost: f64) -> f64 {
    if cost <= 0.0 {
        0.0
    } else {
        net_benefit / cost * 100.0
    }
}

/// Payback period in months.
///
/// With an implementation fee, payback is the time to recover that fee from
/// the monthly net benefit. Without one, it is the share of the year's
/// savings consumed by the software cost, in months.
///
/// ```rust
/// use roi_core::calculations::financials::{payback_months, Payback};
///
/// // 150 employees × 8 = 1200/month, 30k savings, 3k implementation
/// let payback = payback_months(30_000.0, 1_200.0, 3_000.0);
/// assert!((payback.months().unwrap() - 3_000.0 / 1_300.0).abs() < 1e-9);
///
/// assert_eq!(payback_months(12_000.0, 1_200.0, 0.0), Payback::Unbounded);
/// ```
pub fn payback_months(total_savings_annual: f64, monthly_software_cost: f64, one_time_implementation: f64) -> Payback {
    let monthly_net = total_savings_annual / MONTHS_PER_YEAR - monthly_software_cost;
    if monthly_net <= 0.0 {
        return Payback::Unbounded;
    }
    if one_time_implementation > 0.0 {
        Payback::Months(one_time_implementation / monthly_net)
    } else {
        // monthly_net > 0 implies total_savings_annual > 0
        let annual_software_cost = monthly_software_cost * MONTHS_PER_YEAR;
        Payback::Months(annual_software_cost / total_savings_annual * MONTHS_PER_YEAR)
    }
}

/// Derive every metric from the questionnaire input.
///
/// Pure and total: never fails and never divides by zero for non-negative,
/// finite inputs. Identical inputs give bit-identical outputs.
pub fn calculate(input: &RoiInput) -> DerivedMetrics {
    let profile = &input.profile;

    // === Hours ===
    let module_hours = all_module_hours(input);
    let admin_hours_year: f64 = module_hours.iter().map(|h| h.hr_hours).sum();
    let manager_hours_year: f64 = module_hours.iter().map(|h| h.manager_hours).sum();

    // === Savings ===
    let admin_savings_annual = admin_hours_year * profile.hr_hourly;
    let manager_savings_annual = if profile.include_manager_time {
        manager_hours_year * profile.manager_hourly
    } else {
        0.0
    };
    let other_savings_annual = input.volumes.other_savings_monthly * MONTHS_PER_YEAR;
    let total_savings_annual = admin_savings_annual + manager_savings_annual + other_savings_annual;

    // === Cost ===
    let monthly_software_cost = profile.employees as f64 * profile.price_per_employee;
    let annual_software_cost = monthly_software_cost * MONTHS_PER_YEAR;
    let total_cost_y1 = annual_software_cost + profile.one_time_implementation;
    let total_cost_y2 = annual_software_cost;

    // === Outcomes ===
    let net_benefit_y1 = total_savings_annual - total_cost_y1;
    let net_benefit_y2 = total_savings_annual - annual_software_cost;
    let roi_y1_percent = roi_percent(net_benefit_y1, total_cost_y1);
    let roi_y2_percent = roi_percent(net_benefit_y2, annual_software_cost);
    let payback = payback_months(
        total_savings_annual,
        monthly_software_cost,
        profile.one_time_implementation,
    );

    DerivedMetrics {
        module_hours,
        admin_hours_year,
        manager_hours_year,
        admin_savings_annual,
        manager_savings_annual,
        other_savings_annual,
        total_savings_annual,
        monthly_software_cost,
        annual_software_cost,
        total_cost_y1,
        total_cost_y2,
        net_benefit_y1,
        net_benefit_y2,
        roi_y1_percent,
        roi_y2_percent,
        payback,
    }
}

/// Validate the input, then [`calculate`].
///
/// # Returns
///
/// * `Ok(DerivedMetrics)` - Input satisfied the engine's contract
/// * `Err(RoiError::InvalidInput)` - A negative or non-finite amount/volume
pub fn calculate_checked(input: &RoiInput) -> RoiResult<DerivedMetrics> {
    input.validate()?;
    Ok(calculate(input))
}
