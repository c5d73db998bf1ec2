//! # Per-Module Hours Saved
//!
//! Turns the questionnaire volumes into hours saved per year for each module,
//! then splits them between HR staff and managers.
//!
//! For every included module with a current method:
//!
//! ```text
//! hours/year = Σ (annual units of work × hours saved per unit)
//! hr hours   = hours/year × split.hr
//! mgr hours  = hours/year × split.manager
//! ```
//!
//! Annual units of work:
//!
//! | Work unit              | Annual units                                        |
//! |------------------------|-----------------------------------------------------|
//! | Leave request          | employees × leave per employee per year             |
//! | Timesheet submission   | employees × (4 weekly / 1 monthly) × 12             |
//! | Hire                   | hires per year                                      |
//! | Employee payroll run   | employees × clamp(runs per month, 1, 4) × 12        |
//! | Manager month          | managers × 12 × (1 if cycles > 0, else 0.5)         |
//! | Document               | employees × documents per employee per year         |
//!
//! A module that is excluded, or has no method chosen, yields zero hours.

use serde::{Deserialize, Serialize};

use crate::modules::HrModule;
use crate::questionnaire::RoiInput;
use crate::tables::{TimeSplit, WorkUnit};
use crate::units::{Hours, MONTHS_PER_YEAR};

/// Manager-time factor when no performance cycles are run
const NO_CYCLE_PRESENCE_FACTOR: f64 = 0.5;

/// Hours saved per year for one module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModuleHours {
    /// Module these hours belong to
    pub module: HrModule,

    /// HR staff hours saved per year
    pub hr_hours: f64,

    /// Manager hours saved per year
    pub manager_hours: f64,

    /// hr_hours + manager_hours
    pub total_hours: f64,
}

impl ModuleHours {
    /// No savings for a module
    pub fn zero(module: HrModule) -> Self {
        ModuleHours {
            module,
            hr_hours: 0.0,
            manager_hours: 0.0,
            total_hours: 0.0,
        }
    }
}

/// Annual units of work for a work unit, before any method is applied.
pub fn annual_units(unit: WorkUnit, input: &RoiInput) -> f64 {
    let employees = input.profile.employees as f64;
    let managers = input.profile.managers as f64;
    let v = &input.volumes;

    match unit {
        WorkUnit::LeaveRequest => employees * v.leave_per_employee_per_year,
        WorkUnit::TimesheetSubmission => employees * v.timesheets_per_month() * MONTHS_PER_YEAR,
        WorkUnit::Hire => v.hires_per_year,
        WorkUnit::PayrollEmployeeRun => {
            employees * v.clamped_payroll_runs() as f64 * MONTHS_PER_YEAR
        }
        WorkUnit::ManagerMonth => {
            let presence = if v.performance_cycles_per_year > 0 {
                1.0
            } else {
                NO_CYCLE_PRESENCE_FACTOR
            };
            managers * MONTHS_PER_YEAR * presence
        }
        WorkUnit::Document => employees * v.documents_per_employee_per_year,
    }
}

/// Hours saved per year for one module.
///
/// # Example
///
/// ```rust
/// use roi_core::calculations::hours::module_hours;
/// use roi_core::modules::HrModule;
/// use roi_core::questionnaire::RoiInput;
///
/// // 30 hires × 120 min (spreadsheets) = 60 h, split 80/20
/// let hours = module_hours(&RoiInput::default(), HrModule::TalentManagement);
/// assert!((hours.total_hours - 60.0).abs() < 1e-9);
/// assert!((hours.hr_hours - 48.0).abs() < 1e-9);
///
/// let excluded = RoiInput::default().with_module(HrModule::TalentManagement, false);
/// assert_eq!(module_hours(&excluded, HrModule::TalentManagement).total_hours, 0.0);
/// ```
pub fn module_hours(input: &RoiInput, module: HrModule) -> ModuleHours {
    if !input.modules.is_included(module) {
        return ModuleHours::zero(module);
    }
    let Some(method) = input.methods.get(module) else {
        return ModuleHours::zero(module);
    };

    let total: Hours = WorkUnit::for_module(module)
        .map(|unit| unit.hours_saved(method) * annual_units(unit, input))
        .sum();
    let (hr, manager) = TimeSplit::for_module(module).apply(total);

    ModuleHours {
        module,
        hr_hours: hr.value(),
        manager_hours: manager.value(),
        total_hours: total.value(),
    }
}

/// Hours for every module in canonical order (zero rows included).
pub fn all_module_hours(input: &RoiInput) -> Vec<ModuleHours> {
    HrModule::ALL
        .iter()
        .map(|m| module_hours(input, *m))
        .collect()
}
