//! # Heuristic Time-Saved Tables
//!
//! Static, read-only heuristics that drive the ROI engine.
//!
//! ## Time saved per unit of work
//!
//! | Work unit                        | Manual | Spreadsheets | Multi | Basic |
//! |----------------------------------|--------|--------------|-------|-------|
//! | Leave request (min)              | 10     | 7            | 5     | 3     |
//! | Timesheet submission (min)       | 3      | 2            | 1.5   | 1     |
//! | Hire (min)                       | 180    | 120          | 90    | 60    |
//! | Employee per payroll run (min)   | 6      | 4            | 3     | 2     |
//! | Manager per month (h)            | 1.2    | 1.0          | 0.8   | 0.6   |
//! | Document (min)                   | 12     | 8            | 6     | 4     |
//!
//! Every row decreases from manual to basic HRIS: a more mature process
//! leaves less to automate.
//!
//! ## HR / manager split
//!
//! | Module       | HR  | Manager |
//! |--------------|-----|---------|
//! | Time         | 0.7 | 0.3     |
//! | Talent       | 0.8 | 0.2     |
//! | Payroll      | 0.9 | 0.1     |
//! | Performance  | 0.2 | 0.8     |
//! | Documents    | 0.7 | 0.3     |

use serde::{Deserialize, Serialize};

use crate::modules::{CurrentMethod, HrModule};
use crate::units::{Hours, Minutes};

/// The unit of work a time-saved constant is expressed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkUnit {
    /// One leave request
    LeaveRequest,
    /// One timesheet submission
    TimesheetSubmission,
    /// One hire
    Hire,
    /// One employee processed in one payroll run
    PayrollEmployeeRun,
    /// One manager for one month of performance/OKR admin
    ManagerMonth,
    /// One document
    Document,
}

/// A table constant in the unit it is published in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimeSaved {
    Minutes(Minutes),
    Hours(Hours),
}

impl TimeSaved {
    /// Normalize to hours
    pub fn as_hours(self) -> Hours {
        match self {
            TimeSaved::Minutes(min) => min.into(),
            TimeSaved::Hours(h) => h,
        }
    }

    /// Raw number as published in the table
    pub fn raw(self) -> f64 {
        match self {
            TimeSaved::Minutes(min) => min.0,
            TimeSaved::Hours(h) => h.0,
        }
    }

    /// Unit suffix for display
    pub fn unit_suffix(self) -> &'static str {
        match self {
            TimeSaved::Minutes(_) => "min",
            TimeSaved::Hours(_) => "h",
        }
    }
}

impl WorkUnit {
    /// All work units in table order
    pub const ALL: [WorkUnit; 6] = [
        WorkUnit::LeaveRequest,
        WorkUnit::TimesheetSubmission,
        WorkUnit::Hire,
        WorkUnit::PayrollEmployeeRun,
        WorkUnit::ManagerMonth,
        WorkUnit::Document,
    ];

    /// Module this work unit belongs to
    pub fn module(&self) -> HrModule {
        match self {
            WorkUnit::LeaveRequest | WorkUnit::TimesheetSubmission => HrModule::TimeManagement,
            WorkUnit::Hire => HrModule::TalentManagement,
            WorkUnit::PayrollEmployeeRun => HrModule::Payroll,
            WorkUnit::ManagerMonth => HrModule::Performance,
            WorkUnit::Document => HrModule::Documents,
        }
    }

    /// Display name for tables and help text
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkUnit::LeaveRequest => "Leave request",
            WorkUnit::TimesheetSubmission => "Timesheet submission",
            WorkUnit::Hire => "Hire",
            WorkUnit::PayrollEmployeeRun => "Employee per payroll run",
            WorkUnit::ManagerMonth => "Manager per month",
            WorkUnit::Document => "Document",
        }
    }

    /// Work units belonging to a module, in table order
    pub fn for_module(module: HrModule) -> impl Iterator<Item = WorkUnit> {
        WorkUnit::ALL.into_iter().filter(move |u| u.module() == module)
    }

    /// Time saved per unit of work for the given current method.
    pub fn time_saved(&self, method: CurrentMethod) -> TimeSaved {
        use CurrentMethod::*;

        match self {
            WorkUnit::LeaveRequest => TimeSaved::Minutes(Minutes(match method {
                Manual => 10.0,
                Spreadsheets => 7.0,
                Multi => 5.0,
                Basic => 3.0,
            })),
            WorkUnit::TimesheetSubmission => TimeSaved::Minutes(Minutes(match method {
                Manual => 3.0,
                Spreadsheets => 2.0,
                Multi => 1.5,
                Basic => 1.0,
            })),
            WorkUnit::Hire => TimeSaved::Minutes(Minutes(match method {
                Manual => 180.0,
                Spreadsheets => 120.0,
                Multi => 90.0,
                Basic => 60.0,
            })),
            WorkUnit::PayrollEmployeeRun => TimeSaved::Minutes(Minutes(match method {
                Manual => 6.0,
                Spreadsheets => 4.0,
                Multi => 3.0,
                Basic => 2.0,
            })),
            WorkUnit::ManagerMonth => TimeSaved::Hours(Hours(match method {
                Manual => 1.2,
                Spreadsheets => 1.0,
                Multi => 0.8,
                Basic => 0.6,
            })),
            WorkUnit::Document => TimeSaved::Minutes(Minutes(match method {
                Manual => 12.0,
                Spreadsheets => 8.0,
                Multi => 6.0,
                Basic => 4.0,
            })),
        }
    }

    /// Hours saved per unit of work (minutes already converted)
    pub fn hours_saved(&self, method: CurrentMethod) -> Hours {
        self.time_saved(method).as_hours()
    }
}

impl std::fmt::Display for WorkUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Fraction of a module's saved time attributed to HR staff vs. managers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSplit {
    /// HR staff share (0.0 - 1.0)
    pub hr: f64,
    /// Manager share (0.0 - 1.0)
    pub manager: f64,
}

impl TimeSplit {
    /// Split table lookup
    pub fn for_module(module: HrModule) -> TimeSplit {
        let (hr, manager) = match module {
            HrModule::TimeManagement => (0.7, 0.3),
            HrModule::TalentManagement => (0.8, 0.2),
            HrModule::Payroll => (0.9, 0.1),
            HrModule::Performance => (0.2, 0.8),
            HrModule::Documents => (0.7, 0.3),
        };
        TimeSplit { hr, manager }
    }

    /// Apply the split to a total, returning (hr, manager)
    pub fn apply(&self, total: Hours) -> (Hours, Hours) {
        (total * self.hr, total * self.manager)
    }
}
