//! # HR Modules and Current Methods
//!
//! The two enumerations every heuristic lookup is keyed by:
//!
//! - [`HrModule`] - the functional area being automated
//! - [`CurrentMethod`] - how the customer runs that area today
//!
//! Both serialize as short lowercase keys (`"payroll"`, `"spreadsheets"`)
//! which are also the keys used in scenario files and CSV exports.
//!
//! ## Example
//!
//! ```rust
//! use roi_core::modules::{CurrentMethod, HrModule};
//!
//! assert_eq!(HrModule::Payroll.label(), "Payroll");
//! assert_eq!(CurrentMethod::Multi.key(), "multi");
//! assert_eq!(HrModule::ALL.len(), 5);
//! ```

use serde::{Deserialize, Serialize};

/// HR functional area that can be included in the ROI.
///
/// Declaration order is the canonical iteration order (wizard steps,
/// pain signals, CSV rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HrModule {
    /// Leave requests, timesheets, scheduling
    #[serde(rename = "time")]
    TimeManagement,
    /// Hiring, onboarding/offboarding
    #[serde(rename = "talent")]
    TalentManagement,
    /// Payroll runs, corrections, compliance
    #[serde(rename = "payroll")]
    Payroll,
    /// Goal tracking, reviews, feedback
    #[serde(rename = "performance")]
    Performance,
    /// Templates, e-signature, document workflows
    #[serde(rename = "docs")]
    Documents,
}

impl HrModule {
    /// All modules in canonical order
    pub const ALL: [HrModule; 5] = [
        HrModule::TimeManagement,
        HrModule::TalentManagement,
        HrModule::Payroll,
        HrModule::Performance,
        HrModule::Documents,
    ];

    /// Short stable key (matches the serde representation)
    pub fn key(&self) -> &'static str {
        match self {
            HrModule::TimeManagement => "time",
            HrModule::TalentManagement => "talent",
            HrModule::Payroll => "payroll",
            HrModule::Performance => "performance",
            HrModule::Documents => "docs",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            HrModule::TimeManagement => "Time Management",
            HrModule::TalentManagement => "Talent Management",
            HrModule::Payroll => "Payroll",
            HrModule::Performance => "Performance/OKRs",
            HrModule::Documents => "Documents & e-sign",
        }
    }

    /// One-line description of what the module covers
    pub fn description(&self) -> &'static str {
        match self {
            HrModule::TimeManagement => "Leave requests, timesheets, scheduling",
            HrModule::TalentManagement => "Hiring, onboarding/offboarding",
            HrModule::Payroll => "Payroll runs, corrections, compliance",
            HrModule::Performance => "Goal tracking, reviews, feedback",
            HrModule::Documents => "Templates, e-signature, document workflows",
        }
    }

    /// Parse from the short key
    pub fn from_key(key: &str) -> Option<HrModule> {
        HrModule::ALL.iter().copied().find(|m| m.key() == key)
    }
}

impl std::fmt::Display for HrModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How a module's process is handled today.
///
/// Ordered from least to most automated; every heuristic constant decreases
/// along this order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrentMethod {
    /// Manual / paper
    Manual,
    /// Spreadsheets & email
    #[default]
    Spreadsheets,
    /// Multiple disconnected systems
    Multi,
    /// Basic HRIS with limited automation
    Basic,
}

impl CurrentMethod {
    /// All methods, least automated first
    pub const ALL: [CurrentMethod; 4] = [
        CurrentMethod::Manual,
        CurrentMethod::Spreadsheets,
        CurrentMethod::Multi,
        CurrentMethod::Basic,
    ];

    /// Short stable key (matches the serde representation)
    pub fn key(&self) -> &'static str {
        match self {
            CurrentMethod::Manual => "manual",
            CurrentMethod::Spreadsheets => "spreadsheets",
            CurrentMethod::Multi => "multi",
            CurrentMethod::Basic => "basic",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            CurrentMethod::Manual => "Manual / Paper",
            CurrentMethod::Spreadsheets => "Spreadsheets & Email",
            CurrentMethod::Multi => "Multiple Disconnected Systems",
            CurrentMethod::Basic => "Basic HRIS (limited automation)",
        }
    }

    /// Parse from the short key
    pub fn from_key(key: &str) -> Option<CurrentMethod> {
        CurrentMethod::ALL.iter().copied().find(|m| m.key() == key)
    }

    /// Manual or spreadsheet-based, the two methods with extra risk signals
    pub fn is_low_maturity(&self) -> bool {
        matches!(self, CurrentMethod::Manual | CurrentMethod::Spreadsheets)
    }
}

impl std::fmt::Display for CurrentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
