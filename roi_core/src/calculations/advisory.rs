//! # Advisory Output
//!
//! Soft, presentation-facing text derived from the questionnaire: pain
//! signals and recommendation bullets. None of this feeds the financial
//! figures in [`DerivedMetrics`](super::financials::DerivedMetrics).

use serde::{Deserialize, Serialize};

use crate::modules::{CurrentMethod, HrModule};
use crate::questionnaire::{ModuleSelection, RoiInput};

/// Pain signals are cut to this many entries
pub const MAX_PAIN_SIGNALS: usize = 6;

/// Recommendation bullets are cut to this many entries
pub const MAX_NARRATIVE_BULLETS: usize = 5;

/// Fewer module bullets than this gets the generic bullet appended
const MIN_NARRATIVE_BULLETS: usize = 4;

const GENERIC_BULLET: &str = "Free HR to focus on higher-value, strategic initiatives.";

/// Advisory text for a questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Advisory {
    /// Module/method combinations that suggest heavy manual burden
    pub pain_signals: Vec<String>,

    /// Recommendation bullets for the selected modules
    pub narrative: Vec<String>,
}

/// Pain signals for the included modules, in module order, at most six.
///
/// ```rust
/// use roi_core::calculations::advisory::pain_signals;
/// use roi_core::modules::{CurrentMethod, HrModule};
/// use roi_core::questionnaire::{MethodMap, RoiInput};
///
/// let mut input = RoiInput::default();
/// input.methods = MethodMap::uniform(CurrentMethod::Basic);
/// assert!(pain_signals(&input).is_empty());
///
/// let input = input.with_method(HrModule::Payroll, CurrentMethod::Manual);
/// assert_eq!(
///     pain_signals(&input),
///     vec!["Payroll: Manual processes", "Payroll: compliance & errors risk"]
/// );
/// ```
pub fn pain_signals(input: &RoiInput) -> Vec<String> {
    let mut signals = Vec::new();

    for (module, method) in input.active_modules() {
        let label = module.label();
        match method {
            CurrentMethod::Manual => signals.push(format!("{}: Manual processes", label)),
            CurrentMethod::Spreadsheets => signals.push(format!("{}: Spreadsheets & email", label)),
            CurrentMethod::Multi => signals.push(format!("{}: Too many disconnected tools", label)),
            CurrentMethod::Basic => {}
        }

        if method.is_low_maturity() {
            match module {
                HrModule::Payroll => signals.push("Payroll: compliance & errors risk".to_string()),
                HrModule::Performance => signals.push("Performance: OKRs/reviews overhead".to_string()),
                _ => {}
            }
        }
    }

    signals.truncate(MAX_PAIN_SIGNALS);
    signals
}

/// Recommendation bullets for the selected modules.
pub fn narrative(modules: &ModuleSelection) -> Vec<String> {
    // Quick wins first, not module order
    const ORDER: [(HrModule, &str); 5] = [
        (
            HrModule::TimeManagement,
            "Automate repetitive time tasks (leave, timesheets) with self-service and reminders.",
        ),
        (
            HrModule::TalentManagement,
            "Standardize hiring & onboarding with templates and task flows.",
        ),
        (
            HrModule::Documents,
            "Create a single source of truth with templates and e-sign.",
        ),
        (
            HrModule::Payroll,
            "Reduce payroll prep & corrections; lower compliance risk.",
        ),
        (
            HrModule::Performance,
            "Streamline OKRs/reviews so managers coach more, admin less.",
        ),
    ];

    let mut bullets: Vec<String> = ORDER
        .iter()
        .filter(|(module, _)| modules.is_included(*module))
        .map(|(_, text)| text.to_string())
        .collect();

    if bullets.len() < MIN_NARRATIVE_BULLETS {
        bullets.push(GENERIC_BULLET.to_string());
    }
    bullets.truncate(MAX_NARRATIVE_BULLETS);
    bullets
}

/// Pain signals and narrative together.
pub fn advise(input: &RoiInput) -> Advisory {
    Advisory {
        pain_signals: pain_signals(input),
        narrative: narrative(&input.modules),
    }
}
