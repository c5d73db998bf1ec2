//! # CSV Export
//!
//! Flattens the questionnaire answers and the derived figures into
//! `Metric,Value` rows for download. Inputs are written as entered; derived
//! money and hours are rounded to whole numbers, payback to one decimal.
//!
//! ```text
//! Metric,Value
//! Profile.JobTitle,HR Manager
//! ...
//! Derived.PaybackMonths,4.2
//! PainSignals,Time Management: Spreadsheets & email | ...
//! ```

use crate::calculations::{Advisory, DerivedMetrics};
use crate::modules::HrModule;
use crate::questionnaire::RoiInput;

/// Default file name for the export
pub const EXPORT_FILENAME: &str = "hr-digitisation-roi-questionnaire.csv";

/// Header line of the export
pub const CSV_HEADER: &str = "Metric,Value";

/// Separator between pain signals in the single `PainSignals` cell
pub const PAIN_SIGNAL_SEPARATOR: &str = " | ";

/// One `(metric, value)` line of the export
pub type ExportRow = (String, String);

/// Escape a value for CSV output.
///
/// Values containing a comma, quote, carriage return or newline are
/// quoted, with inner quotes doubled (RFC 4180). Everything else passes
/// through unchanged.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\r') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Round half up to a whole number, without a negative zero.
fn whole(value: f64) -> String {
    let rounded = (value + 0.5).floor() + 0.0;
    format!("{}", rounded)
}

/// Build the export rows in their fixed order.
pub fn export_rows(input: &RoiInput, metrics: &DerivedMetrics, advisory: &Advisory) -> Vec<ExportRow> {
    let mut rows: Vec<ExportRow> = Vec::new();
    let mut push = |prefix: &str, key: &str, value: String| {
        rows.push((format!("{}.{}", prefix, key), value));
    };

    let p = &input.profile;
    push("Profile", "JobTitle", p.job_title.clone());
    push("Profile", "Industry", p.industry.to_string());
    push("Profile", "Currency", p.currency.code().to_string());
    push("Profile", "Employees", p.employees.to_string());
    push("Profile", "Managers", p.managers.to_string());
    push("Profile", "HRHourly", p.hr_hourly.to_string());
    push("Profile", "MgrHourly", p.manager_hourly.to_string());
    push("Profile", "PricePerEmployee", p.price_per_employee.to_string());
    push("Profile", "OneTimeImplementation", p.one_time_implementation.to_string());
    push("Profile", "IncludeManagerTime", p.include_manager_time.to_string());

    for module in HrModule::ALL {
        push("Interests", module.key(), input.modules.is_included(module).to_string());
    }
    for module in HrModule::ALL {
        if let Some(method) = input.methods.get(module) {
            push("Methods", module.key(), method.key().to_string());
        }
    }

    let v = &input.volumes;
    push("Volumes", "LeavePerEmpPerYear", v.leave_per_employee_per_year.to_string());
    push("Volumes", "TimesheetsWeekly", v.timesheets_weekly.to_string());
    push("Volumes", "HiresPerYear", v.hires_per_year.to_string());
    push("Volumes", "PayrollRunsPerMonth", v.payroll_runs_per_month.to_string());
    push("Volumes", "PerfCyclesPerYear", v.performance_cycles_per_year.to_string());
    push("Volumes", "DocsPerEmpPerYear", v.documents_per_employee_per_year.to_string());
    push("Volumes", "OtherSavingsMonthly", v.other_savings_monthly.to_string());

    let m = metrics;
    push("Derived", "AdminHoursYear", whole(m.admin_hours_year));
    push("Derived", "ManagerHoursYear", whole(m.manager_hours_year));
    push("Derived", "AdminSavingsAnnual", whole(m.admin_savings_annual));
    push("Derived", "ManagerSavingsAnnual", whole(m.manager_savings_annual));
    push("Derived", "OtherSavingsAnnual", whole(m.other_savings_annual));
    push("Derived", "TotalSavingsAnnual", whole(m.total_savings_annual));
    push("Derived", "AnnualSoftwareCost", whole(m.annual_software_cost));
    push("Derived", "TotalCostY1", whole(m.total_cost_y1));
    push("Derived", "NetBenefitY1", whole(m.net_benefit_y1));
    push("Derived", "NetBenefitY2", whole(m.net_benefit_y2));
    push("Derived", "ROIY1Percent", whole(m.roi_y1_percent));
    push("Derived", "ROIY2Percent", whole(m.roi_y2_percent));
    push("Derived", "PaybackMonths", m.payback.csv_value());

    rows.push((
        "PainSignals".to_string(),
        advisory.pain_signals.join(PAIN_SIGNAL_SEPARATOR),
    ));
    rows
}

/// Render rows as CSV text: header first, `\n` between lines, no trailing newline.
pub fn to_csv(rows: &[ExportRow]) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(
            rows.iter()
                .map(|(key, value)| format!("{},{}", escape_csv(key), escape_csv(value))),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rows and rendering in one step.
///
/// ```rust
/// use roi_core::calculations::{advise, calculate};
/// use roi_core::export::export_csv;
/// use roi_core::questionnaire::RoiInput;
///
/// let input = RoiInput::default();
/// let csv = export_csv(&input, &calculate(&input), &advise(&input));
/// assert!(csv.starts_with("Metric,Value\nProfile.JobTitle,HR Manager\n"));
/// assert!(csv.contains("\nDerived.TotalSavingsAnnual,40860\n"));
/// ```
pub fn export_csv(input: &RoiInput, metrics: &DerivedMetrics, advisory: &Advisory) -> String {
    to_csv(&export_rows(input, metrics, advisory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{advise, calculate};
    use crate::modules::CurrentMethod;
    use pretty_assertions::assert_eq;

    fn rows_for(input: &RoiInput) -> Vec<ExportRow> {
        export_rows(input, &calculate(input), &advise(input))
    }

    fn value<'a>(rows: &'a [ExportRow], key: &str) -> Option<&'a str> {
        rows.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("plain"), "plain");
        assert_eq!(escape_csv("a,b"), "\"a,b\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape_csv("a\rb"), "\"a\rb\"");
        assert_eq!(escape_csv("a\r\nb"), "\"a\r\nb\"");
        assert_eq!(escape_csv("Documents & e-sign | x"), "Documents & e-sign | x");
    }

    #[test]
    fn test_whole_rounds_half_up() {
        assert_eq!(whole(183.75), "184");
        assert_eq!(whole(2.5), "3");
        assert_eq!(whole(-2.5), "-2");
        assert_eq!(whole(-0.2), "0");
        assert_eq!(whole(40_860.000_000_001), "40860");
    }

    #[test]
    fn test_default_derived_rows() {
        let rows = rows_for(&RoiInput::default());
        let derived: Vec<(&str, &str)> = rows
            .iter()
            .filter(|(k, _)| k.starts_with("Derived."))
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            derived,
            vec![
                ("Derived.AdminHoursYear", "549"),
                ("Derived.ManagerHoursYear", "321"),
                ("Derived.AdminSavingsAnnual", "19215"),
                ("Derived.ManagerSavingsAnnual", "14445"),
                ("Derived.OtherSavingsAnnual", "7200"),
                ("Derived.TotalSavingsAnnual", "40860"),
                ("Derived.AnnualSoftwareCost", "14400"),
                ("Derived.TotalCostY1", "14400"),
                ("Derived.NetBenefitY1", "26460"),
                ("Derived.NetBenefitY2", "26460"),
                ("Derived.ROIY1Percent", "184"),
                ("Derived.ROIY2Percent", "184"),
                ("Derived.PaybackMonths", "4.2"),
            ]
        );
    }

    #[test]
    fn test_input_rows_as_entered() {
        let rows = rows_for(&RoiInput::default());
        assert_eq!(value(&rows, "Profile.Industry"), Some("Technology"));
        assert_eq!(value(&rows, "Profile.Currency"), Some("EUR"));
        assert_eq!(value(&rows, "Profile.Employees"), Some("150"));
        assert_eq!(value(&rows, "Profile.HRHourly"), Some("35"));
        assert_eq!(value(&rows, "Profile.IncludeManagerTime"), Some("true"));
        assert_eq!(value(&rows, "Interests.docs"), Some("true"));
        assert_eq!(value(&rows, "Methods.performance"), Some("spreadsheets"));
        assert_eq!(value(&rows, "Volumes.TimesheetsWeekly"), Some("true"));
        assert_eq!(value(&rows, "Volumes.HiresPerYear"), Some("30"));
        assert_eq!(value(&rows, "Volumes.OtherSavingsMonthly"), Some("600"));
    }

    #[test]
    fn test_methods_only_for_chosen_modules() {
        let mut input = RoiInput::default();
        input.methods.clear(HrModule::TalentManagement);
        let rows = rows_for(&input);
        assert_eq!(value(&rows, "Methods.talent"), None);
        assert_eq!(value(&rows, "Interests.talent"), Some("true"));
        assert_eq!(rows.iter().filter(|(k, _)| k.starts_with("Methods.")).count(), 4);
    }

    #[test]
    fn test_unbounded_payback_and_empty_signals() {
        let mut input = RoiInput::default();
        input.methods = crate::questionnaire::MethodMap::uniform(CurrentMethod::Basic);
        input.volumes.other_savings_monthly = 0.0;
        input.profile.price_per_employee = 100.0;
        let rows = rows_for(&input);
        assert_eq!(value(&rows, "Derived.PaybackMonths"), Some(">24"));
        assert_eq!(value(&rows, "PainSignals"), Some(""));
    }

    #[test]
    fn test_csv_shape() {
        let input = RoiInput::default();
        let csv = export_csv(&input, &calculate(&input), &advise(&input));
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert!(!csv.ends_with('\n'));
        // 10 profile + 5 interests + 5 methods + 7 volumes + 13 derived + signals
        assert_eq!(lines.len(), 1 + 41);
        assert!(lines
            .last()
            .is_some_and(|l| l.starts_with("PainSignals,Time Management: Spreadsheets & email | ")));
    }

    #[test]
    fn test_csv_roundtrip_through_parser() {
        let mut input = RoiInput::default();
        input.profile.job_title = "Head of \"People\", EMEA".to_string();
        let rows = rows_for(&input);
        let csv = to_csv(&rows);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["Metric", "Value"]);

        let parsed: Vec<ExportRow> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].to_string(), r[1].to_string())
            })
            .collect();
        assert_eq!(parsed, rows);
        assert_eq!(value(&parsed, "Profile.JobTitle"), Some("Head of \"People\", EMEA"));
    }

    #[test]
    fn test_csv_roundtrip_with_carriage_return() {
        let mut input = RoiInput::default();
        input.profile.job_title = "Head\rPeople".to_string();
        let rows = rows_for(&input);
        let csv = to_csv(&rows);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv.as_bytes());
        let parsed: Vec<ExportRow> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                assert_eq!(r.len(), 2);
                (r[0].to_string(), r[1].to_string())
            })
            .collect();
        assert_eq!(parsed, rows);
        assert_eq!(value(&parsed, "Profile.JobTitle"), Some("Head\rPeople"));
    }
}
