//! Terminal rendering of results and tables.

use std::fmt;

use roi_core::calculations::{Advisory, DerivedMetrics};
use roi_core::modules::{CurrentMethod, HrModule};
use roi_core::questionnaire::RoiInput;
use roi_core::tables::{TimeSplit, WorkUnit};

const RULE: &str = "═══════════════════════════════════════════════";

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[LOW]"
    }
}

/// One-line running total shown after each wizard step.
pub fn render_progress(input: &RoiInput, metrics: &DerivedMetrics) -> String {
    let currency = input.profile.currency;
    format!(
        "  → Savings {} / year | ROI (Y1) {:.0}% | Payback {}",
        currency.format(metrics.total_savings_annual),
        metrics.roi_y1_percent,
        metrics.payback
    )
}

/// Full results summary.
pub fn render_summary(input: &RoiInput, metrics: &DerivedMetrics, advisory: &Advisory) -> String {
    Summary {
        input,
        metrics,
        advisory,
    }
    .to_string()
}

/// Heuristic tables: time saved per unit of work and HR/manager splits.
pub fn render_tables() -> String {
    Tables.to_string()
}

struct Summary<'a> {
    input: &'a RoiInput,
    metrics: &'a DerivedMetrics,
    advisory: &'a Advisory,
}

struct Tables;

impl fmt::Display for Summary<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Summary {
            input,
            metrics,
            advisory,
        } = *self;
        let currency = input.profile.currency;
        let money = |v: f64| currency.format(v);

        writeln!(out, "{}", RULE)?;
        writeln!(out, "  HR SOFTWARE ROI ESTIMATE")?;
        writeln!(out, "{}", RULE)?;
        writeln!(out)?;

        let p = &input.profile;
        writeln!(out, "Profile:")?;
        writeln!(out, "  {} · {}", p.job_title, p.industry)?;
        writeln!(out, "  Employees: {}   Managers: {}", p.employees, p.managers)?;
        writeln!(
            out,
            "  Rates:     HR {}/h, manager {}/h",
            money(p.hr_hourly),
            money(p.manager_hourly)
        )?;
        writeln!(out)?;

        writeln!(out, "Hours saved per year:")?;
        for row in &metrics.module_hours {
            let method = input
                .methods
                .get(row.module)
                .map(|m| m.label())
                .unwrap_or("no method");
            if input.modules.is_included(row.module) {
                writeln!(
                    out,
                    "  {:<20} {:>7.0} h  (HR {:.0}, mgr {:.0})  [{}]",
                    row.module.label(),
                    row.total_hours,
                    row.hr_hours,
                    row.manager_hours,
                    method
                )?;
            } else {
                writeln!(out, "  {:<20} {:>9}", row.module.label(), "excluded")?;
            }
        }
        writeln!(out, "  {:<20} {:>7.0} h", "Admin (HR)", metrics.admin_hours_year)?;
        writeln!(out, "  {:<20} {:>7.0} h", "Managers", metrics.manager_hours_year)?;
        writeln!(out)?;

        writeln!(out, "Annual savings:")?;
        writeln!(out, "  Admin:    {}", money(metrics.admin_savings_annual))?;
        if p.include_manager_time {
            writeln!(out, "  Manager:  {}", money(metrics.manager_savings_annual))?;
        } else {
            writeln!(out, "  Manager:  {} (manager time excluded)", money(0.0))?;
        }
        writeln!(out, "  Other:    {}", money(metrics.other_savings_annual))?;
        writeln!(out, "  Total:    {}", money(metrics.total_savings_annual))?;
        writeln!(out)?;

        writeln!(out, "Cost:")?;
        writeln!(out, "  Software (annual):       {}", money(metrics.annual_software_cost))?;
        if p.one_time_implementation > 0.0 {
            writeln!(out, "  Implementation (Y1):     {}", money(p.one_time_implementation))?;
        }
        writeln!(out, "  Total (Y1):              {}", money(metrics.total_cost_y1))?;
        writeln!(out)?;

        writeln!(out, "Outcome:")?;
        writeln!(
            out,
            "  Net benefit (Y1):  {}  {}",
            money(metrics.net_benefit_y1),
            status_icon(metrics.net_benefit_y1 > 0.0)
        )?;
        writeln!(
            out,
            "  Net benefit (Y2+): {}  {}",
            money(metrics.net_benefit_y2),
            status_icon(metrics.net_benefit_y2 > 0.0)
        )?;
        writeln!(out, "  ROI (Y1):          {:.0}%", metrics.roi_y1_percent)?;
        writeln!(out, "  ROI (Y2+):         {:.0}%", metrics.roi_y2_percent)?;
        writeln!(out, "  Payback:           {}", metrics.payback)?;
        writeln!(out)?;

        if !advisory.pain_signals.is_empty() {
            writeln!(out, "Pain signals:")?;
            for signal in &advisory.pain_signals {
                writeln!(out, "  - {}", signal)?;
            }
            writeln!(out)?;
        }

        writeln!(out, "Recommendations:")?;
        for bullet in &advisory.narrative {
            writeln!(out, "  - {}", bullet)?;
        }
        writeln!(out, "{}", RULE)
    }
}

impl fmt::Display for Tables {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(out, "{:<32}", "Time saved per unit")?;
        for method in CurrentMethod::ALL {
            write!(out, "{:>14}", method.key())?;
        }
        writeln!(out)?;

        for module in HrModule::ALL {
            for unit in WorkUnit::for_module(module) {
                let name = format!("{} / {}", module.key(), unit.display_name());
                write!(out, "{:<32}", name)?;
                for method in CurrentMethod::ALL {
                    let saved = unit.time_saved(method);
                    let cell = format!("{} {}", saved.raw(), saved.unit_suffix());
                    write!(out, "{:>14}", cell)?;
                }
                writeln!(out)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "{:<32}{:>14}{:>14}", "Split", "hr", "manager")?;
        for module in HrModule::ALL {
            let split = TimeSplit::for_module(module);
            writeln!(
                out,
                "{:<32}{:>13.0}%{:>13.0}%",
                module.label(),
                split.hr * 100.0,
                split.manager * 100.0
            )?;
        }
        Ok(())
    }
}
