//! Interactive five-step questionnaire on a line-based terminal.
//!
//! Every prompt shows its current value in brackets; pressing Enter keeps
//! it. Unparseable answers also keep the current value. Results are
//! recomputed and shown after each step.

use std::io::{self, BufRead, Write};

use roi_core::calculations::{advise, calculate};
use roi_core::currency::Currency;
use roi_core::modules::{CurrentMethod, HrModule};
use roi_core::questionnaire::{default_managers, Industry, RoiInput, PAYROLL_RUNS_RANGE};

use crate::report::{render_progress, render_summary};

/// Step titles, in order
pub const STEPS: [&str; 5] = ["Profile", "Interests", "Current Methods", "Volumes", "Results"];

pub struct Wizard<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Wizard<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Wizard { reader, writer }
    }

    /// Run all steps starting from `input`, returning the final answers.
    pub fn run(&mut self, mut input: RoiInput) -> io::Result<RoiInput> {
        for (index, title) in STEPS.iter().enumerate() {
            writeln!(self.writer)?;
            writeln!(self.writer, "Step {} of {}: {}", index + 1, STEPS.len(), title)?;
            writeln!(self.writer, "{}", "-".repeat(40))?;

            match index {
                0 => self.profile(&mut input)?,
                1 => self.interests(&mut input)?,
                2 => self.methods(&mut input)?,
                3 => self.volumes(&mut input)?,
                _ => {
                    let metrics = calculate(&input);
                    write!(self.writer, "{}", render_summary(&input, &metrics, &advise(&input)))?;
                    continue;
                }
            }

            input = input.sanitized();
            writeln!(self.writer, "{}", render_progress(&input, &calculate(&input)))?;
        }
        log::debug!("Questionnaire finished for {} employees", input.profile.employees);
        Ok(input)
    }

    fn profile(&mut self, input: &mut RoiInput) -> io::Result<()> {
        let p = &mut input.profile;
        p.job_title = self.ask_text("Job title", &p.job_title)?;
        p.industry = self.ask_choice("Industry", &Industry::ALL, p.industry, |i| i.display_name())?;
        p.currency = self.ask_choice("Currency", &Currency::ALL, p.currency, |c| c.code())?;

        let employees = self.ask_u32("Employees", p.employees)?;
        if employees != p.employees {
            p.managers = default_managers(employees);
            p.employees = employees;
        }
        p.managers = self.ask_u32("Managers", p.managers)?;

        let code = p.currency.code();
        p.hr_hourly = self.ask_f64(&format!("HR hourly ({})", code), p.hr_hourly)?;
        p.manager_hourly = self.ask_f64(&format!("Manager hourly ({})", code), p.manager_hourly)?;
        p.price_per_employee =
            self.ask_f64(&format!("Price per employee / month ({})", code), p.price_per_employee)?;
        p.one_time_implementation =
            self.ask_f64(&format!("One-time implementation ({})", code), p.one_time_implementation)?;
        p.include_manager_time = self.ask_bool("Include manager time in ROI", p.include_manager_time)?;
        Ok(())
    }

    fn interests(&mut self, input: &mut RoiInput) -> io::Result<()> {
        for module in HrModule::ALL {
            let label = format!("{} ({})", module.label(), module.description());
            let included = self.ask_bool(&label, input.modules.is_included(module))?;
            input.modules.set(module, included);
        }
        Ok(())
    }

    fn methods(&mut self, input: &mut RoiInput) -> io::Result<()> {
        let included: Vec<HrModule> = input.modules.included().collect();
        if included.is_empty() {
            writeln!(self.writer, "No modules selected.")?;
        }
        for module in included {
            let current = input.methods.get(module).unwrap_or_default();
            let method = self.ask_choice(module.label(), &CurrentMethod::ALL, current, |m| m.label())?;
            input.methods.set(module, method);
        }
        Ok(())
    }

    fn volumes(&mut self, input: &mut RoiInput) -> io::Result<()> {
        let modules = input.modules.clone();
        let v = &mut input.volumes;

        if modules.is_included(HrModule::TimeManagement) {
            v.leave_per_employee_per_year =
                self.ask_f64("Leave requests per employee / year", v.leave_per_employee_per_year)?;
            v.timesheets_weekly = self.ask_bool("Timesheets weekly", v.timesheets_weekly)?;
        }
        if modules.is_included(HrModule::TalentManagement) {
            v.hires_per_year = self.ask_f64("Hires per year", v.hires_per_year)?;
        }
        if modules.is_included(HrModule::Payroll) {
            let label = format!(
                "Payroll runs per month ({}-{})",
                PAYROLL_RUNS_RANGE.start(),
                PAYROLL_RUNS_RANGE.end()
            );
            v.payroll_runs_per_month = self.ask_u32(&label, v.payroll_runs_per_month)?;
        }
        if modules.is_included(HrModule::Performance) {
            v.performance_cycles_per_year =
                self.ask_u32("Performance cycles per year", v.performance_cycles_per_year)?;
        }
        if modules.is_included(HrModule::Documents) {
            v.documents_per_employee_per_year =
                self.ask_f64("Docs per employee / year", v.documents_per_employee_per_year)?;
        }
        let label = format!("Other savings (monthly) ({})", input.profile.currency.code());
        input.volumes.other_savings_monthly = self.ask_f64(&label, input.volumes.other_savings_monthly)?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line. `None` on Enter or end of input.
    fn read_answer(&mut self, prompt: &str, current: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{} [{}]: ", prompt, current)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    fn ask_text(&mut self, prompt: &str, current: &str) -> io::Result<String> {
        Ok(self
            .read_answer(prompt, current)?
            .unwrap_or_else(|| current.to_string()))
    }

    fn ask_f64(&mut self, prompt: &str, current: f64) -> io::Result<f64> {
        self.ask_parsed(prompt, current)
    }

    fn ask_u32(&mut self, prompt: &str, current: u32) -> io::Result<u32> {
        self.ask_parsed(prompt, current)
    }

    fn ask_parsed<T>(&mut self, prompt: &str, current: T) -> io::Result<T>
    where
        T: std::str::FromStr + std::fmt::Display + Copy,
    {
        let Some(answer) = self.read_answer(prompt, &current.to_string())? else {
            return Ok(current);
        };
        match answer.parse() {
            Ok(value) => Ok(value),
            Err(_) => {
                writeln!(self.writer, "  '{}' is not a valid number, keeping {}", answer, current)?;
                Ok(current)
            }
        }
    }

    fn ask_bool(&mut self, prompt: &str, current: bool) -> io::Result<bool> {
        let shown = if current { "Y/n" } else { "y/N" };
        let Some(answer) = self.read_answer(prompt, shown)? else {
            return Ok(current);
        };
        Ok(match answer.to_ascii_lowercase().as_str() {
            "y" | "yes" | "true" | "1" => true,
            "n" | "no" | "false" | "0" => false,
            _ => current,
        })
    }

    /// Numbered choice from `options`; answer by number.
    fn ask_choice<T, F>(&mut self, prompt: &str, options: &[T], current: T, label: F) -> io::Result<T>
    where
        T: Copy + PartialEq,
        F: Fn(&T) -> &'static str,
    {
        writeln!(self.writer, "{}:", prompt)?;
        for (i, option) in options.iter().enumerate() {
            let marker = if *option == current { "*" } else { " " };
            writeln!(self.writer, "  {}{}. {}", marker, i + 1, label(option))?;
        }
        let Some(answer) = self.read_answer("  Choice", label(&current))? else {
            return Ok(current);
        };
        let picked = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i).copied());
        Ok(picked.unwrap_or(current))
    }
}
