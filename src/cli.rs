use std::fmt::Write as _;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

use crate::api::{
    ANNUAL_RETURN_RANGE, AUTO_EXTRA_RANGE, ROTH_CONTRIBUTION_RANGE, SALARY_INCREASE_RANGE,
    SAVINGS_RANGE, STUDENT_EXTRA_RANGE,
};
use crate::core::{Dashboard, Scenario, Snapshot};
use crate::data::parse_date;
use crate::error::Result;
use crate::format::{currency, currency_cents};

#[derive(Parser, Debug)]
#[command(
    name = "ledgerview",
    about = "Personal finance dashboard: debt payoff and net worth projections"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "LEDGERVIEW_SNAPSHOT",
        help = "Snapshot JSON file; defaults to the built-in data"
    )]
    pub snapshot: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the JSON API
    Serve {
        #[arg(long, env = "LEDGERVIEW_PORT", default_value_t = 8080)]
        port: u16,
    },
    /// Print the projections for one scenario
    Project(ProjectArgs),
    /// Print the loaded snapshot as JSON
    Snapshot,
}

#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[arg(
        long,
        default_value_t = 583.0,
        value_parser = finite_amount,
        help = "Monthly Roth IRA contribution"
    )]
    pub monthly_roth_contribution: f64,
    #[arg(
        long,
        default_value_t = 600.0,
        value_parser = finite_amount,
        help = "Monthly transfer into savings"
    )]
    pub monthly_savings: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        value_parser = finite_amount,
        help = "Additional monthly income"
    )]
    pub salary_increase: f64,
    #[arg(long, default_value_t = 457.0, value_parser = finite_amount)]
    pub auto_loan_payment: f64,
    #[arg(long, default_value_t = 0.0, value_parser = finite_amount)]
    pub auto_loan_extra: f64,
    #[arg(long, default_value_t = 400.0, value_parser = finite_amount)]
    pub student_loan_payment: f64,
    #[arg(long, default_value_t = 0.0, value_parser = finite_amount)]
    pub student_loan_extra: f64,
    #[arg(
        long,
        default_value_t = 8.0,
        value_parser = finite_amount,
        help = "Expected annual return in percent, e.g. 8"
    )]
    pub expected_annual_return: f64,
    #[arg(long, help = "Projection start date (YYYY-MM-DD); defaults to today")]
    pub as_of: Option<String>,
    #[arg(long, help = "Emit JSON instead of the text report")]
    pub json: bool,
}

impl ProjectArgs {
    pub fn scenario(&self) -> Scenario {
        Scenario {
            monthly_roth_contribution: ROTH_CONTRIBUTION_RANGE.apply(self.monthly_roth_contribution),
            monthly_savings: SAVINGS_RANGE.apply(self.monthly_savings),
            salary_increase: SALARY_INCREASE_RANGE.apply(self.salary_increase),
            auto_loan_payment: self.auto_loan_payment,
            auto_loan_extra: AUTO_EXTRA_RANGE.apply(self.auto_loan_extra),
            student_loan_payment: self.student_loan_payment,
            student_loan_extra: STUDENT_EXTRA_RANGE.apply(self.student_loan_extra),
            expected_annual_return: ANNUAL_RETURN_RANGE.apply(self.expected_annual_return),
        }
    }

    pub fn today(&self) -> Result<NaiveDate> {
        match self.as_of.as_deref() {
            Some(raw) => parse_date(raw),
            None => Ok(Local::now().date_naive()),
        }
    }
}

fn finite_amount(raw: &str) -> std::result::Result<f64, String> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid number {raw:?}: {e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{raw:?} must be a finite number"))
    }
}

pub fn render_report(snapshot: &Snapshot, dashboard: &Dashboard, today: NaiveDate) -> String {
    let s = &dashboard.summary;
    let d = &dashboard.debt_payoff;
    let mut out = String::new();

    let _ = writeln!(out, "As of {}", today.format("%B %-d, %Y"));
    let _ = writeln!(out);
    let _ = writeln!(out, "Net worth        {}", currency(Some(s.net_worth)));
    let _ = writeln!(out, "Total assets     {}", currency(Some(s.total_assets)));
    let _ = writeln!(out, "Total debts      {}", currency(Some(s.total_debts)));
    let _ = writeln!(out, "Monthly net      {}", currency(Some(s.monthly_net)));
    let _ = writeln!(
        out,
        "Avg spending     {}",
        currency(Some(s.avg_monthly_spending))
    );
    let _ = writeln!(
        out,
        "Roth IRA         {}",
        currency_cents(Some(snapshot.balances.roth_ira))
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Auto loan paid off   {} ({} months)",
        d.auto_payoff_date, d.auto_payoff_months
    );
    let _ = writeln!(
        out,
        "Debt free            {} ({} months)",
        d.debt_free_date, d.total_months
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<8} {:>12} {:>12} {:>12}",
        "Month", "Net worth", "Assets", "Debts"
    );
    for point in &dashboard.net_worth_projection {
        let _ = writeln!(
            out,
            "{:<8} {:>12} {:>12} {:>12}",
            point.month,
            currency(Some(point.net_worth as f64)),
            currency(Some(point.assets as f64)),
            currency(Some(point.debts as f64)),
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Goal {} by {}: {} to go{}",
        currency(Some(s.goal_target)),
        snapshot.wealth_goal.target_date,
        currency(Some(s.goal_remaining)),
        s.goal_progress_percent
            .map(|p| format!(", {p:.1}% of the way"))
            .unwrap_or_default()
    );
    out
}
