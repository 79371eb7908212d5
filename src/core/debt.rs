use chrono::NaiveDate;
use tracing::debug;

use super::calendar::{add_approx_months, add_months_rolling, long_month_year, short_month_year};
use super::types::{Balances, DebtPayoffResult, Scenario};

pub const AUTO_LOAN_APR: f64 = 0.0544;
pub const STUDENT_LOAN_APR: f64 = 0.045;
pub const MAX_PAYOFF_MONTHS: u32 = 600;

pub fn compute_debt_payoff(
    balances: &Balances,
    scenario: &Scenario,
    today: NaiveDate,
) -> DebtPayoffResult {
    let auto_payment = scenario.total_auto_payment();
    let auto_payoff_months = months_to_payoff(balances.auto_loan, AUTO_LOAN_APR, auto_payment);

    // Applies from the student loan's first month, not after the auto loan clears.
    let rollover = if auto_payoff_months > 0 {
        auto_payment
    } else {
        0.0
    };
    let student_payment = scenario.total_student_payment() + rollover;
    let student_payoff_months =
        months_to_payoff(balances.student_loans, STUDENT_LOAN_APR, student_payment);

    let total_months = auto_payoff_months + student_payoff_months;
    debug!(
        auto_payoff_months,
        student_payoff_months,
        total_months,
        "computed debt payoff"
    );

    DebtPayoffResult {
        auto_payoff_months,
        student_payoff_months,
        total_months,
        debt_free_date: long_month_year(add_months_rolling(today, total_months)),
        auto_payoff_date: short_month_year(add_approx_months(today, auto_payoff_months)),
    }
}

fn months_to_payoff(balance: f64, annual_rate: f64, monthly_payment: f64) -> u32 {
    let monthly_rate = annual_rate / 12.0;
    let mut remaining = balance;
    let mut months = 0;
    while remaining > 0.0 && months < MAX_PAYOFF_MONTHS {
        let interest = remaining * monthly_rate;
        let principal = monthly_payment - interest;
        remaining -= principal;
        months += 1;
    }
    months
}
