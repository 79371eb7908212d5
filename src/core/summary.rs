use chrono::NaiveDate;

use super::debt::compute_debt_payoff;
use super::networth::compute_net_worth_projection;
use super::types::{Dashboard, Scenario, Snapshot, SnapshotSummary};

const PAY_PERIODS_PER_YEAR: f64 = 26.0;

pub fn summarize(snapshot: &Snapshot) -> SnapshotSummary {
    let b = &snapshot.balances;
    let total_assets = b.roth_ira + b.chase_checking + b.td_savings;
    let total_debts = b.student_loans + b.auto_loan;
    let net_worth = total_assets - total_debts;

    let avg_monthly_spending = if snapshot.spending_history.is_empty() {
        0.0
    } else {
        snapshot
            .spending_history
            .iter()
            .map(|p| p.spending)
            .sum::<f64>()
            / snapshot.spending_history.len() as f64
    };

    let roth_growth_percent = snapshot
        .roth_ira_history
        .first()
        .map(|p| p.value)
        .filter(|start| *start != 0.0)
        .map(|start| (b.roth_ira - start) / start * 100.0);

    let target = snapshot.wealth_goal.target;
    let baseline = snapshot
        .net_worth_history
        .first()
        .map(|p| p.net_worth)
        .unwrap_or(0.0);
    let goal_span = target - baseline;
    let goal_progress_percent =
        (goal_span != 0.0).then(|| (net_worth - baseline) / goal_span * 100.0);

    SnapshotSummary {
        total_assets,
        total_debts,
        net_worth,
        monthly_net: snapshot.income.bi_weekly_net * PAY_PERIODS_PER_YEAR / 12.0,
        avg_monthly_spending,
        roth_growth_percent,
        goal_target: target,
        goal_remaining: target - net_worth,
        goal_progress_percent,
    }
}

/// Everything one render needs, computed from scratch.
pub fn build_dashboard(snapshot: &Snapshot, scenario: &Scenario, today: NaiveDate) -> Dashboard {
    let summary = summarize(snapshot);
    let debt_payoff = compute_debt_payoff(&snapshot.balances, scenario, today);
    let net_worth_projection =
        compute_net_worth_projection(&snapshot.balances, summary.net_worth, scenario, today);
    let projected_net_worth = net_worth_projection
        .last()
        .map(|p| p.net_worth)
        .unwrap_or(0);

    Dashboard {
        summary,
        debt_payoff,
        net_worth_projection,
        projected_net_worth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_snapshot;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn summarize_default_snapshot() {
        let summary = summarize(&default_snapshot());
        assert_approx(summary.total_assets, 20_797.70);
        assert_approx(summary.total_debts, 43_100.0);
        assert_approx(summary.net_worth, -22_302.30);
        assert_approx(summary.monthly_net, 3_263.845);
        assert_approx(summary.avg_monthly_spending, 2_570.703_333_333_333);
        assert_approx(summary.goal_target, 180_000.0);
        assert_approx(summary.goal_remaining, 202_302.30);
        assert_approx(
            summary.roth_growth_percent.expect("history present"),
            417.888_945_949_846_7,
        );
        assert_approx(
            summary.goal_progress_percent.expect("span non-zero"),
            8.960_186_847_754_18,
        );
    }

    #[test]
    fn summarize_handles_empty_history() {
        let mut snapshot = default_snapshot();
        snapshot.spending_history.clear();
        snapshot.roth_ira_history.clear();
        snapshot.net_worth_history.clear();
        snapshot.wealth_goal.target = 0.0;

        let summary = summarize(&snapshot);
        assert_approx(summary.avg_monthly_spending, 0.0);
        assert!(summary.roth_growth_percent.is_none());
        assert!(summary.goal_progress_percent.is_none());
    }

    #[test]
    fn dashboard_uses_last_projection_point() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date");
        let dashboard = build_dashboard(&default_snapshot(), &Scenario::default(), today);
        assert_eq!(dashboard.net_worth_projection.len(), 10);
        assert_eq!(dashboard.projected_net_worth, 82_279);
        assert_eq!(dashboard.debt_payoff.total_months, 80);
    }
}
