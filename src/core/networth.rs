use chrono::NaiveDate;
use tracing::debug;

use super::calendar::{add_months_rolling, short_month_two_digit_year};
use super::types::{Balances, NetWorthPoint, Scenario};

pub const PROJECTION_MONTHS: u32 = 56;
pub const SAMPLE_EVERY_MONTHS: u32 = 6;

#[derive(Debug, Clone, Copy)]
struct ProjectionState {
    roth: f64,
    savings: f64,
    auto_loan: f64,
    student_loan: f64,
}

impl ProjectionState {
    fn from_balances(balances: &Balances) -> Self {
        Self {
            roth: balances.roth_ira,
            savings: balances.td_savings,
            auto_loan: balances.auto_loan,
            student_loan: balances.student_loans,
        }
    }

    fn apply_investments(&mut self, scenario: &Scenario, monthly_return: f64) {
        self.roth = self.roth * (1.0 + monthly_return) + scenario.monthly_roth_contribution;
        self.savings += scenario.monthly_savings;
    }

    fn apply_debt_paydown(&mut self, scenario: &Scenario) {
        if self.auto_loan > 0.0 {
            let payment = scenario.total_auto_payment().min(self.auto_loan);
            self.auto_loan = (self.auto_loan - payment).max(0.0);
        } else {
            let payment = (scenario.total_student_payment() + scenario.total_auto_payment())
                .min(self.student_loan);
            self.student_loan = (self.student_loan - payment).max(0.0);
        }
    }

    fn assets(&self) -> f64 {
        self.roth + self.savings
    }

    fn debts(&self) -> f64 {
        self.auto_loan + self.student_loan
    }

    fn net_worth(&self) -> f64 {
        self.roth + self.savings - self.auto_loan - self.student_loan
    }
}

pub fn compute_net_worth_projection(
    balances: &Balances,
    current_net_worth: f64,
    scenario: &Scenario,
    today: NaiveDate,
) -> Vec<NetWorthPoint> {
    let monthly_return = scenario.monthly_return();
    let mut state = ProjectionState::from_balances(balances);
    let mut points =
        Vec::with_capacity((PROJECTION_MONTHS / SAMPLE_EVERY_MONTHS + 1) as usize);

    // Month 0 is simulated too, so the first sample is one month ahead.
    for month in 0..=PROJECTION_MONTHS {
        state.apply_investments(scenario, monthly_return);
        state.apply_debt_paydown(scenario);

        if month % SAMPLE_EVERY_MONTHS == 0 {
            points.push(NetWorthPoint {
                month: short_month_two_digit_year(add_months_rolling(today, month)),
                net_worth: round_half_up(state.net_worth()),
                assets: round_half_up(state.assets()),
                debts: round_half_up(state.debts()),
            });
        }
    }

    debug!(
        current_net_worth,
        final_net_worth = state.net_worth(),
        samples = points.len(),
        "computed net worth projection"
    );
    points
}

// Halves go toward +inf: -0.5 becomes 0.
pub(crate) fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date")
    }

    fn sample_balances() -> Balances {
        Balances {
            roth_ira: 15_429.31,
            chase_checking: 2_368.22,
            td_savings: 3_000.17,
            student_loans: 22_250.0,
            auto_loan: 20_850.0,
        }
    }

    const CURRENT_NET_WORTH: f64 = -22_302.3;

    #[test]
    fn projection_has_ten_points_at_six_month_steps() {
        let points = compute_net_worth_projection(
            &sample_balances(),
            CURRENT_NET_WORTH,
            &Scenario::default(),
            today(),
        );
        assert_eq!(points.len(), 10);
        let labels: Vec<&str> = points.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Jan 26", "Jul 26", "Jan 27", "Jul 27", "Jan 28", "Jul 28", "Jan 29", "Jul 29",
                "Jan 30", "Jul 30"
            ]
        );
    }

    #[test]
    fn default_scenario_matches_reference_values() {
        let points = compute_net_worth_projection(
            &sample_balances(),
            CURRENT_NET_WORTH,
            &Scenario::default(),
            today(),
        );
        let values: Vec<(i64, i64, i64)> = points
            .iter()
            .map(|p| (p.net_worth, p.assets, p.debts))
            .collect();
        assert_eq!(
            values,
            [
                (-22_928, 19_715, 42_643),
                (-12_373, 27_528, 39_901),
                (-1_648, 35_511, 37_159),
                (9_256, 43_673, 34_417),
                (20_346, 52_021, 31_675),
                (31_628, 60_561, 28_933),
                (43_111, 69_302, 26_191),
                (54_804, 78_253, 23_449),
                (67_742, 87_421, 19_679),
                (82_279, 96_816, 14_537),
            ]
        );
    }

    // The "today" point is one simulated month ahead of the snapshot.
    #[test]
    fn month_zero_sample_already_reflects_one_month() {
        let balances = sample_balances();
        let scenario = Scenario {
            expected_annual_return: 0.0,
            ..Scenario::default()
        };
        let points = compute_net_worth_projection(&balances, CURRENT_NET_WORTH, &scenario, today());
        let first = &points[0];

        let roth = balances.roth_ira + scenario.monthly_roth_contribution;
        let savings = balances.td_savings + scenario.monthly_savings;
        let auto_loan = balances.auto_loan - scenario.total_auto_payment();
        let expected = roth + savings - auto_loan - balances.student_loans;

        assert_eq!(first.net_worth, round_half_up(expected));
        assert_eq!(first.net_worth, -23_031);
        assert_ne!(first.net_worth, round_half_up(CURRENT_NET_WORTH));
        assert_eq!(first.debts, 42_643);
    }

    #[test]
    fn zero_return_grows_roth_linearly() {
        let balances = Balances {
            roth_ira: 1_000.0,
            chase_checking: 0.0,
            td_savings: 0.0,
            student_loans: 0.0,
            auto_loan: 0.0,
        };
        let scenario = Scenario {
            monthly_roth_contribution: 250.0,
            monthly_savings: 0.0,
            expected_annual_return: 0.0,
            ..Scenario::default()
        };
        let points = compute_net_worth_projection(&balances, 1_000.0, &scenario, today());
        for (idx, point) in points.iter().enumerate() {
            let months_simulated = (idx as i64) * 6 + 1;
            assert_eq!(point.assets, 1_000 + months_simulated * 250);
            assert_eq!(point.debts, 0);
        }
    }

    #[test]
    fn student_loan_only_pays_down_after_auto_loan_clears() {
        let balances = Balances {
            roth_ira: 0.0,
            chase_checking: 0.0,
            td_savings: 0.0,
            student_loans: 10_000.0,
            auto_loan: 900.0,
        };
        let scenario = Scenario {
            monthly_roth_contribution: 0.0,
            monthly_savings: 0.0,
            auto_loan_payment: 500.0,
            student_loan_payment: 100.0,
            expected_annual_return: 0.0,
            ..Scenario::default()
        };
        // Month 0: auto 400. Month 1: auto 0. Months 2..=6: student -600 each.
        let points = compute_net_worth_projection(&balances, -10_900.0, &scenario, today());
        assert_eq!(points[0].debts, 10_400);
        assert_eq!(points[1].debts, 10_000 - 5 * 600);
    }

    #[test]
    fn start_of_month_overflow_rolls_labels_forward() {
        let start = NaiveDate::from_ymd_opt(2025, 8, 31).expect("valid date");
        let points = compute_net_worth_projection(
            &sample_balances(),
            CURRENT_NET_WORTH,
            &Scenario::default(),
            start,
        );
        assert_eq!(points[0].month, "Aug 25");
        assert_eq!(points[1].month, "Mar 26");
    }

    #[test]
    fn round_half_up_breaks_ties_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-22_302.3), -22_302);
        assert_eq!(round_half_up(0.499_999_999_999_999_94), 0);
        assert_eq!(round_half_up(-0.500_000_000_000_000_1), -1);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_loans_never_go_negative(
            auto_loan in 0u32..40_000,
            student_loans in 0u32..40_000,
            auto_payment in 0u32..3_000,
            auto_extra in 0u32..2_000,
            student_payment in 0u32..3_000,
            student_extra in 0u32..2_000,
            return_halves in 6u32..25,
        ) {
            let balances = Balances {
                roth_ira: 5_000.0,
                chase_checking: 0.0,
                td_savings: 1_000.0,
                student_loans: student_loans as f64,
                auto_loan: auto_loan as f64,
            };
            let scenario = Scenario {
                auto_loan_payment: auto_payment as f64,
                auto_loan_extra: auto_extra as f64,
                student_loan_payment: student_payment as f64,
                student_loan_extra: student_extra as f64,
                expected_annual_return: return_halves as f64 * 0.5,
                ..Scenario::default()
            };
            let points = compute_net_worth_projection(&balances, 0.0, &scenario, today());
            prop_assert_eq!(points.len(), 10);

            let mut state = ProjectionState::from_balances(&balances);
            for _ in 0..=PROJECTION_MONTHS {
                state.apply_investments(&scenario, scenario.monthly_return());
                state.apply_debt_paydown(&scenario);
                prop_assert!(state.auto_loan >= 0.0);
                prop_assert!(state.student_loan >= 0.0);
            }
            for point in &points {
                prop_assert!(point.debts >= 0);
            }
        }

        #[test]
        fn prop_projection_is_idempotent(
            roth in 0u32..100_000,
            savings in 0u32..50_000,
            extra in 0u32..2_000,
        ) {
            let balances = Balances {
                roth_ira: roth as f64,
                td_savings: savings as f64,
                ..sample_balances()
            };
            let scenario = Scenario {
                auto_loan_extra: extra as f64,
                ..Scenario::default()
            };
            let first = compute_net_worth_projection(&balances, 0.0, &scenario, today());
            let second = compute_net_worth_projection(&balances, 0.0, &scenario, today());
            prop_assert_eq!(first, second);
        }
    }
}
