use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balances {
    #[serde(rename = "rothIRA")]
    pub roth_ira: f64,
    pub chase_checking: f64,
    pub td_savings: f64,
    pub student_loans: f64,
    pub auto_loan: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub bi_weekly_net: f64,
    pub gross_annual: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthGoal {
    pub target: f64,
    pub target_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RothHistoryPoint {
    pub month: String,
    pub value: f64,
    pub contributions: f64,
    pub gain: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub month: String,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingPoint {
    pub month: String,
    pub spending: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthHistoryPoint {
    pub month: String,
    pub net_worth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub name: String,
    pub value: f64,
    pub percent: f64,
}

/// Current-state data that every projection starts from. Read-only once
/// loaded; the projectors only ever borrow `balances`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(alias = "currentBalances")]
    pub balances: Balances,
    pub income: Income,
    pub wealth_goal: WealthGoal,
    #[serde(default, rename = "rothIRAHistory")]
    pub roth_ira_history: Vec<RothHistoryPoint>,
    #[serde(default)]
    pub checking_history: Vec<BalancePoint>,
    #[serde(default)]
    pub savings_history: Vec<BalancePoint>,
    #[serde(default)]
    pub spending_history: Vec<SpendingPoint>,
    #[serde(default)]
    pub net_worth_history: Vec<NetWorthHistoryPoint>,
    #[serde(default)]
    pub roth_holdings: Vec<Holding>,
}

/// User-adjustable monthly assumptions. All amounts are dollars per month;
/// `expected_annual_return` is a percentage (8.0 means 8%/year).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scenario {
    pub monthly_roth_contribution: f64,
    pub monthly_savings: f64,
    pub salary_increase: f64,
    pub auto_loan_payment: f64,
    pub auto_loan_extra: f64,
    pub student_loan_payment: f64,
    pub student_loan_extra: f64,
    pub expected_annual_return: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            monthly_roth_contribution: 583.0,
            monthly_savings: 600.0,
            salary_increase: 0.0,
            auto_loan_payment: 457.0,
            auto_loan_extra: 0.0,
            student_loan_payment: 400.0,
            student_loan_extra: 0.0,
            expected_annual_return: 8.0,
        }
    }
}

impl Scenario {
    pub fn total_auto_payment(&self) -> f64 {
        self.auto_loan_payment + self.auto_loan_extra
    }

    pub fn total_student_payment(&self) -> f64 {
        self.student_loan_payment + self.student_loan_extra
    }

    pub fn monthly_return(&self) -> f64 {
        self.expected_annual_return / 100.0 / 12.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoffResult {
    pub auto_payoff_months: u32,
    pub student_payoff_months: u32,
    pub total_months: u32,
    pub debt_free_date: String,
    pub auto_payoff_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthPoint {
    pub month: String,
    pub net_worth: i64,
    pub assets: i64,
    pub debts: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSummary {
    pub total_assets: f64,
    pub total_debts: f64,
    pub net_worth: f64,
    pub monthly_net: f64,
    pub avg_monthly_spending: f64,
    pub roth_growth_percent: Option<f64>,
    pub goal_target: f64,
    pub goal_remaining: f64,
    pub goal_progress_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub summary: SnapshotSummary,
    pub debt_payoff: DebtPayoffResult,
    pub net_worth_projection: Vec<NetWorthPoint>,
    pub projected_net_worth: i64,
}
