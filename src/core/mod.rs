mod calendar;
mod debt;
mod networth;
mod summary;
mod types;

pub use debt::{AUTO_LOAN_APR, MAX_PAYOFF_MONTHS, STUDENT_LOAN_APR, compute_debt_payoff};
pub use networth::{PROJECTION_MONTHS, SAMPLE_EVERY_MONTHS, compute_net_worth_projection};
pub use summary::{build_dashboard, summarize};
pub use types::{
    BalancePoint, Balances, Dashboard, DebtPayoffResult, Holding, Income, NetWorthHistoryPoint,
    NetWorthPoint, RothHistoryPoint, Scenario, Snapshot, SnapshotSummary, SpendingPoint,
    WealthGoal,
};
