//! The hand-maintained snapshot. Update `default_snapshot` monthly, or point
//! the binary at a JSON file of the same shape.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::core::{
    BalancePoint, Balances, Holding, Income, NetWorthHistoryPoint, RothHistoryPoint, Snapshot,
    SpendingPoint, WealthGoal,
};
use crate::error::{Error, Result};

pub fn load_snapshot(path: Option<&Path>) -> Result<Snapshot> {
    let Some(path) = path else {
        return Ok(default_snapshot());
    };

    let raw = fs::read_to_string(path).map_err(|source| Error::SnapshotRead {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot = serde_json::from_str::<Snapshot>(&raw).map_err(|source| Error::SnapshotParse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "loaded snapshot");
    Ok(snapshot)
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate(raw.to_string()))
}

fn roth(month: &str, value: f64, contributions: f64, gain: f64) -> RothHistoryPoint {
    RothHistoryPoint {
        month: month.to_string(),
        value,
        contributions,
        gain,
    }
}

fn balance(month: &str, balance: f64) -> BalancePoint {
    BalancePoint {
        month: month.to_string(),
        balance,
    }
}

fn spending(month: &str, spending: f64) -> SpendingPoint {
    SpendingPoint {
        month: month.to_string(),
        spending,
    }
}

fn net_worth(month: &str, net_worth: f64) -> NetWorthHistoryPoint {
    NetWorthHistoryPoint {
        month: month.to_string(),
        net_worth,
    }
}

fn holding(name: &str, value: f64, percent: f64) -> Holding {
    Holding {
        name: name.to_string(),
        value,
        percent,
    }
}

pub fn default_snapshot() -> Snapshot {
    Snapshot {
        balances: Balances {
            roth_ira: 15_429.31,
            chase_checking: 2_368.22,
            td_savings: 3_000.17,
            student_loans: 22_250.0,
            auto_loan: 20_850.0,
        },
        income: Income {
            bi_weekly_net: 1_506.39,
            gross_annual: 52_000.0,
        },
        wealth_goal: WealthGoal {
            target: 180_000.0,
            target_date: "August 2030".to_string(),
        },
        roth_ira_history: vec![
            roth("Dec 24", 2_979.27, 3_000.0, -20.73),
            roth("Jan 25", 7_675.69, 7_600.0, 75.69),
            roth("Mar 25", 8_623.67, 9_400.0, -776.33),
            roth("Apr 25", 8_637.30, 9_400.0, -762.70),
            roth("May 25", 9_956.79, 9_975.0, -18.21),
            roth("Jun 25", 10_617.89, 9_975.0, 642.89),
            roth("Jul 25", 10_954.81, 9_975.0, 979.81),
            roth("Sep 25", 13_452.52, 11_789.66, 1_662.86),
            roth("Oct 25", 17_351.50, 13_289.66, 4_061.84),
            roth("Nov 25", 16_637.11, 13_289.66, 3_347.45),
            roth("Dec 25", 15_429.31, 13_289.66, 2_139.65),
        ],
        checking_history: vec![
            balance("Mar 25", 552.00),
            balance("Apr 25", 6_499.19),
            balance("May 25", 5_339.24),
            balance("Jun 25", 5_339.24),
            balance("Jul 25", 2_735.58),
            balance("Aug 25", 1_503.72),
            balance("Sep 25", 3_855.04),
            balance("Oct 25", 3_442.32),
            balance("Nov 25", 3_123.07),
            balance("Dec 25", 2_368.22),
        ],
        savings_history: vec![
            balance("Jan 25", 2_256.42),
            balance("Feb 25", 2_334.46),
            balance("Mar 25", 534.47),
            balance("May 25", 1_159.49),
            balance("Jun 25", 4_859.54),
            balance("Jul 25", 4_259.60),
            balance("Aug 25", 3_014.66),
            balance("Sep 25", 2_400.06),
            balance("Oct 25", 1_500.09),
            balance("Nov 25", 2_100.12),
            balance("Dec 25", 3_000.17),
        ],
        spending_history: vec![
            spending("Jan 25", 1_835.50),
            spending("Feb 25", 1_158.77),
            spending("Mar 25", 6_490.88),
            spending("Apr 25", 3_802.94),
            spending("May 25", 2_646.10),
            spending("Jun 25", 2_141.42),
            spending("Jul 25", 2_379.52),
            spending("Aug 25", 1_536.55),
            spending("Sep 25", 2_433.49),
            spending("Oct 25", 2_048.52),
            spending("Nov 25", 2_449.16),
            spending("Dec 25", 1_925.59),
        ],
        net_worth_history: vec![
            net_worth("Jan 25", -42_213.0),
            net_worth("Mar 25", -36_590.0),
            net_worth("May 25", -29_145.0),
            net_worth("Jul 25", -26_949.0),
            net_worth("Sep 25", -24_492.0),
            net_worth("Nov 25", -21_640.0),
            net_worth("Dec 25", -22_303.0),
        ],
        roth_holdings: vec![
            holding("Mutual Funds", 9_165.0, 60.0),
            holding("Stocks", 5_736.0, 37.0),
            holding("ETFs", 499.0, 3.0),
        ],
    }
}
