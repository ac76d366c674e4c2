//! Bill list filters and totals.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinanceError;
use crate::models::Bill;

/// Days after today still counted as upcoming.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillFilter {
    /// Unpaid, due from today through today + 7 days.
    #[default]
    Upcoming,
    /// Due in the current month and year, paid or not.
    ThisMonth,
    Overdue,
    All,
}

impl BillFilter {
    pub fn matches(&self, bill: &Bill, today: NaiveDate) -> bool {
        match self {
            BillFilter::Upcoming => {
                !bill.paid
                    && bill.due_date >= today
                    && bill.due_date <= today + Duration::days(UPCOMING_WINDOW_DAYS)
            }
            BillFilter::ThisMonth => same_month(bill.due_date, today),
            BillFilter::Overdue => bill.is_overdue(today),
            BillFilter::All => true,
        }
    }
}

impl fmt::Display for BillFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BillFilter::Upcoming => "upcoming",
            BillFilter::ThisMonth => "this_month",
            BillFilter::Overdue => "overdue",
            BillFilter::All => "all",
        };
        f.write_str(name)
    }
}

impl FromStr for BillFilter {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "upcoming" => Ok(BillFilter::Upcoming),
            "this_month" => Ok(BillFilter::ThisMonth),
            "overdue" => Ok(BillFilter::Overdue),
            "all" => Ok(BillFilter::All),
            other => Err(FinanceError::validation(format!("unknown bill filter '{}'", other))),
        }
    }
}

fn same_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

/// Bills matching `filter`, earliest due date first.
pub fn filter_bills(bills: &[Bill], filter: BillFilter, today: NaiveDate) -> Vec<Bill> {
    let mut selected: Vec<Bill> = bills
        .iter()
        .filter(|b| filter.matches(b, today))
        .cloned()
        .collect();
    selected.sort_by_key(|b| b.due_date);
    selected
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BillTotals {
    /// Every unpaid bill.
    pub to_pay: f64,
    /// Unpaid bills due in the current month.
    pub due_this_month: f64,
    /// Same window as [`BillFilter::Upcoming`].
    pub due_next_7_days: f64,
    pub overdue: f64,
}

pub fn bill_totals(bills: &[Bill], today: NaiveDate) -> BillTotals {
    bills
        .iter()
        .filter(|b| !b.paid)
        .fold(BillTotals::default(), |mut totals, bill| {
            totals.to_pay += bill.amount;
            if same_month(bill.due_date, today) {
                totals.due_this_month += bill.amount;
            }
            if BillFilter::Upcoming.matches(bill, today) {
                totals.due_next_7_days += bill.amount;
            }
            if bill.is_overdue(today) {
                totals.overdue += bill.amount;
            }
            totals
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bill(id: &str, due: NaiveDate, amount: f64, paid: bool) -> Bill {
        Bill {
            id: id.to_string(),
            name: id.to_string(),
            category: "outros".to_string(),
            amount,
            due_date: due,
            recurring: false,
            frequency: Frequency::Once,
            payment_method: None,
            notes: None,
            paid,
            created_at: Utc::now(),
        }
    }

    fn sample() -> Vec<Bill> {
        vec![
            bill("late", date(2025, 3, 5), 100.0, false),
            bill("in_week", date(2025, 3, 17), 200.0, false),
            bill("today", date(2025, 3, 10), 50.0, false),
            bill("paid", date(2025, 3, 12), 80.0, true),
            bill("next_month", date(2025, 4, 2), 300.0, false),
            bill("week_edge", date(2025, 3, 18), 10.0, false),
        ]
    }

    fn ids(bills: &[Bill]) -> Vec<&str> {
        bills.iter().map(|b| b.id.as_str()).collect()
    }

    /// **Test: Upcoming covers today through today + 7, unpaid only, sorted by due date**
    #[test]
    fn test_upcoming_filter() {
        let today = date(2025, 3, 10);
        let upcoming = filter_bills(&sample(), BillFilter::Upcoming, today);
        assert_eq!(ids(&upcoming), vec!["today", "in_week"]);
    }

    #[test]
    fn test_this_month_includes_paid() {
        let today = date(2025, 3, 10);
        let month = filter_bills(&sample(), BillFilter::ThisMonth, today);
        assert_eq!(
            ids(&month),
            vec!["late", "today", "paid", "in_week", "week_edge"]
        );
    }

    #[test]
    fn test_overdue_and_all() {
        let today = date(2025, 3, 10);
        assert_eq!(ids(&filter_bills(&sample(), BillFilter::Overdue, today)), vec!["late"]);
        let all = filter_bills(&sample(), BillFilter::All, today);
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].id, "late");
        assert_eq!(all[5].id, "next_month");
    }

    #[test]
    fn test_totals() {
        let totals = bill_totals(&sample(), date(2025, 3, 10));
        assert_eq!(totals.to_pay, 660.0);
        assert_eq!(totals.due_this_month, 360.0);
        // Due today and in a week; the bill eight days out is excluded.
        assert_eq!(totals.due_next_7_days, 250.0);
        assert_eq!(totals.overdue, 100.0);
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("this-month".parse::<BillFilter>().unwrap(), BillFilter::ThisMonth);
        assert_eq!("ALL".parse::<BillFilter>().unwrap(), BillFilter::All);
        assert!("soon".parse::<BillFilter>().is_err());
    }
}
