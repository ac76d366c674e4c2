//! Plain-text tables for command output.

use chrono::NaiveDate;
use finance::{
    format_br_date, format_brl, Bill, BillTotals, DashboardSummary, Goal, NetWorth,
    PatrimonyItem, Profile, Transaction,
};

const RULE_WIDTH: usize = 96;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Truncates to `max` chars, marking the cut with `…`.
fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

pub fn transactions(items: &[Transaction]) -> String {
    if items.is_empty() {
        return "No transactions.".to_string();
    }
    let mut out = format!(
        "{:<36} {:<10} {:<16} {:<20} {:>14}\n{}\n",
        "id",
        "date",
        "category",
        "description",
        "amount",
        rule()
    );
    for t in items {
        out.push_str(&format!(
            "{:<36} {:<10} {:<16} {:<20} {:>14}\n",
            t.id,
            format_br_date(t.date),
            clip(&t.category, 16),
            clip(&t.description, 20),
            format_brl(t.amount)
        ));
    }
    let total: f64 = items.iter().map(|t| t.amount).sum();
    out.push_str(&format!("Total: {}", format_brl(total)));
    out
}

pub fn goals(items: &[Goal]) -> String {
    if items.is_empty() {
        return "No goals.".to_string();
    }
    let mut out = format!(
        "{:<36} {:<20} {:>14} {:>14} {:>7} {:<10}\n{}\n",
        "id",
        "title",
        "saved",
        "target",
        "%",
        "by",
        rule()
    );
    for g in items {
        out.push_str(&format!(
            "{:<36} {:<20} {:>14} {:>14} {:>6.1}% {:<10}\n",
            g.id,
            clip(&g.title, 20),
            format_brl(g.saved_amount),
            format_brl(g.target_amount),
            g.progress(),
            g.target_date.map(format_br_date).unwrap_or_else(|| "-".to_string())
        ));
    }
    out.trim_end().to_string()
}

pub fn goal(goal: &Goal) -> String {
    format!(
        "{}: {} of {} ({:.1}%), {} to go",
        goal.title,
        format_brl(goal.saved_amount),
        format_brl(goal.target_amount),
        goal.progress(),
        format_brl(goal.remaining())
    )
}

pub fn bills(items: &[Bill], totals: &BillTotals, today: NaiveDate) -> String {
    let mut out = String::new();
    if items.is_empty() {
        out.push_str("No bills.\n");
    } else {
        out.push_str(&format!(
            "{:<36} {:<20} {:<10} {:>14} {:<8} {:<10}\n{}\n",
            "id",
            "name",
            "due",
            "amount",
            "status",
            "frequency",
            rule()
        ));
        for b in items {
            out.push_str(&format!(
                "{:<36} {:<20} {:<10} {:>14} {:<8} {:<10}\n",
                b.id,
                clip(&b.name, 20),
                format_br_date(b.due_date),
                format_brl(b.amount),
                b.status(today).to_string(),
                b.frequency.to_string()
            ));
        }
    }
    out.push_str(&format!(
        "To pay: {} | Due this month: {} | Next 7 days: {} | Overdue: {}",
        format_brl(totals.to_pay),
        format_brl(totals.due_this_month),
        format_brl(totals.due_next_7_days),
        format_brl(totals.overdue)
    ));
    out
}

pub fn patrimony(items: &[PatrimonyItem]) -> String {
    if items.is_empty() {
        return "No items.".to_string();
    }
    let mut out = format!(
        "{:<36} {:<10} {:<16} {:<20} {:>16}\n{}\n",
        "id",
        "kind",
        "category",
        "description",
        "amount",
        rule()
    );
    for i in items {
        out.push_str(&format!(
            "{:<36} {:<10} {:<16} {:<20} {:>16}\n",
            i.id,
            i.kind.label(),
            clip(&i.category, 16),
            clip(&i.description, 20),
            format_brl(i.amount)
        ));
    }
    out.trim_end().to_string()
}

pub fn net_worth(nw: &NetWorth) -> String {
    format!(
        "Assets: {} | Liabilities: {} | Net worth: {}",
        format_brl(nw.assets),
        format_brl(nw.liabilities),
        format_brl(nw.net)
    )
}

pub fn profile(profile: &Profile) -> String {
    let name = if profile.name.is_empty() {
        "-"
    } else {
        profile.name.as_str()
    };
    format!(
        "Name: {}\nEmail: {}\nMonthly net income: {}",
        name,
        profile.email.as_deref().unwrap_or("-"),
        format_brl(profile.monthly_net_income)
    )
}

pub fn summary(s: &DashboardSummary) -> String {
    let mut out = format!(
        "Summary as of {}\n{}\nIncome:   {:>16}\nExpenses: {:>16}\nBalance:  {:>16}\n",
        format_br_date(s.as_of),
        rule(),
        format_brl(s.total_income),
        format_brl(s.total_expenses),
        format_brl(s.balance)
    );

    if !s.expenses_by_category.is_empty() {
        out.push_str("\nExpenses by category:\n");
        for c in &s.expenses_by_category {
            out.push_str(&format!("  {:<20} {:>16}\n", clip(&c.category, 20), format_brl(c.amount)));
        }
    }
    if !s.income_by_category.is_empty() {
        out.push_str("\nIncome by category:\n");
        for c in &s.income_by_category {
            out.push_str(&format!("  {:<20} {:>16}\n", clip(&c.category, 20), format_brl(c.amount)));
        }
    }
    if !s.pending_bills.is_empty() {
        out.push_str("\nNext bills:\n");
        for b in &s.pending_bills {
            out.push_str(&format!(
                "  {:<20} {:<10} {:>16}\n",
                clip(&b.name, 20),
                format_br_date(b.due_date),
                format_brl(b.amount)
            ));
        }
    }
    if !s.goals.is_empty() {
        out.push_str("\nGoals:\n");
        for g in &s.goals {
            out.push_str(&format!(
                "  {:<20} {:>16} / {:<16} {:>6.1}%\n",
                clip(&g.title, 20),
                format_brl(g.saved),
                format_brl(g.target),
                g.percentage
            ));
        }
    }
    out.push('\n');
    out.push_str(&net_worth(&s.net_worth));
    out
}
