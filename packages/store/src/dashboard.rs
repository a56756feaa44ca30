//! # Dashboard summary data
//!
//! The dashboard is read-only. Until a summary endpoint exists it renders
//! [`DashboardSnapshot::placeholder`]; the shape here is what such an endpoint
//! would have to supply.
//!
//! Money is held in integer cents and only formatted for display.

use crate::i18n::Text;

/// Income and expenses for one month of the bar chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthlyFlow {
    pub month: &'static str,
    pub income: u32,
    pub expenses: u32,
}

/// One labelled amount in a dashboard list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerLine {
    pub label: Text,
    pub amount_cents: i64,
}

/// Export formats offered by the dashboard menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Pdf,
    Excel,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Pdf, ExportFormat::Excel];

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Excel => "Excel",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSnapshot {
    pub total_balance_cents: i64,
    /// Percent change of the balance since last month.
    pub balance_change: f64,
    pub monthly_expenses_cents: i64,
    pub expenses_change: f64,
    /// 0..=100
    pub budget_progress: u8,
    pub monthly_flows: Vec<MonthlyFlow>,
    /// Signed: negative amounts are money out.
    pub recent_transactions: Vec<LedgerLine>,
    pub top_categories: Vec<LedgerLine>,
}

impl DashboardSnapshot {
    /// Hardcoded figures shown until the backend supplies real ones.
    pub fn placeholder() -> Self {
        Self {
            total_balance_cents: 1_234_567,
            balance_change: 20.1,
            monthly_expenses_cents: 345_678,
            expenses_change: -5.2,
            budget_progress: 66,
            monthly_flows: vec![
                MonthlyFlow { month: "Jan", expenses: 4000, income: 2400 },
                MonthlyFlow { month: "Feb", expenses: 3000, income: 1398 },
                MonthlyFlow { month: "Mar", expenses: 2000, income: 9800 },
                MonthlyFlow { month: "Apr", expenses: 2780, income: 3908 },
                MonthlyFlow { month: "May", expenses: 1890, income: 4800 },
                MonthlyFlow { month: "Jun", expenses: 2390, income: 3800 },
            ],
            recent_transactions: vec![
                LedgerLine { label: Text::GroceryShopping, amount_cents: -8_520 },
                LedgerLine { label: Text::SalaryDeposit, amount_cents: 300_000 },
                LedgerLine { label: Text::ElectricBill, amount_cents: -12_050 },
            ],
            top_categories: vec![
                LedgerLine { label: Text::FoodAndDining, amount_cents: 45_030 },
                LedgerLine { label: Text::Transportation, amount_cents: 28_000 },
                LedgerLine { label: Text::Entertainment, amount_cents: 18_575 },
            ],
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1234567` → `"$12,345.67"`. Negative amounts get a leading minus.
pub fn format_money(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", group_thousands(abs / 100), abs % 100)
}

/// Like [`format_money`] but always signed: `"+$3,000.00"`, `"-$85.20"`.
pub fn format_signed_money(cents: i64) -> String {
    if cents < 0 {
        format_money(cents)
    } else {
        format!("+{}", format_money(cents))
    }
}

/// `20.1` → `"+20.1%"`, `-5.2` → `"-5.2%"`.
pub fn format_change(percent: f64) -> String {
    format!("{percent:+.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1_234_567), "$12,345.67");
        assert_eq!(format_money(345_678), "$3,456.78");
        assert_eq!(format_money(0), "$0.00");
        assert_eq!(format_money(5), "$0.05");
        assert_eq!(format_money(-8_520), "-$85.20");
        assert_eq!(format_money(100_000_000), "$1,000,000.00");
    }

    #[test]
    fn test_format_signed_money() {
        assert_eq!(format_signed_money(300_000), "+$3,000.00");
        assert_eq!(format_signed_money(-12_050), "-$120.50");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(20.1), "+20.1%");
        assert_eq!(format_change(-5.2), "-5.2%");
    }

    #[test]
    fn test_placeholder_shape() {
        let snapshot = DashboardSnapshot::placeholder();
        assert_eq!(snapshot.monthly_flows.len(), 6);
        assert_eq!(snapshot.recent_transactions.len(), 3);
        assert_eq!(snapshot.top_categories.len(), 3);
        assert!(snapshot.budget_progress <= 100);
    }
}
