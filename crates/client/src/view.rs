//! Plain-text renderers.
//!
//! Everything shown is derived from store state at render time.

use nirmaan_core::{
    budget::BudgetService,
    expense::ExpenseService,
    labour::{Attendance, LabourService},
};
use nirmaan_shared::types::{BudgetSummaryResponse, ExpenseRow, LabourRow};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::store::Dashboard;

/// Cells in the utilization bar.
pub const BAR_CELLS: u32 = 20;

/// Formats an amount as rupees with comma thousands grouping.
///
/// At most two fractional digits are shown and trailing zeros are dropped.
#[must_use]
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).normalize();
    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{sign}₹{grouped}.{fraction}"),
        None => format!("{sign}₹{grouped}"),
    }
}

/// Renders a utilization percentage as a bar of `BAR_CELLS` cells, clamped to 0-100%.
#[must_use]
pub fn progress_bar(percent: Decimal) -> String {
    let clamped = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let filled = (clamped * Decimal::from(BAR_CELLS) / Decimal::ONE_HUNDRED)
        .round()
        .to_u32()
        .unwrap_or(0)
        .min(BAR_CELLS);

    let mut bar = String::from("[");
    for cell in 0..BAR_CELLS {
        bar.push(if cell < filled { '█' } else { '░' });
    }
    bar.push(']');
    bar
}

/// Joins rendered lines, each terminated by a newline.
fn block(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Budget panel: totals, utilization with one decimal, and the bar.
#[must_use]
pub fn budget_panel(summary: &BudgetSummaryResponse) -> String {
    let utilization =
        BudgetService::utilization_percent(summary.total_budget, summary.total_expenses);
    let remaining = summary.total_budget - summary.total_expenses;

    block(&[
        "Project Budget / परियोजना बजट".to_string(),
        format!("  Total Budget:    {}", format_inr(summary.total_budget)),
        format!("  Total Expenses:  {}", format_inr(summary.total_expenses)),
        format!("  Remaining:       {}", format_inr(remaining)),
        format!(
            "  Utilization:     {} {:.1}%",
            progress_bar(utilization),
            utilization.round_dp(1)
        ),
    ])
}

/// Labour table with the total-pay footer.
#[must_use]
pub fn labour_table(rows: &[LabourRow]) -> String {
    let mut lines = vec![
        "Labour Management / मजदूर प्रबंधन".to_string(),
        format!(
            "  {:<6} {:<20} {:>12} {:^10} {:>14}",
            "ID", "Name", "Daily Wage", "Attendance", "Total Pay"
        ),
    ];

    if rows.is_empty() {
        lines.push("  No workers added yet".to_string());
    }

    lines.extend(rows.iter().map(|row| {
        format!(
            "  {:<6} {:<20} {:>12} {:^10} {:>14}",
            row.id,
            row.name,
            format_inr(row.daily_wage),
            Attendance::from_flag(row.is_present).label(),
            format_inr(row.total_pay)
        )
    }));

    let totals = LabourService::payroll_totals(rows);
    lines.push(format!(
        "  Total Pay: {}   Present: {}/{}",
        format_inr(totals.total_pay),
        totals.present_count,
        totals.headcount
    ));
    block(&lines)
}

/// Expense list with the total footer.
#[must_use]
pub fn expense_panel(rows: &[ExpenseRow]) -> String {
    let mut lines = vec!["Expenses / खर्च".to_string()];

    if rows.is_empty() {
        lines.push("  No expenses recorded yet".to_string());
    }

    lines.extend(rows.iter().map(|row| {
        format!(
            "  {:<6} {:<24} {:<12} {:>14}",
            row.id,
            row.category,
            row.expense_date.format("%Y-%m-%d"),
            format_inr(row.amount)
        )
    }));

    lines.push(format!(
        "  Total Expenses: {}",
        format_inr(ExpenseService::total(rows))
    ));
    block(&lines)
}

/// Banner listing every store error, or `None` when all is well.
#[must_use]
pub fn error_banner<'a>(errors: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let lines: Vec<String> = errors.into_iter().map(|e| format!("! {e}")).collect();
    if lines.is_empty() {
        return None;
    }
    Some(lines.join("\n") + "\n")
}

/// Full dashboard: error banner first, then the three panels.
#[must_use]
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();

    if let Some(banner) = error_banner(dashboard.errors()) {
        out.push_str(&banner);
        out.push('\n');
    }

    if dashboard.is_loading() {
        out.push_str("Loading...\n");
        return out;
    }

    out.push_str(&budget_panel(dashboard.budget.summary()));
    out.push('\n');
    out.push_str(&labour_table(dashboard.labour.rows()));
    out.push('\n');
    out.push_str(&expense_panel(dashboard.expenses.rows()));
    out
}
