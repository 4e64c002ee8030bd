//! Budget data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Budget totals derived at read time. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Authoritative budget, 0 when none was set.
    pub total_budget: Decimal,
    /// Sum of all expenses.
    pub total_expenses: Decimal,
    /// `total_budget - total_expenses`. Negative when overspent.
    pub remaining_budget: Decimal,
    /// Expenses as a percentage of the budget, two decimal places.
    pub utilization_percent: Decimal,
}

impl Default for BudgetSummary {
    fn default() -> Self {
        Self {
            total_budget: Decimal::ZERO,
            total_expenses: Decimal::ZERO,
            remaining_budget: Decimal::ZERO,
            utilization_percent: Decimal::ZERO,
        }
    }
}

impl BudgetSummary {
    /// Returns true when recorded expenses exceed the budget.
    #[must_use]
    pub fn is_overspent(&self) -> bool {
        self.remaining_budget < Decimal::ZERO
    }
}
