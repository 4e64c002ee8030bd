//! Budget service for summary calculation and validation.

use rust_decimal::Decimal;

use super::types::BudgetSummary;
use crate::validation::{ValidationError, require_positive};

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Builds the budget summary from the stored budget and the expense sum.
    ///
    /// A missing budget counts as 0.
    #[must_use]
    pub fn summarize(total_budget: Option<Decimal>, total_expenses: Decimal) -> BudgetSummary {
        let total_budget = total_budget.unwrap_or(Decimal::ZERO);

        BudgetSummary {
            total_budget,
            total_expenses,
            remaining_budget: total_budget - total_expenses,
            utilization_percent: Self::utilization_percent(total_budget, total_expenses),
        }
    }

    /// Calculates `expenses / budget * 100`, rounded to two places.
    ///
    /// A zero budget yields 0 rather than a non-finite value.
    #[must_use]
    pub fn utilization_percent(total_budget: Decimal, total_expenses: Decimal) -> Decimal {
        if total_budget.is_zero() {
            return Decimal::ZERO;
        }

        total_expenses
            .checked_div(total_budget)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map_or(Decimal::ZERO, |pct| pct.round_dp(2))
    }

    /// Validates a new total budget.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NotPositive` if the amount is not above zero.
    pub fn validate_total_budget(total_budget: Decimal) -> Result<Decimal, ValidationError> {
        require_positive("totalBudget", total_budget)
    }
}
