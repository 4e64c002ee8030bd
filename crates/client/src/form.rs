//! Transient form state.
//!
//! Forms only check that fields are filled in and parse; the server does the
//! sign checks. A form resets after the server accepts it.

use chrono::{Local, NaiveDate};
use nirmaan_shared::types::LabourId;
use rust_decimal::Decimal;

use crate::store::{Dashboard, LabourStore};

fn parse_amount(input: &str) -> Option<Decimal> {
    input.trim().parse().ok()
}

fn filled(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Add-worker form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerForm {
    /// Whether the form is shown.
    pub visible: bool,
    /// Name field.
    pub name: String,
    /// Daily wage field.
    pub daily_wage: String,
}

impl WorkerForm {
    /// Validated field values, if every field is filled in.
    #[must_use]
    pub fn values(&self) -> Option<(&str, Decimal)> {
        Some((filled(&self.name)?, parse_amount(&self.daily_wage)?))
    }

    /// Clears the fields and hides the form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Submits the form. Returns `true` when the worker was added.
    pub async fn submit(&mut self, store: &mut LabourStore) -> bool {
        let Some((name, wage)) = self.values() else {
            return false;
        };
        let name = name.to_string();

        let added = store.add_worker(&name, wage).await;
        if added {
            self.reset();
        }
        added
    }
}

/// Add-expense form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    /// Whether the form is shown.
    pub visible: bool,
    /// Category field.
    pub category: String,
    /// Amount field.
    pub amount: String,
    /// Date field, `YYYY-MM-DD`.
    pub date: String,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self::for_date(Local::now().date_naive())
    }
}

impl ExpenseForm {
    /// Empty form whose date field starts at `date`.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            visible: false,
            category: String::new(),
            amount: String::new(),
            date: date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Validated field values, if every field is filled in.
    #[must_use]
    pub fn values(&self) -> Option<(&str, Decimal, NaiveDate)> {
        let date = NaiveDate::parse_from_str(filled(&self.date)?, "%Y-%m-%d").ok()?;
        Some((filled(&self.category)?, parse_amount(&self.amount)?, date))
    }

    /// Clears the fields and hides the form. The date goes back to today.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Submits through the dashboard so the budget is refreshed too.
    pub async fn submit(&mut self, dashboard: &mut Dashboard) -> bool {
        let Some((category, amount, date)) = self.values() else {
            return false;
        };
        let category = category.to_string();

        let added = dashboard.add_expense(&category, amount, date).await;
        if added {
            self.reset();
        }
        added
    }
}

/// Inline total-pay editor for one roster row at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayEditor {
    /// Row being edited.
    pub editing: Option<LabourId>,
    /// Edit field.
    pub value: String,
}

impl PayEditor {
    /// Starts editing a row, seeded with its current pay.
    pub fn begin(&mut self, id: LabourId, current: Decimal) {
        self.editing = Some(id);
        self.value = current.to_string();
    }

    /// Abandons the edit.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Submits the edit. Returns `true` when the pay was saved.
    pub async fn submit(&mut self, store: &mut LabourStore) -> bool {
        let (Some(id), Some(total_pay)) = (self.editing, parse_amount(&self.value)) else {
            return false;
        };

        let saved = store.set_total_pay(id, total_pay).await;
        if saved {
            self.cancel();
        }
        saved
    }
}
