//! Resource stores.
//!
//! A store owns the last fetched copy of one resource. Mutations call the API
//! and, once accepted, re-fetch the whole resource; nothing is patched
//! locally. Failures are logged and kept in `last_error` for the banner.

use chrono::NaiveDate;
use nirmaan_shared::types::{BudgetSummaryResponse, ExpenseId, ExpenseRow, LabourId, LabourRow};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::api::{ApiClient, ClientError};

/// Loading flag and last failure shared by every store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStatus {
    /// True until the first fetch finishes.
    pub loading: bool,
    /// Message of the most recent failure, cleared by the next good fetch.
    pub last_error: Option<String>,
}

impl Default for StoreStatus {
    fn default() -> Self {
        Self {
            loading: true,
            last_error: None,
        }
    }
}

impl StoreStatus {
    fn record(&mut self, action: &str, err: &ClientError) {
        warn!(error = %err, action, "Dashboard request failed");
        self.last_error = Some(format!("Error {action}: {err}"));
    }

    fn loaded(&mut self) {
        self.loading = false;
        self.last_error = None;
    }
}

/// Budget summary store.
#[derive(Debug, Clone)]
pub struct BudgetStore {
    client: ApiClient,
    summary: BudgetSummaryResponse,
    status: StoreStatus,
}

impl BudgetStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            summary: BudgetSummaryResponse::default(),
            status: StoreStatus::default(),
        }
    }

    /// Last fetched summary.
    #[must_use]
    pub const fn summary(&self) -> &BudgetSummaryResponse {
        &self.summary
    }

    /// Loading flag and last failure.
    #[must_use]
    pub const fn status(&self) -> &StoreStatus {
        &self.status
    }

    /// Fetches the summary.
    pub async fn load(&mut self) {
        match self.client.budget().await {
            Ok(summary) => {
                self.summary = summary;
                self.status.loaded();
            }
            Err(e) => {
                self.status.record("fetching budget", &e);
                self.status.loading = false;
            }
        }
    }

    /// Sets the project budget. Returns `true` when the server accepted it.
    pub async fn update_budget(&mut self, total_budget: Decimal) -> bool {
        match self.client.update_budget(total_budget).await {
            Ok(()) => {
                info!(total_budget = %total_budget, "Budget saved");
                self.load().await;
                true
            }
            Err(e) => {
                self.status.record("updating budget", &e);
                false
            }
        }
    }
}

/// Labour roster store.
#[derive(Debug, Clone)]
pub struct LabourStore {
    client: ApiClient,
    rows: Vec<LabourRow>,
    status: StoreStatus,
}

impl LabourStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            rows: Vec::new(),
            status: StoreStatus::default(),
        }
    }

    /// Last fetched roster, alphabetical.
    #[must_use]
    pub fn rows(&self) -> &[LabourRow] {
        &self.rows
    }

    /// Looks up a worker in the last fetched roster.
    #[must_use]
    pub fn get(&self, id: LabourId) -> Option<&LabourRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Loading flag and last failure.
    #[must_use]
    pub const fn status(&self) -> &StoreStatus {
        &self.status
    }

    /// Fetches the roster.
    pub async fn load(&mut self) {
        match self.client.labour().await {
            Ok(rows) => {
                self.rows = rows;
                self.status.loaded();
            }
            Err(e) => {
                self.status.record("fetching labour", &e);
                self.status.loading = false;
            }
        }
    }

    async fn after(&mut self, action: &str, result: Result<(), ClientError>) -> bool {
        match result {
            Ok(()) => {
                self.load().await;
                true
            }
            Err(e) => {
                self.status.record(action, &e);
                false
            }
        }
    }

    /// Adds a worker.
    pub async fn add_worker(&mut self, name: &str, daily_wage: Decimal) -> bool {
        let result = self.client.add_worker(name, daily_wage).await.map(|id| {
            info!(labour_id = %id, "Worker added");
        });
        self.after("adding worker", result).await
    }

    /// Overwrites a worker's attendance flag.
    pub async fn set_attendance(&mut self, id: LabourId, is_present: bool) -> bool {
        let result = self.client.set_attendance(id, is_present).await;
        self.after("updating attendance", result).await
    }

    /// Flips attendance based on the last fetched row.
    pub async fn toggle_attendance(&mut self, id: LabourId) -> bool {
        // Unknown ids still go to the server so the failure is reported.
        let next = self.get(id).is_none_or(|row| !row.is_present);
        self.set_attendance(id, next).await
    }

    /// Overwrites a worker's total pay.
    pub async fn set_total_pay(&mut self, id: LabourId, total_pay: Decimal) -> bool {
        let result = self.client.set_total_pay(id, total_pay).await;
        self.after("updating total pay", result).await
    }

    /// Removes a worker.
    pub async fn remove_worker(&mut self, id: LabourId) -> bool {
        let result = self.client.remove_worker(id).await;
        self.after("removing worker", result).await
    }
}

/// Expense list store.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    client: ApiClient,
    rows: Vec<ExpenseRow>,
    status: StoreStatus,
}

impl ExpenseStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            rows: Vec::new(),
            status: StoreStatus::default(),
        }
    }

    /// Last fetched expenses, newest date first.
    #[must_use]
    pub fn rows(&self) -> &[ExpenseRow] {
        &self.rows
    }

    /// Loading flag and last failure.
    #[must_use]
    pub const fn status(&self) -> &StoreStatus {
        &self.status
    }

    /// Fetches the expense list.
    pub async fn load(&mut self) {
        match self.client.expenses().await {
            Ok(rows) => {
                self.rows = rows;
                self.status.loaded();
            }
            Err(e) => {
                self.status.record("fetching expenses", &e);
                self.status.loading = false;
            }
        }
    }

    /// Records an expense.
    pub async fn add_expense(&mut self, category: &str, amount: Decimal, date: NaiveDate) -> bool {
        match self.client.add_expense(category, amount, date).await {
            Ok(id) => {
                info!(expense_id = %id, "Expense added");
                self.load().await;
                true
            }
            Err(e) => {
                self.status.record("adding expense", &e);
                false
            }
        }
    }

    /// Deletes an expense.
    pub async fn remove_expense(&mut self, id: ExpenseId) -> bool {
        match self.client.remove_expense(id).await {
            Ok(()) => {
                self.load().await;
                true
            }
            Err(e) => {
                self.status.record("removing expense", &e);
                false
            }
        }
    }
}

/// All three stores, kept consistent with each other.
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Budget summary.
    pub budget: BudgetStore,
    /// Labour roster.
    pub labour: LabourStore,
    /// Expense list.
    pub expenses: ExpenseStore,
}

impl Dashboard {
    /// Creates the stores over one client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            budget: BudgetStore::new(client.clone()),
            labour: LabourStore::new(client.clone()),
            expenses: ExpenseStore::new(client),
        }
    }

    /// Fetches every resource concurrently.
    pub async fn load(&mut self) {
        tokio::join!(self.budget.load(), self.labour.load(), self.expenses.load());
    }

    /// Records an expense, then refreshes the budget summary it feeds.
    pub async fn add_expense(&mut self, category: &str, amount: Decimal, date: NaiveDate) -> bool {
        let added = self.expenses.add_expense(category, amount, date).await;
        if added {
            self.budget.load().await;
        }
        added
    }

    /// Deletes an expense, then refreshes the budget summary it feeds.
    pub async fn remove_expense(&mut self, id: ExpenseId) -> bool {
        let removed = self.expenses.remove_expense(id).await;
        if removed {
            self.budget.load().await;
        }
        removed
    }

    /// True while any store is still on its first fetch.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.budget.status.loading || self.labour.status.loading || self.expenses.status.loading
    }

    /// Every outstanding store error, in panel order.
    #[must_use]
    pub fn errors(&self) -> Vec<&str> {
        [
            &self.budget.status,
            &self.labour.status,
            &self.expenses.status,
        ]
        .into_iter()
        .filter_map(|status| status.last_error.as_deref())
        .collect()
    }
}
