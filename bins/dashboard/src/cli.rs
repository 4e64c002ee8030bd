use clap::{Parser, Subcommand};
use nirmaan_shared::types::{ExpenseId, LabourId};
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[clap(name = "nirmaan-dashboard", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Base URL of the Nirmaan server.
    #[clap(long, env = "NIRMAAN_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    #[clap(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn init() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the dashboard.
    #[clap(name = "show")]
    Show,

    /// Set the project budget.
    #[clap(name = "set-budget")]
    SetBudget { amount: Decimal },

    /// Add a worker, present and with nothing owed.
    #[clap(name = "add-worker")]
    AddWorker { name: String, daily_wage: String },

    /// Flip a worker between present and absent.
    #[clap(name = "toggle-attendance")]
    ToggleAttendance { id: LabourId },

    /// Overwrite a worker's total pay.
    #[clap(name = "set-pay")]
    SetPay { id: LabourId, total_pay: String },

    /// Remove a worker.
    #[clap(name = "remove-worker")]
    RemoveWorker { id: LabourId },

    /// Record an expense. The date defaults to today.
    #[clap(name = "add-expense")]
    AddExpense {
        category: String,
        amount: String,
        #[clap(long)]
        date: Option<String>,
    },

    /// Delete an expense.
    #[clap(name = "remove-expense")]
    RemoveExpense { id: ExpenseId },
}
