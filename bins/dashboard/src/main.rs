//! Terminal dashboard for a Nirmaan server.
//!
//! Every command performs its change (if any), refreshes the stores and
//! prints the full dashboard, errors first.

mod cli;

use anyhow::bail;
use nirmaan_client::{
    ApiClient, Dashboard,
    form::{ExpenseForm, PayEditor, WorkerForm},
    view,
};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::init();
    let client = ApiClient::new(&cli.api_url)?;
    let mut dashboard = Dashboard::new(client);
    dashboard.load().await;

    let applied = match cli.command {
        Command::Show => true,
        Command::SetBudget { amount } => dashboard.budget.update_budget(amount).await,
        Command::AddWorker { name, daily_wage } => {
            let mut form = WorkerForm {
                visible: true,
                name,
                daily_wage,
            };
            if form.values().is_none() {
                bail!("Name and a numeric daily wage are required");
            }
            form.submit(&mut dashboard.labour).await
        }
        Command::ToggleAttendance { id } => dashboard.labour.toggle_attendance(id).await,
        Command::SetPay { id, total_pay } => {
            let current = dashboard
                .labour
                .get(id)
                .map(|row| row.total_pay)
                .unwrap_or_default();
            let mut editor = PayEditor::default();
            editor.begin(id, current);
            editor.value = total_pay;
            editor.submit(&mut dashboard.labour).await
        }
        Command::RemoveWorker { id } => dashboard.labour.remove_worker(id).await,
        Command::AddExpense {
            category,
            amount,
            date,
        } => {
            let mut form = ExpenseForm {
                visible: true,
                category,
                amount,
                ..ExpenseForm::default()
            };
            if let Some(date) = date {
                form.date = date;
            }
            if form.values().is_none() {
                bail!("Category, a numeric amount and a YYYY-MM-DD date are required");
            }
            form.submit(&mut dashboard).await
        }
        Command::RemoveExpense { id } => dashboard.remove_expense(id).await,
    };

    print!("{}", view::render_dashboard(&dashboard));

    if !applied {
        std::process::exit(1);
    }
    Ok(())
}
