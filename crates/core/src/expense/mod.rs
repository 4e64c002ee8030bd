//! Expense validation and totals.

pub mod service;


pub use service::{ExpenseService, NewExpense};
