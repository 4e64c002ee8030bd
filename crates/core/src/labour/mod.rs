//! Labour roster: worker validation, attendance, and payroll aggregates.

pub mod service;
pub mod types;


pub use service::LabourService;
pub use types::{Attendance, NewWorker, PayrollTotals};
