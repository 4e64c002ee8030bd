//! Labour data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A validated worker ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorker {
    /// Trimmed, non-empty name.
    pub name: String,
    /// Positive daily wage in paise precision.
    pub daily_wage: Decimal,
}

/// Attendance state of a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    /// Present today.
    Present,
    /// Absent today.
    Absent,
}

impl Attendance {
    /// Maps the stored flag.
    #[must_use]
    pub const fn from_flag(is_present: bool) -> Self {
        if is_present { Self::Present } else { Self::Absent }
    }

    /// Returns the stored flag.
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }

    /// The opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Present => Self::Absent,
            Self::Absent => Self::Present,
        }
    }

    /// Single-letter label shown on the attendance toggle.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Present => "P",
            Self::Absent => "A",
        }
    }
}

/// Roster-wide totals shown under the labour table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayrollTotals {
    /// Sum of every worker's total pay.
    pub total_pay: Decimal,
    /// Sum of daily wages of workers marked present.
    pub present_daily_wages: Decimal,
    /// Workers marked present.
    pub present_count: usize,
    /// All workers.
    pub headcount: usize,
}

impl Default for PayrollTotals {
    fn default() -> Self {
        Self {
            total_pay: Decimal::ZERO,
            present_daily_wages: Decimal::ZERO,
            present_count: 0,
            headcount: 0,
        }
    }
}
