use serde::{Deserialize, Serialize};

use super::company::CompanyHistory;

/// Hard cap on the number of holdings in a ledger.
pub const MAX_HOLDINGS: usize = 5;

/// A selected company paired with its allocation weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// The selected company and its full rating history
    pub history: CompanyHistory,

    /// Allocation weight as an integer percentage, 0 to 100
    pub weight: u8,
}

/// The ordered set of current holdings.
///
/// Length is 0 to [`MAX_HOLDINGS`] and no two holdings share a company code.
/// Weights are auto-balanced on add but left alone on manual edits and
/// removals, so the total can legitimately drift away from 100. That state
/// is surfaced through [`total_allocation`](Self::total_allocation) and
/// [`is_balanced`](Self::is_balanced) as an advisory display, not corrected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioLedger {
    /// Current holdings in selection order
    pub holdings: Vec<Holding>,
}

impl PortfolioLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of holdings currently selected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Whether a company is already part of the ledger.
    #[must_use]
    pub fn contains(&self, company_code: &str) -> bool {
        self.holdings.iter().any(|h| h.history.code == company_code)
    }

    /// Sum of all allocation weights in percent.
    #[must_use]
    pub fn total_allocation(&self) -> u32 {
        self.holdings.iter().map(|h| u32::from(h.weight)).sum()
    }

    /// `true` when the weights sum to exactly 100.
    ///
    /// An empty ledger reports balanced; there is nothing to warn about yet.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.is_empty() || self.total_allocation() == 100
    }
}
