use crate::models::ledger::PortfolioLedger;
use crate::store::record_store::RecordStore;

/// Joins ledger holdings against the predicted-return table to compute the
/// single blended expected return.
pub struct ProjectionEngine;

impl ProjectionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Blended return in percentage units (5.0 means 5%).
    ///
    /// Each holding with a matching return record contributes
    /// `weight/100 × predicted_return_pct`; holdings without a match are
    /// silently skipped (contribute 0). There is no normalization by the
    /// total weight: if the weights sum to 90, the projection is
    /// proportionally understated, mirroring the allocation warning state.
    #[must_use]
    pub fn project(&self, ledger: &PortfolioLedger, store: &RecordStore) -> f64 {
        let mut total = 0.0;

        for holding in &ledger.holdings {
            if let Some(record) = store.return_record_for(&holding.history.code) {
                total += f64::from(holding.weight) / 100.0 * record.predicted_return_pct;
            }
        }

        total
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new()
    }
}
