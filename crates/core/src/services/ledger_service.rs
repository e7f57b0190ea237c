use crate::models::company::CompanyHistory;
use crate::models::ledger::{Holding, PortfolioLedger, MAX_HOLDINGS};

/// Owns the ledger mutations: add, remove, and weight edits.
///
/// Pure business logic, no I/O. Mutations degrade silently to no-ops
/// instead of erroring; the only advisory state is the allocation total
/// drifting away from 100, which the ledger itself surfaces.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Append a new holding and re-balance all weights.
    ///
    /// Silent no-op when the ledger is full or already contains the
    /// company. Otherwise every weight is reset to `floor(100 / N)` and
    /// the division remainder goes entirely to the last holding, so the
    /// total is exactly 100 after every add. This overwrites any manual
    /// weight edits made before the add.
    pub fn add(&self, ledger: &mut PortfolioLedger, history: CompanyHistory) {
        if ledger.len() >= MAX_HOLDINGS || ledger.contains(&history.code) {
            tracing::debug!(code = %history.code, "add ignored: ledger full or duplicate");
            return;
        }

        ledger.holdings.push(Holding { history, weight: 0 });
        Self::rebalance(ledger);

        // Add already refuses a sixth entry; the trim is a backstop.
        ledger.holdings.truncate(MAX_HOLDINGS);
    }

    /// Remove the holding at `index`.
    ///
    /// The remaining holdings keep their weights, so the total generally
    /// no longer sums to 100; downstream consumers recompute against the
    /// reduced set. Out-of-range index is a silent no-op.
    pub fn remove(&self, ledger: &mut PortfolioLedger, index: usize) {
        if index >= ledger.len() {
            return;
        }
        let removed = ledger.holdings.remove(index);
        tracing::debug!(code = %removed.history.code, "holding removed");
    }

    /// Overwrite one holding's weight from raw user input.
    ///
    /// The raw value is read as a leading integer (the way a numeric form
    /// field delivers it); parse failure means 0, never an error. The
    /// result is clamped into 0..=100. Other weights are untouched, so
    /// the total may drift from 100; that is the advisory warning state,
    /// not something to correct here. Out-of-range index is a no-op.
    pub fn set_weight(&self, ledger: &mut PortfolioLedger, index: usize, raw: &str) {
        let Some(holding) = ledger.holdings.get_mut(index) else {
            return;
        };
        holding.weight = parse_weight(raw);
    }

    /// Spread 100 percent evenly: `floor(100 / N)` each, remainder to the
    /// last holding.
    fn rebalance(ledger: &mut PortfolioLedger) {
        let count = ledger.len();
        if count == 0 {
            return;
        }

        let base = (100 / count) as u8;
        for holding in &mut ledger.holdings {
            holding.weight = base;
        }

        let remainder = (100 - usize::from(base) * count) as u8;
        if let Some(last) = ledger.holdings.last_mut() {
            last.weight += remainder;
        }
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}

/// Leading-integer parse of a weight field: optional sign, then digits.
/// Anything unparsable is 0; the result is clamped into 0..=100.
fn parse_weight(raw: &str) -> u8 {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let prefix: String = digits.chars().take_while(char::is_ascii_digit).collect();
    let magnitude = prefix.parse::<i64>().unwrap_or(0);
    let value = if negative { -magnitude } else { magnitude };

    value.clamp(0, 100) as u8
}
