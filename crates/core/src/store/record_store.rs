use crate::models::company::{CompanyHistory, CompanyRecord};
use crate::models::returns::ReturnRecord;

/// Holds the two independently loaded tables: identity/rating rows (many
/// per company, one per reporting period) and predicted-return rows (one
/// per company).
///
/// Populated once at startup and never mutated afterwards. Everything
/// downstream (search, projection, series) reads from here.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    identity: Vec<CompanyRecord>,
    returns: Vec<ReturnRecord>,
}

impl RecordStore {
    pub fn new(identity: Vec<CompanyRecord>, returns: Vec<ReturnRecord>) -> Self {
        Self { identity, returns }
    }

    /// All identity-table rows in insertion order.
    #[must_use]
    pub fn identity_records(&self) -> &[CompanyRecord] {
        &self.identity
    }

    /// Number of identity rows loaded.
    #[must_use]
    pub fn identity_len(&self) -> usize {
        self.identity.len()
    }

    /// Number of return rows loaded.
    #[must_use]
    pub fn returns_len(&self) -> usize {
        self.returns.len()
    }

    /// Look up the predicted-return row for a company.
    ///
    /// One row per company is expected; if the table carries duplicates,
    /// the first match wins (accepted ambiguity, not an error).
    #[must_use]
    pub fn return_record_for(&self, company_code: &str) -> Option<&ReturnRecord> {
        self.returns.iter().find(|r| r.company_code == company_code)
    }

    /// Build the full rating history for one company: every identity row
    /// sharing `company_code`, in insertion order. Returns `None` when the
    /// code does not appear in the table.
    #[must_use]
    pub fn history_for(&self, company_code: &str) -> Option<CompanyHistory> {
        let records: Vec<CompanyRecord> = self
            .identity
            .iter()
            .filter(|r| r.company_code == company_code)
            .cloned()
            .collect();

        let (code, name) = {
            let first = records.first()?;
            (first.company_code.clone(), first.short_name.clone())
        };
        Some(CompanyHistory::new(code, name, records))
    }
}
