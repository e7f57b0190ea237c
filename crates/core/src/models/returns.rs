use serde::{Deserialize, Serialize};

/// One row of the predicted-return table.
///
/// One row per company is expected. If the table carries duplicates the
/// first match wins on lookup (accepted ambiguity, not an error).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnRecord {
    /// Registry identifier, matches `CompanyRecord::company_code`
    pub company_code: String,

    /// Predicted next-period return in percentage units (3.5 means 3.5%)
    pub predicted_return_pct: f64,
}

impl ReturnRecord {
    pub fn new(company_code: impl Into<String>, predicted_return_pct: f64) -> Self {
        Self {
            company_code: company_code.into(),
            predicted_return_pct,
        }
    }
}
