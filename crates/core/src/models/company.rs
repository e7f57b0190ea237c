use serde::{Deserialize, Serialize};

/// One row of the identity/rating table.
///
/// A company appears once per reporting period, so many `CompanyRecord`s
/// share a `company_code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Stable registry identifier (e.g., "2330")
    pub company_code: String,

    /// Display label for the company
    pub short_name: String,

    /// Reporting period label (e.g., "2023Q4"). Period labels must sort
    /// lexically in chronological order; the chart axis relies on it.
    pub period: String,

    /// Rating score for this period. `None` when the field was absent or
    /// unparsable in the source table.
    pub score: Option<f64>,
}

impl CompanyRecord {
    pub fn new(
        company_code: impl Into<String>,
        short_name: impl Into<String>,
        period: impl Into<String>,
        score: Option<f64>,
    ) -> Self {
        Self {
            company_code: company_code.into(),
            short_name: short_name.into(),
            period: period.into(),
            score,
        }
    }
}

/// The full rating history of one company: every identity-table row sharing
/// one `company_code`, in table insertion order.
///
/// Immutable once derived from the record store: a selected holding keeps
/// the history it was built with for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyHistory {
    /// The shared company code
    pub code: String,

    /// Short name taken from the first record
    pub name: String,

    /// All periods for this company, in insertion order
    pub records: Vec<CompanyRecord>,
}

impl CompanyHistory {
    pub fn new(code: impl Into<String>, name: impl Into<String>, records: Vec<CompanyRecord>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            records,
        }
    }

    /// Label used for suggestion lists and chart datasets, e.g. "台積電 (2330)".
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}
