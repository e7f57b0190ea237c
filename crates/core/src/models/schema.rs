use serde::{Deserialize, Serialize};

/// Names of the table resources and columns the loader reads.
///
/// Exact column names are a configuration concern of the loader, never of
/// the core. The defaults match the TESG registry export this tool was
/// built around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Resource name of the identity/rating table
    pub identity_resource: String,

    /// Resource name of the predicted-return table
    pub returns_resource: String,

    /// Identity table: company code column
    pub code_column: String,

    /// Identity table: short name column
    pub name_column: String,

    /// Identity table: reporting period column
    pub period_column: String,

    /// Identity table: rating score column
    pub score_column: String,

    /// Return table: company identifier column
    pub returns_code_column: String,

    /// Return table: predicted-return percentage column
    pub returns_pct_column: String,
}

impl Default for TableSchema {
    fn default() -> Self {
        Self {
            identity_resource: "esg_score.csv".to_string(),
            returns_resource: "predicted_returns_converted.csv".to_string(),
            code_column: "公司代碼".to_string(),
            name_column: "簡稱".to_string(),
            period_column: "TESG評等季度".to_string(),
            score_column: "TESG分數".to_string(),
            returns_code_column: "Company".to_string(),
            returns_pct_column: "Predicted_Next_Return_Pct".to_string(),
        }
    }
}
