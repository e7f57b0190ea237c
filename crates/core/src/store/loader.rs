use crate::models::company::CompanyRecord;
use crate::models::returns::ReturnRecord;
use crate::models::schema::TableSchema;

/// Parses the two delimited text tables into typed records.
///
/// All column-name lookups happen here, once per load; the core only ever
/// sees named fields. Malformed rows are skipped individually, an
/// unparsable score becomes a missing value, and no whole-load failure
/// exists for bad data.
pub struct TableLoader;

impl TableLoader {
    /// Parse the identity/rating table (header row expected).
    ///
    /// Rows without a company code are dropped. An absent or unparsable
    /// score field yields `score: None` rather than dropping the row,
    /// since the identity columns are still useful for search.
    #[must_use]
    pub fn parse_identity_table(text: &str, schema: &TableSchema) -> Vec<CompanyRecord> {
        let mut reader = csv::Reader::from_reader(text.as_bytes());

        let headers = match reader.headers() {
            Ok(h) => h.clone(),
            Err(err) => {
                tracing::warn!(error = %err, "identity table has no readable header row");
                return Vec::new();
            }
        };

        let code_idx = headers.iter().position(|h| h == schema.code_column);
        let name_idx = headers.iter().position(|h| h == schema.name_column);
        let period_idx = headers.iter().position(|h| h == schema.period_column);
        let score_idx = headers.iter().position(|h| h == schema.score_column);

        let (Some(code_idx), Some(name_idx), Some(period_idx)) = (code_idx, name_idx, period_idx)
        else {
            tracing::warn!(
                code = %schema.code_column,
                name = %schema.name_column,
                period = %schema.period_column,
                "identity table is missing expected columns"
            );
            return Vec::new();
        };

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for row in reader.records() {
            let row = match row {
                Ok(r) => r,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };

            let code = row.get(code_idx).unwrap_or("").trim();
            if code.is_empty() {
                skipped += 1;
                continue;
            }

            let short_name = row.get(name_idx).unwrap_or("").trim();
            let period = row.get(period_idx).unwrap_or("").trim();
            let score = score_idx
                .and_then(|idx| row.get(idx))
                .and_then(parse_number);

            records.push(CompanyRecord::new(code, short_name, period, score));
        }

        if skipped > 0 {
            tracing::warn!(skipped, "dropped malformed identity rows");
        }
        tracing::debug!(rows = records.len(), "identity table loaded");
        records
    }

    /// Parse the predicted-return table (header row expected).
    ///
    /// A row with an unparsable return percentage is dropped, which reads
    /// downstream as a lookup miss: the holding contributes zero.
    #[must_use]
    pub fn parse_returns_table(text: &str, schema: &TableSchema) -> Vec<ReturnRecord> {
        let mut reader = csv::Reader::from_reader(text.as_bytes());

        let headers = match reader.headers() {
            Ok(h) => h.clone(),
            Err(err) => {
                tracing::warn!(error = %err, "return table has no readable header row");
                return Vec::new();
            }
        };

        let code_idx = headers.iter().position(|h| h == schema.returns_code_column);
        let pct_idx = headers.iter().position(|h| h == schema.returns_pct_column);

        let (Some(code_idx), Some(pct_idx)) = (code_idx, pct_idx) else {
            tracing::warn!(
                code = %schema.returns_code_column,
                pct = %schema.returns_pct_column,
                "return table is missing expected columns"
            );
            return Vec::new();
        };

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for row in reader.records() {
            let row = match row {
                Ok(r) => r,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };

            let code = row.get(code_idx).unwrap_or("").trim();
            let pct = row.get(pct_idx).and_then(parse_number);

            match (code.is_empty(), pct) {
                (false, Some(pct)) => records.push(ReturnRecord::new(code, pct)),
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, "dropped malformed return rows");
        }
        tracing::debug!(rows = records.len(), "return table loaded");
        records
    }
}

/// Lenient numeric parse: trims whitespace, rejects non-finite values.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
