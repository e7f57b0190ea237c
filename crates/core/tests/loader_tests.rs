// ═══════════════════════════════════════════════════════════════════
// Loader Tests — TableLoader over delimited text with a header row
// ═══════════════════════════════════════════════════════════════════

use portfolio_composer_core::models::schema::TableSchema;
use portfolio_composer_core::store::loader::TableLoader;

/// English column names, the way an embedder would reconfigure the loader.
fn english_schema() -> TableSchema {
    TableSchema {
        identity_resource: "scores.csv".into(),
        returns_resource: "returns.csv".into(),
        code_column: "code".into(),
        name_column: "name".into(),
        period_column: "period".into(),
        score_column: "score".into(),
        returns_code_column: "code".into(),
        returns_pct_column: "predicted_pct".into(),
    }
}

// ═══════════════════════════════════════════════════════════════════
// Identity table
// ═══════════════════════════════════════════════════════════════════

mod identity {
    use super::*;

    #[test]
    fn parses_rows_in_order() {
        let text = "code,name,period,score\n\
                    2330,TSMC,2023Q1,80.5\n\
                    2330,TSMC,2023Q2,85.0\n\
                    2317,Hon Hai,2023Q1,60.0\n";

        let records = TableLoader::parse_identity_table(text, &english_schema());
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].company_code, "2330");
        assert_eq!(records[0].period, "2023Q1");
        assert_eq!(records[0].score, Some(80.5));
        assert_eq!(records[2].short_name, "Hon Hai");
    }

    #[test]
    fn column_order_does_not_matter() {
        let text = "score,period,code,name\n\
                    80.5,2023Q1,2330,TSMC\n";

        let records = TableLoader::parse_identity_table(text, &english_schema());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].company_code, "2330");
        assert_eq!(records[0].score, Some(80.5));
    }

    #[test]
    fn unparsable_score_becomes_missing() {
        let text = "code,name,period,score\n\
                    2330,TSMC,2023Q1,n/a\n\
                    2330,TSMC,2023Q2,\n\
                    2330,TSMC,2023Q3,90\n";

        let records = TableLoader::parse_identity_table(text, &english_schema());
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].score, None);
        assert_eq!(records[1].score, None);
        assert_eq!(records[2].score, Some(90.0));
    }

    #[test]
    fn rows_without_a_code_are_skipped() {
        let text = "code,name,period,score\n\
                    ,No Code,2023Q1,50\n\
                    2330,TSMC,2023Q1,80\n";

        let records = TableLoader::parse_identity_table(text, &english_schema());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].company_code, "2330");
    }

    #[test]
    fn missing_identity_columns_yield_empty() {
        let text = "foo,bar\n1,2\n";
        let records = TableLoader::parse_identity_table(text, &english_schema());
        assert!(records.is_empty());
    }

    #[test]
    fn quoted_fields_with_commas_parse() {
        let text = "code,name,period,score\n\
                    2330,\"Taiwan Semi, Inc.\",2023Q1,80\n";

        let records = TableLoader::parse_identity_table(text, &english_schema());
        assert_eq!(records[0].short_name, "Taiwan Semi, Inc.");
    }

    #[test]
    fn default_schema_reads_the_registry_export() {
        let text = "公司代碼,簡稱,TESG評等季度,TESG分數\n\
                    2330,台積電,2023Q1,80\n\
                    2317,鴻海,2023Q1,60\n";

        let records = TableLoader::parse_identity_table(text, &TableSchema::default());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].short_name, "台積電");
        assert_eq!(records[1].score, Some(60.0));
    }

    #[test]
    fn empty_input_yields_empty() {
        let records = TableLoader::parse_identity_table("", &english_schema());
        assert!(records.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Return table
// ═══════════════════════════════════════════════════════════════════

mod returns {
    use super::*;

    #[test]
    fn parses_rows() {
        let text = "code,predicted_pct\n\
                    2330,5.0\n\
                    2317,-2.0\n";

        let records = TableLoader::parse_returns_table(text, &english_schema());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].company_code, "2330");
        assert_eq!(records[0].predicted_return_pct, 5.0);
        assert_eq!(records[1].predicted_return_pct, -2.0);
    }

    #[test]
    fn unparsable_percentage_drops_the_row() {
        let text = "code,predicted_pct\n\
                    2330,abc\n\
                    2317,1.25\n";

        let records = TableLoader::parse_returns_table(text, &english_schema());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].company_code, "2317");
    }

    #[test]
    fn blank_code_drops_the_row() {
        let text = "code,predicted_pct\n\
                    ,5.0\n\
                    2330,5.0\n";

        let records = TableLoader::parse_returns_table(text, &english_schema());
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn missing_return_columns_yield_empty() {
        let text = "foo,bar\n1,2\n";
        let records = TableLoader::parse_returns_table(text, &english_schema());
        assert!(records.is_empty());
    }

    #[test]
    fn whitespace_around_numbers_is_tolerated() {
        let text = "code,predicted_pct\n\
                    2330, 5.0 \n";

        let records = TableLoader::parse_returns_table(text, &english_schema());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].predicted_return_pct, 5.0);
    }
}
