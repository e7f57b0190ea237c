pub mod errors;
pub mod models;
pub mod services;
pub mod sources;
pub mod store;

use models::{
    chart::ChartSeries,
    company::CompanyHistory,
    ledger::PortfolioLedger,
    schema::TableSchema,
};
use services::{
    ledger_service::LedgerService, projection_service::ProjectionEngine,
    search_service::SearchIndex, series_service::SeriesAggregator,
};
use sources::traits::TableSource;
use store::{loader::TableLoader, record_store::RecordStore};

use errors::CoreError;

pub use models::company::CompanyRecord;
pub use models::ledger::MAX_HOLDINGS;
pub use models::returns::ReturnRecord;

/// Main entry point for the Portfolio Composer core library.
///
/// Owns the immutable record store, the ledger (the only mutable state),
/// and the derived values. Every ledger mutation synchronously recomputes
/// the blended return and the chart series from the freshly mutated
/// ledger, so the two are never observably out of step with it.
#[must_use]
pub struct PortfolioComposer {
    store: RecordStore,
    ledger: PortfolioLedger,
    search_index: SearchIndex,
    ledger_service: LedgerService,
    projection_engine: ProjectionEngine,
    series_aggregator: SeriesAggregator,
    /// Derived: blended predicted return in percentage units.
    blended_return: f64,
    /// Derived: aligned multi-series chart dataset.
    chart_series: ChartSeries,
}

impl std::fmt::Debug for PortfolioComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioComposer")
            .field("identity_rows", &self.store.identity_len())
            .field("return_rows", &self.store.returns_len())
            .field("holdings", &self.ledger.len())
            .field("blended_return", &self.blended_return)
            .finish()
    }
}

impl PortfolioComposer {
    /// Fetch both tables from a source and build the composer.
    ///
    /// The two fetches are the only asynchronous boundary in the crate;
    /// everything downstream is synchronous over in-memory structures.
    pub async fn load(
        source: &dyn TableSource,
        schema: &TableSchema,
    ) -> Result<Self, CoreError> {
        let identity_text = source.fetch_table(&schema.identity_resource).await?;
        let returns_text = source.fetch_table(&schema.returns_resource).await?;

        let identity = TableLoader::parse_identity_table(&identity_text, schema);
        let returns = TableLoader::parse_returns_table(&returns_text, schema);

        tracing::debug!(
            source = source.name(),
            identity_rows = identity.len(),
            return_rows = returns.len(),
            "tables loaded"
        );

        Ok(Self::from_tables(identity, returns))
    }

    /// Build the composer from already-parsed rows (no I/O).
    pub fn from_tables(
        identity: Vec<CompanyRecord>,
        returns: Vec<ReturnRecord>,
    ) -> Self {
        let mut composer = Self {
            store: RecordStore::new(identity, returns),
            ledger: PortfolioLedger::new(),
            search_index: SearchIndex::new(),
            ledger_service: LedgerService::new(),
            projection_engine: ProjectionEngine::new(),
            series_aggregator: SeriesAggregator::new(),
            blended_return: 0.0,
            chart_series: ChartSeries::empty(),
        };
        composer.recompute_derived();
        composer
    }

    // ── Search ──────────────────────────────────────────────────────

    /// Resolve a query to candidate companies: case-sensitive substring
    /// match on code or short name, deduplicated by code in first-seen
    /// table order, capped at 10. Empty query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<CompanyHistory> {
        self.search_index.search(&self.store, query)
    }

    // ── Ledger Operations ───────────────────────────────────────────

    /// Add a company to the ledger and re-balance all weights evenly.
    /// Silent no-op when the ledger is full (5) or the company is
    /// already selected.
    pub fn add_holding(&mut self, history: CompanyHistory) {
        self.ledger_service.add(&mut self.ledger, history);
        self.recompute_derived();
    }

    /// Add the top suggestion for a query, the way the search button
    /// confirms the first match. No-op when nothing matches.
    pub fn add_top_match(&mut self, query: &str) {
        if let Some(first) = self.search(query).into_iter().next() {
            self.add_holding(first);
        }
    }

    /// Remove the holding at `index`. Remaining weights are kept as they
    /// are; the allocation total may stop summing to 100.
    pub fn remove_holding(&mut self, index: usize) {
        self.ledger_service.remove(&mut self.ledger, index);
        self.recompute_derived();
    }

    /// Overwrite one holding's weight from raw user input. Unparsable
    /// input reads as 0; nothing else is re-normalized.
    pub fn set_weight(&mut self, index: usize, raw: &str) {
        self.ledger_service.set_weight(&mut self.ledger, index, raw);
        self.recompute_derived();
    }

    // ── Derived Values ──────────────────────────────────────────────

    /// The current ledger.
    #[must_use]
    pub fn ledger(&self) -> &PortfolioLedger {
        &self.ledger
    }

    /// Blended predicted return in percentage units, as of the last
    /// mutation.
    #[must_use]
    pub fn blended_return(&self) -> f64 {
        self.blended_return
    }

    /// Chart dataset aligned on the shared period axis, as of the last
    /// mutation.
    #[must_use]
    pub fn chart_series(&self) -> &ChartSeries {
        &self.chart_series
    }

    /// Sum of all allocation weights in percent (the advisory display).
    #[must_use]
    pub fn total_allocation(&self) -> u32 {
        self.ledger.total_allocation()
    }

    /// `false` when the allocation total has drifted away from 100 and
    /// the UI should flag it.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.ledger.is_balanced()
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Chart dataset as JSON for the rendering layer. Missing markers
    /// serialize as `null`.
    pub fn export_chart_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(&self.chart_series)?)
    }

    /// Ledger snapshot as JSON.
    pub fn export_ledger_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(&self.ledger)?)
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Recompute both derived values from the post-mutation ledger.
    ///
    /// Called at the end of every mutating operation with the ledger
    /// value that operation produced, never from stale ambient state.
    fn recompute_derived(&mut self) {
        self.blended_return = self.projection_engine.project(&self.ledger, &self.store);
        self.chart_series = self.series_aggregator.build_series(&self.ledger);
    }
}
