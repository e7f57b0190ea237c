use std::collections::{BTreeSet, HashMap};

use crate::models::chart::{ChartDataset, ChartSeries};
use crate::models::ledger::PortfolioLedger;

/// Hue step between consecutive holdings, in degrees. With at most five
/// holdings this spreads the palette evenly around the wheel.
const HUE_STEP_DEGREES: usize = 72;

/// Joins ledger holdings against their rating histories to build the
/// aligned multi-series dataset the charting widget consumes.
pub struct SeriesAggregator;

impl SeriesAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Build the chart dataset for the current ledger.
    ///
    /// 1. `labels` is the sorted union of every period appearing in any
    ///    holding's history (lexical sort; period labels are required to
    ///    be lexically sortable, e.g. "YYYYQn").
    /// 2. Per holding, periods map to scores last-write-wins, so a
    ///    duplicate period in the source table keeps the later row.
    /// 3. A holding with no record (or no score) for a label emits the
    ///    missing marker, never zero, so charts render gaps instead of
    ///    false dips.
    /// 4. Colors rotate the hue wheel by position index and stay stable
    ///    across rebuilds as long as ledger order is stable.
    #[must_use]
    pub fn build_series(&self, ledger: &PortfolioLedger) -> ChartSeries {
        let mut label_set: BTreeSet<String> = BTreeSet::new();
        for holding in &ledger.holdings {
            for record in &holding.history.records {
                label_set.insert(record.period.clone());
            }
        }
        let labels: Vec<String> = label_set.into_iter().collect();

        let datasets = ledger
            .holdings
            .iter()
            .enumerate()
            .map(|(index, holding)| {
                let mut by_period: HashMap<&str, Option<f64>> = HashMap::new();
                for record in &holding.history.records {
                    by_period.insert(record.period.as_str(), record.score);
                }

                let values = labels
                    .iter()
                    .map(|label| by_period.get(label.as_str()).copied().flatten())
                    .collect();

                ChartDataset {
                    name: holding.history.display_label(),
                    color: series_color(index),
                    values,
                }
            })
            .collect();

        ChartSeries { labels, datasets }
    }
}

impl Default for SeriesAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic, visually distinct color for a holding's position.
#[must_use]
pub fn series_color(index: usize) -> String {
    format!("hsl({}, 70%, 50%)", index * HUE_STEP_DEGREES)
}
