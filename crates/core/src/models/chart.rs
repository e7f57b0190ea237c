use serde::{Deserialize, Serialize};

/// One chart line: a holding's score per period label.
///
/// The core generates these; the charting widget just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    /// Legend label, e.g. "台積電 (2330)"
    pub name: String,

    /// CSS color string, derived from the holding's position index
    pub color: String,

    /// One entry per shared period label. `None` is the missing marker:
    /// it serializes to JSON `null` so the widget draws a gap, never a
    /// dip to zero.
    pub values: Vec<Option<f64>>,
}

/// The aligned multi-series dataset handed to the charting widget.
///
/// `labels` is the sorted union of every period appearing in any selected
/// holding; each dataset carries exactly `labels.len()` values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Shared time axis, sorted ascending
    pub labels: Vec<String>,

    /// One dataset per holding, in ledger order
    pub datasets: Vec<ChartDataset>,
}

impl ChartSeries {
    /// An empty series (no holdings selected).
    pub fn empty() -> Self {
        Self::default()
    }
}
