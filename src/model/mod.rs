//! Grouping model: partition the extracted rate sequence into the three
//! fixed locality groups and average each.

use serde::Serialize;

/// Locality parameter assumed for each block of log entries, in file order.
/// The association is positional convention from the experiment script, not
/// something the log itself records.
pub const LOCALITY_LABELS: [&str; 3] = ["0.2", "0.5", "0.9"];

/// Each locality block is expected to hold this many runs.
pub const GROUP_SIZE: usize = 10;

/// One locality group, ready for rendering or JSON dump.
#[derive(Debug, Clone, Serialize)]
pub struct GroupView {
    pub label: String,

    /// How many rates actually landed in this group's slice.
    pub samples: usize,

    /// Arithmetic mean, absent when the slice is empty.
    pub mean: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub groups: Vec<GroupView>,
}

/// Partition `rates` at the fixed boundaries [0,10), [10,20), [20,30) and
/// average each non-empty group.
///
/// The boundaries are applied regardless of the sequence's actual length:
/// short groups are averaged over what is there, entries past index 30 are
/// dropped, and a group whose start offset is past the end gets no mean.
pub fn build_chart_data(rates: &[f64]) -> ChartData {
    let groups = LOCALITY_LABELS
        .iter()
        .enumerate()
        .map(|(k, label)| {
            let slice = group_slice(rates, k);
            GroupView {
                label: label.to_string(),
                samples: slice.len(),
                mean: mean(slice),
            }
        })
        .collect();

    ChartData { groups }
}

/// The k-th fixed-boundary slice, empty when the sequence is too short.
fn group_slice(rates: &[f64], k: usize) -> &[f64] {
    let start = k * GROUP_SIZE;
    if start >= rates.len() {
        return &[];
    }
    let end = (start + GROUP_SIZE).min(rates.len());
    &rates[start..end]
}

/// Arithmetic mean, guarded: never computed over zero elements.
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
