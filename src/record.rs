//! Result record model and success filtering

use serde::{Deserialize, Serialize};

/// One logged solver outcome: a success flag and the wall-clock time the
/// attempt took, in seconds. Producers serialize additional fields
/// (starting words, the solved grid) which are ignored here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuildRecord {
    /// Whether the attempt completed before its deadline
    pub success: bool,
    /// Elapsed time in seconds
    pub time: f64,
}

/// Keep only the records whose success flag is set.
pub fn successful(records: &[BuildRecord]) -> Vec<BuildRecord> {
    records.iter().copied().filter(|r| r.success).collect()
}
