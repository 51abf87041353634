//! JSON output format for histogram reports

use serde::{Deserialize, Serialize};

use crate::histogram::Histogram;
use crate::stats::TimingStats;

/// A single bucket entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonBucket {
    /// Bucket label, the one-decimal lower edge (e.g. "0.3")
    pub bucket: String,
    /// Number of successful records in this bucket
    pub count: u64,
    /// Inclusive running total up to and including this bucket
    pub cumulative: u64,
}

/// Summary counts and the configured domain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    /// Total number of loaded records
    pub total_records: u64,
    /// Number of records with the success flag set
    pub successful_records: u64,
    /// Lower edge of the bucket domain in seconds
    pub domain_min: f64,
    /// Upper edge of the bucket domain in seconds
    pub domain_max: f64,
}

/// Extended statistics over the successful timings (seconds)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonStats {
    pub mean: f64,
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

impl From<&TimingStats> for JsonStats {
    fn from(stats: &TimingStats) -> Self {
        Self {
            mean: stats.mean,
            stddev: stats.stddev,
            min: stats.min,
            max: stats.max,
            median: stats.median,
            p75: stats.p75,
            p90: stats.p90,
            p95: stats.p95,
            p99: stats.p99,
        }
    }
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Summary counts
    pub summary: JsonSummary,
    /// Bucket series in ascending bucket order
    pub buckets: Vec<JsonBucket>,
    /// Extended statistics (if --stats-extended enabled)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<JsonStats>,
}

impl JsonReport {
    /// Build the report from the pipeline's outputs
    pub fn build(
        total_records: usize,
        successful_records: usize,
        hist: &Histogram,
        stats: Option<&TimingStats>,
    ) -> Self {
        let cumulative = hist.cumulative();
        let buckets = hist
            .buckets()
            .into_iter()
            .zip(cumulative)
            .map(|(bucket, cumulative)| JsonBucket {
                bucket: bucket.label,
                count: bucket.count,
                cumulative,
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "demora-json-v1".to_string(),
            summary: JsonSummary {
                total_records: total_records as u64,
                successful_records: successful_records as u64,
                domain_min: hist.domain().min(),
                domain_max: hist.domain().max(),
            },
            buckets,
            stats: stats.map(JsonStats::from),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
