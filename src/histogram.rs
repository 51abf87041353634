//! Fixed-width bucketing of timing values
//!
//! Buckets are 0.1 seconds wide over an explicit closed domain. A value's
//! bucket is decided by one-decimal fixed-point formatting (round half to
//! even), which is exactly the label the reports print. Internally the
//! table is keyed by integer tenths so iteration order is numeric; a
//! string key would sort "10.0" between "1.9" and "2.0".

use std::collections::BTreeMap;
use thiserror::Error;

/// Sanity cap on the bucket table size. The observed domains need at
/// most 201 buckets; the cap only guards against a mistyped edge
/// allocating gigabytes before any file is read.
pub const MAX_BUCKETS: u64 = 100_000;

/// Errors raised when configuring the domain or classifying a value
#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("domain edge {value} is not finite")]
    NonFiniteEdge { value: f64 },

    #[error("domain edge {value} does not align to the 0.1s bucket step")]
    UnalignedEdge { value: f64 },

    #[error("domain lower edge {min} is not below upper edge {max}")]
    EmptyDomain { min: f64, max: f64 },

    #[error("domain {min}..{max} spans {buckets} buckets, more than the {MAX_BUCKETS} supported")]
    OversizedDomain { min: f64, max: f64, buckets: u64 },

    #[error("time {time} maps to bucket {bucket}, outside the {min:.1}..{max:.1} domain")]
    OutOfDomain {
        time: f64,
        bucket: String,
        min: f64,
        max: f64,
    },
}

/// Result type for histogram operations
pub type Result<T> = std::result::Result<T, HistogramError>;

/// Closed bucket domain `min ..= max`, step fixed at 0.1 seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    min_tenths: i64,
    max_tenths: i64,
}

impl Domain {
    /// Build a domain from its edges. Edges must be finite, aligned to
    /// the 0.1s step, and in increasing order.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let min_tenths = edge_tenths(min)?;
        let max_tenths = edge_tenths(max)?;
        if min_tenths >= max_tenths {
            return Err(HistogramError::EmptyDomain { min, max });
        }
        let buckets = (max_tenths - min_tenths + 1) as u64;
        if buckets > MAX_BUCKETS {
            return Err(HistogramError::OversizedDomain { min, max, buckets });
        }
        Ok(Self {
            min_tenths,
            max_tenths,
        })
    }

    /// Lower edge in seconds
    pub fn min(&self) -> f64 {
        self.min_tenths as f64 / 10.0
    }

    /// Upper edge in seconds
    pub fn max(&self) -> f64 {
        self.max_tenths as f64 / 10.0
    }

    /// Number of buckets, both edges included
    pub fn len(&self) -> usize {
        (self.max_tenths - self.min_tenths + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        false // construction guarantees at least two buckets
    }
}

fn edge_tenths(value: f64) -> Result<i64> {
    if !value.is_finite() {
        return Err(HistogramError::NonFiniteEdge { value });
    }
    let tenths = (value * 10.0).round();
    if (tenths / 10.0 - value).abs() > 1e-9 {
        return Err(HistogramError::UnalignedEdge { value });
    }
    Ok(tenths as i64)
}

/// The one-decimal label that decides (and names) a value's bucket.
pub fn bucket_label(time: f64) -> String {
    format!("{:.1}", time)
}

/// Bucket index in tenths for a timing value, `None` when the value has
/// no usable bucket (NaN, infinities, labels that name no table bucket).
fn time_to_tenths(time: f64) -> Option<i64> {
    if !time.is_finite() {
        return None;
    }
    // Classify through the label so bucketing always agrees with the
    // printed key. The label has one decimal, so the parse is exact up
    // to representation error and the round recovers the integer.
    let label = bucket_label(time);
    let value: f64 = label.parse().ok()?;
    let tenths = (value * 10.0).round() as i64;
    // Times in [-0.05, 0) format to "-0.0", which parses back to the
    // zero tenth even though the table only ever holds the "0.0" key.
    // A label that is not its own bucket's label must not classify.
    if bucket_label(tenths as f64 / 10.0) != label {
        return None;
    }
    Some(tenths)
}

/// One reported bucket: its label, numeric lower edge, and count
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub label: String,
    pub lower: f64,
    pub count: u64,
}

/// Per-bucket counters over a fixed domain, every bucket pre-initialized
/// to zero so reports never have missing bins.
#[derive(Debug, Clone)]
pub struct Histogram {
    domain: Domain,
    counts: BTreeMap<i64, u64>,
}

impl Histogram {
    /// Create a histogram with every bucket in the domain set to zero
    pub fn new(domain: Domain) -> Self {
        let counts = (domain.min_tenths..=domain.max_tenths)
            .map(|t| (t, 0))
            .collect();
        Self { domain, counts }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Classify one timing value into its bucket.
    ///
    /// A value outside the domain is a hard error; there is no clamping
    /// and no overflow bucket.
    pub fn record(&mut self, time: f64) -> Result<()> {
        let slot = time_to_tenths(time).and_then(|t| self.counts.get_mut(&t));
        match slot {
            Some(count) => {
                *count += 1;
                Ok(())
            }
            None => Err(HistogramError::OutOfDomain {
                time,
                bucket: bucket_label(time),
                min: self.domain.min(),
                max: self.domain.max(),
            }),
        }
    }

    /// Classify a whole sequence, stopping at the first failure.
    pub fn record_all(&mut self, times: impl IntoIterator<Item = f64>) -> Result<()> {
        for time in times {
            self.record(time)?;
        }
        Ok(())
    }

    /// Buckets in ascending numeric order
    pub fn buckets(&self) -> Vec<Bucket> {
        self.counts
            .iter()
            .map(|(&tenths, &count)| {
                let lower = tenths as f64 / 10.0;
                Bucket {
                    label: bucket_label(lower),
                    lower,
                    count,
                }
            })
            .collect()
    }

    /// Bucket counts in ascending bucket order
    pub fn counts(&self) -> Vec<u64> {
        self.counts.values().copied().collect()
    }

    /// Inclusive running totals in ascending bucket order: entry `i`
    /// sums buckets `0..=i`, so the last entry equals `total()`.
    pub fn cumulative(&self) -> Vec<u64> {
        let mut running = 0;
        self.counts
            .values()
            .map(|&count| {
                running += count;
                running
            })
            .collect()
    }

    /// Total number of classified values
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}
