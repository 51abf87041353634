//! Human-readable text report

use crate::histogram::Histogram;
use crate::stats::TimingStats;

/// Render the text report: the two diagnostic counts, the bucket table
/// with inclusive cumulative totals, and optionally extended statistics.
pub fn render_text(
    total_records: usize,
    successful_records: usize,
    hist: &Histogram,
    stats: Option<&TimingStats>,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("results: {}\n", total_records));
    out.push_str(&format!("successful: {}\n", successful_records));
    out.push('\n');

    out.push_str("bucket     count  cumulative\n");
    out.push_str("------ --------- -----------\n");

    let cumulative = hist.cumulative();
    for (bucket, cum) in hist.buckets().iter().zip(cumulative) {
        out.push_str(&format!(
            "{:>6} {:>9} {:>11}\n",
            bucket.label, bucket.count, cum
        ));
    }

    out.push_str("------ --------- -----------\n");
    out.push_str(&format!(" total {:>9}\n", hist.total()));

    if let Some(stats) = stats {
        out.push('\n');
        out.push_str("=== Extended Statistics ===\n");
        out.push_str(&format!("  Mean:         {:.3} s\n", stats.mean));
        out.push_str(&format!("  Std Dev:      {:.3} s\n", stats.stddev));
        out.push_str(&format!("  Min:          {:.3} s\n", stats.min));
        out.push_str(&format!("  Max:          {:.3} s\n", stats.max));
        out.push_str(&format!("  Median (P50): {:.3} s\n", stats.median));
        out.push_str(&format!("  P75:          {:.3} s\n", stats.p75));
        out.push_str(&format!("  P90:          {:.3} s\n", stats.p90));
        out.push_str(&format!("  P95:          {:.3} s\n", stats.p95));
        out.push_str(&format!("  P99:          {:.3} s\n", stats.p99));
    }

    out
}
