//! CSV output format for spreadsheet analysis and machine parsing

use crate::histogram::Histogram;

/// Escape CSV field (handle commas, quotes, newlines)
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Generate the bucket series as CSV, one row per bucket with the
/// inclusive cumulative total.
pub fn to_csv(hist: &Histogram) -> String {
    let mut output = String::new();
    output.push_str("bucket,count,cumulative\n");

    let cumulative = hist.cumulative();
    for (bucket, cum) in hist.buckets().iter().zip(cumulative) {
        output.push_str(&format!(
            "{},{},{}\n",
            escape_field(&bucket.label),
            bucket.count,
            cum
        ));
    }

    output
}
