//! SVG bar chart rendering for the bucket series

use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const BAR_COLOUR: RGBColor = hexcolour!(0x332288);

/// Render the histogram as a bar chart (bucket on x, count on y) into an
/// SVG file at `path`.
pub fn render_bar_chart(
    hist: &crate::histogram::Histogram,
    path: &Path,
    caption: &str,
) -> Result<(), Box<dyn Error>> {
    let buckets = hist.buckets();
    let max_count = buckets.iter().map(|b| b.count).max().unwrap_or(0).max(1);

    let domain = hist.domain();
    let x_range = domain.min()..domain.max() + 0.1;
    let y_range = 0u64..max_count + max_count / 10 + 1;

    let root = SVGBackend::new(path, (1280, 720)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 40))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .y_desc("successful results")
        .x_desc("time (s)")
        .draw()?;

    chart.draw_series(buckets.iter().map(|bucket| {
        let mut bar = Rectangle::new(
            [(bucket.lower, 0), (bucket.lower + 0.1, bucket.count)],
            BAR_COLOUR.filled(),
        );
        bar.set_margin(0, 0, 1, 1);
        bar
    }))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::{Domain, Histogram};

    #[test]
    fn test_render_writes_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist.svg");

        let mut hist = Histogram::new(Domain::new(0.0, 1.0).unwrap());
        hist.record_all([0.2, 0.2, 0.7]).unwrap();

        render_bar_chart(&hist, &path, "test chart").unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_render_empty_histogram() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");

        let hist = Histogram::new(Domain::new(0.0, 1.0).unwrap());
        render_bar_chart(&hist, &path, "empty").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_bar_colour_components() {
        let RGBColor(r, g, b) = BAR_COLOUR;
        assert_eq!((r, g, b), (0x33, 0x22, 0x88));
    }
}
