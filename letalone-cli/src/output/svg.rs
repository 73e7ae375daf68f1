//! SVG line-plot renderer for precision-recall figures

use anyhow::Result;
use std::io::Write;

const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 44.0;
const MARGIN_BOTTOM: f64 = 56.0;
const TICK_STEP: f64 = 0.2;

/// Colour-blind safe palette (Okabe-Ito)
pub const PALETTE: [&str; 3] = ["#0072B2", "#D55E00", "#009E73"];

/// One labelled trace
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub color: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>, color: impl Into<String>, xs: &[f64], ys: &[f64]) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
        }
    }
}

/// Standalone SVG line plot
#[derive(Debug, Clone)]
pub struct SvgPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
    pub series: Vec<Series>,
}

/// Closed interval covering [0, 1] and every finite value in `values`
fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 1.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Tick positions at multiples of `TICK_STEP` inside `[lo, hi]`
fn ticks(lo: f64, hi: f64) -> Vec<f64> {
    let first = (lo / TICK_STEP - 1e-9).ceil() as i64;
    let last = (hi / TICK_STEP + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * TICK_STEP).collect()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl SvgPlot {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            x_label: "Recall".to_string(),
            y_label: "Precision".to_string(),
            width,
            height,
            series: Vec::new(),
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Write the complete SVG document
    pub fn render<W: Write>(&self, mut writer: W) -> Result<()> {
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        let plot_w = (w - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_h = (h - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);

        let points = || self.series.iter().flat_map(|s| s.points.iter());
        let (x_lo, x_hi) = axis_range(points().map(|p| p.0));
        let (y_lo, y_hi) = axis_range(points().map(|p| p.1));

        let sx = |x: f64| MARGIN_LEFT + (x - x_lo) / (x_hi - x_lo) * plot_w;
        let sy = |y: f64| MARGIN_TOP + (y_hi - y) / (y_hi - y_lo) * plot_h;
        let (left, right) = (MARGIN_LEFT, MARGIN_LEFT + plot_w);
        let (top, bottom) = (MARGIN_TOP, MARGIN_TOP + plot_h);

        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" font-family="sans-serif">"#,
            self.width, self.height, self.width, self.height
        )?;
        writeln!(writer, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
        writeln!(
            writer,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="16">{}</text>"#,
            w / 2.0,
            MARGIN_TOP / 2.0 + 6.0,
            escape(&self.title)
        )?;

        for x in ticks(x_lo, x_hi) {
            let px = sx(x);
            writeln!(
                writer,
                r##"<line x1="{px:.1}" y1="{top:.1}" x2="{px:.1}" y2="{bottom:.1}" stroke="#e0e0e0"/>"##
            )?;
            writeln!(
                writer,
                r#"<text x="{px:.1}" y="{:.1}" text-anchor="middle" font-size="11">{x:.1}</text>"#,
                bottom + 16.0
            )?;
        }
        for y in ticks(y_lo, y_hi) {
            let py = sy(y);
            writeln!(
                writer,
                r##"<line x1="{left:.1}" y1="{py:.1}" x2="{right:.1}" y2="{py:.1}" stroke="#e0e0e0"/>"##
            )?;
            writeln!(
                writer,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11">{y:.1}</text>"#,
                left - 6.0,
                py + 4.0
            )?;
        }

        writeln!(
            writer,
            r#"<rect x="{left:.1}" y="{top:.1}" width="{plot_w:.1}" height="{plot_h:.1}" fill="none" stroke="black"/>"#
        )?;
        writeln!(
            writer,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="13">{}</text>"#,
            left + plot_w / 2.0,
            h - 14.0,
            escape(&self.x_label)
        )?;
        writeln!(
            writer,
            r#"<text x="16" y="{:.1}" text-anchor="middle" font-size="13" transform="rotate(-90 16 {:.1})">{}</text>"#,
            top + plot_h / 2.0,
            top + plot_h / 2.0,
            escape(&self.y_label)
        )?;

        for series in &self.series {
            let coords: Vec<String> = series
                .points
                .iter()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .map(|&(x, y)| format!("{:.2},{:.2}", sx(x), sy(y)))
                .collect();
            writeln!(
                writer,
                r#"<polyline fill="none" stroke="{}" stroke-width="2" points="{}"/>"#,
                escape(&series.color),
                coords.join(" ")
            )?;
        }

        // Legend, top-right corner of the plot area
        let legend_x = right - 150.0;
        for (i, series) in self.series.iter().enumerate() {
            let ly = top + 16.0 + i as f64 * 18.0;
            writeln!(
                writer,
                r#"<line x1="{:.1}" y1="{ly:.1}" x2="{:.1}" y2="{ly:.1}" stroke="{}" stroke-width="2"/>"#,
                legend_x,
                legend_x + 24.0,
                escape(&series.color)
            )?;
            writeln!(
                writer,
                r#"<text x="{:.1}" y="{:.1}" font-size="12">{}</text>"#,
                legend_x + 30.0,
                ly + 4.0,
                escape(&series.label)
            )?;
        }

        writeln!(writer, "</svg>")?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(plot: &SvgPlot) -> String {
        let mut buffer = Vec::new();
        plot.render(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_axis_range_includes_unit_interval() {
        assert_eq!(axis_range([0.2, 0.8].into_iter()), (0.0, 1.0));
        assert_eq!(axis_range([-0.3, 0.5].into_iter()), (-0.3, 1.0));
        assert_eq!(axis_range([f64::NAN, 1.4].into_iter()), (0.0, 1.4));
    }

    #[test]
    fn test_ticks_unit_interval() {
        let t = ticks(0.0, 1.0);
        assert_eq!(t.len(), 6);
        assert_eq!(t[0], 0.0);
        assert!((t[5] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_render_has_one_polyline_per_series() {
        let xs = [0.0, 0.5, 1.0];
        let plot = SvgPlot::new("PR curve: GUM → EWT", 640, 480)
            .with_series(Series::new("Full model", PALETTE[0], &xs, &[1.0, 0.75, 0.5]))
            .with_series(Series::new("No parallelism", PALETTE[1], &xs, &[0.9, 0.6, 0.3]))
            .with_series(Series::new("No licensing", PALETTE[2], &xs, &[0.85, 0.575, 0.3]));

        let svg = render(&plot);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polyline").count(), 3);
        assert!(svg.contains("PR curve: GUM → EWT"));
        assert!(svg.contains("No parallelism"));
        assert!(svg.contains("#D55E00"));
    }

    #[test]
    fn test_render_escapes_labels() {
        let plot = SvgPlot::new("A <b> & C", 320, 240);
        let svg = render(&plot);
        assert!(svg.contains("A &lt;b&gt; &amp; C"));
    }
}
