use crate::domain::chart::{ChartCanvas, ChartPoint};

/// Normalized sparkline geometry for one price history.
#[derive(Debug, Clone, PartialEq)]
pub struct SparklinePath {
    canvas: ChartCanvas,
    points: Vec<ChartPoint>,
}

impl SparklinePath {
    pub fn canvas(&self) -> ChartCanvas {
        self.canvas
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    /// Value of the SVG `points` attribute for the stroked line.
    pub fn polyline_points(&self) -> String {
        self.points.iter().map(ChartPoint::to_svg_pair).collect::<Vec<_>>().join(" ")
    }

    /// Closed polygon from the baseline, along the curve, back to the baseline.
    pub fn area_path(&self) -> String {
        let baseline = ChartPoint::new(0.0, self.canvas.height).to_svg_pair();
        let end = ChartPoint::new(self.canvas.width, self.canvas.height).to_svg_pair();
        format!("M{} L{} {} L{} Z", baseline, baseline, self.polyline_points(), end)
    }
}

/// Domain service turning a numeric history into sparkline geometry
#[derive(Debug, Clone, Copy, Default)]
pub struct SparklineRenderer {
    canvas: ChartCanvas,
}

impl SparklineRenderer {
    pub fn new(canvas: ChartCanvas) -> Self {
        Self { canvas }
    }

    /// `None` for fewer than two finite samples: nothing to draw.
    pub fn render(&self, history: &[f64]) -> Option<SparklinePath> {
        let samples: Vec<f64> = history.iter().copied().filter(|v| v.is_finite()).collect();
        if samples.len() < 2 {
            return None;
        }

        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = if max > min { max - min } else { 1.0 };
        let last = (samples.len() - 1) as f64;

        let points = samples
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let x = i as f64 / last * self.canvas.width;
                let y = self.canvas.height - (v - min) / range * self.canvas.height;
                ChartPoint::new(x, y)
            })
            .collect();

        Some(SparklinePath { canvas: self.canvas, points })
    }
}
