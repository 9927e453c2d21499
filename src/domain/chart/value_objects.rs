/// Value Object - logical drawing surface; the SVG scales it to its box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartCanvas {
    pub width: f64,
    pub height: f64,
}

impl Default for ChartCanvas {
    fn default() -> Self {
        Self { width: 300.0, height: 100.0 }
    }
}

impl ChartCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `viewBox` attribute for this canvas.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", fmt_coord(self.width), fmt_coord(self.height))
    }
}

/// Value Object - one vertex in canvas coordinates (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl ChartPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `x,y` pair as used by SVG `points` and path data.
    pub fn to_svg_pair(&self) -> String {
        format!("{},{}", fmt_coord(self.x), fmt_coord(self.y))
    }
}

/// Two decimals at most, no trailing zeros, no `-0`.
pub fn fmt_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}
