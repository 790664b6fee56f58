//! Plot-area math shared by the SVG chart components.

use std::f64::consts::PI;

/// Margins and outer size of a cartesian chart, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Frame {
    pub const fn new(width: f64, height: f64, left: f64) -> Self {
        Self {
            width,
            height,
            left,
            right: 16.0,
            top: 16.0,
            bottom: 36.0,
        }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.left - self.right).max(1.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(1.0)
    }

    pub fn baseline(&self) -> f64 {
        self.top + self.plot_height()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Integer axis scale: a rounded-up maximum and the step between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub max: u64,
    pub step: u64,
}

impl Scale {
    /// Pick a 1/2/5×10ⁿ step giving roughly four ticks, starting at zero.
    pub fn for_max(max: u64) -> Self {
        if max == 0 {
            return Self { max: 1, step: 1 };
        }
        let rough = (max as f64 / 4.0).max(1.0);
        let magnitude = 10f64.powf(rough.log10().floor());
        let step = [1.0, 2.0, 5.0, 10.0]
            .into_iter()
            .map(|m| m * magnitude)
            .find(|candidate| *candidate >= rough)
            .unwrap_or(10.0 * magnitude)
            .round()
            .max(1.0) as u64;
        let ticks = max.div_ceil(step);
        Self {
            max: ticks.saturating_mul(step),
            step,
        }
    }

    pub fn ticks(&self) -> Vec<u64> {
        (0..=self.max / self.step).map(|i| i * self.step).collect()
    }

    /// Fraction of the axis covered by `value`.
    pub fn ratio(&self, value: u64) -> f64 {
        value as f64 / self.max as f64
    }
}

/// Point on a circle; angle 0 is twelve o'clock, growing clockwise.
pub fn polar(cx: f64, cy: f64, radius: f64, turns: f64) -> (f64, f64) {
    let angle = turns * 2.0 * PI - PI / 2.0;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// SVG path for a doughnut segment between two fractions of a full turn.
pub fn ring_segment(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    // A single arc cannot draw a closed circle; split a full ring in two.
    if end - start >= 0.9999 {
        let half = start + 0.5;
        return format!(
            "{} {}",
            ring_segment(cx, cy, outer, inner, start, half),
            ring_segment(cx, cy, outer, inner, half, end)
        );
    }

    let large_arc = if end - start > 0.5 { 1 } else { 0 };
    let (ox1, oy1) = polar(cx, cy, outer, start);
    let (ox2, oy2) = polar(cx, cy, outer, end);
    let (ix1, iy1) = polar(cx, cy, inner, end);
    let (ix2, iy2) = polar(cx, cy, inner, start);

    format!(
        "M {ox1:.2} {oy1:.2} A {outer:.2} {outer:.2} 0 {large_arc} 1 {ox2:.2} {oy2:.2} \
         L {ix1:.2} {iy1:.2} A {inner:.2} {inner:.2} 0 {large_arc} 0 {ix2:.2} {iy2:.2} Z"
    )
}

/// `x,y` pairs for a polyline spread evenly across the plot width.
pub fn line_points(frame: &Frame, scale: &Scale, values: &[u64]) -> Vec<(f64, f64)> {
    let span = values.len().saturating_sub(1).max(1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let x = if values.len() == 1 {
                frame.left + frame.plot_width() / 2.0
            } else {
                frame.left + idx as f64 / span * frame.plot_width()
            };
            let y = frame.baseline() - scale.ratio(value) * frame.plot_height();
            (x, y)
        })
        .collect()
}

pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed polygon under a polyline, down to the baseline.
pub fn area_attr(frame: &Frame, points: &[(f64, f64)]) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let baseline = frame.baseline();
    format!(
        "{:.1},{baseline:.1} {} {:.1},{baseline:.1}",
        first.0,
        points_attr(points),
        last.0
    )
}
