//! Visitor Chart Geometry
//!
//! Layout for the combined chart on the statistics view: unique visitors as
//! bars, average session time as a filled line. Everything is computed in a
//! fixed 800 × 300 viewport; the renderer only has to scale and stroke.

use crate::stats::ChartPoint;

/// Viewport width
pub const WIDTH: f64 = 800.0;
/// Viewport height
pub const HEIGHT: f64 = 300.0;

/// Headroom above the tallest value
const HEADROOM: f64 = 1.1;
/// Bar width as a fraction of the slot width
const BAR_FILL: f64 = 0.6;
/// Target number of x-axis labels
const MAX_X_LABELS: usize = 7;
/// Number of horizontal grid lines
pub const GRID_LINES: usize = 5;
/// Radius of the average-time markers
pub const POINT_RADIUS: f64 = 4.0;

/// Space around the plotting area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub const MARGIN: Margin = Margin {
    top: 20.0,
    right: 50.0,
    bottom: 30.0,
    left: 50.0,
};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Hover box content and placement
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Guide line position
    pub x: f64,
    /// Box position relative to the guide line
    pub bg: Rect,
    /// Text x offset relative to the guide line
    pub text_x: f64,
    pub date: String,
    pub uv_line: String,
    pub time_line: String,
}

/// Computed chart layout for a non-empty series
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    points: Vec<ChartPoint>,
    max_uv: f64,
    max_time: f64,
}

impl ChartLayout {
    /// Lay out a series; `None` when there is nothing to plot
    pub fn new(points: &[ChartPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let max_uv = points.iter().map(|p| p.uv as f64).fold(0.0, f64::max) * HEADROOM;
        let max_time = points.iter().map(|p| p.avg_time).fold(0.0, f64::max) * HEADROOM;

        Some(Self {
            points: points.to_vec(),
            max_uv,
            max_time,
        })
    }

    pub fn inner_width(&self) -> f64 {
        WIDTH - MARGIN.left - MARGIN.right
    }

    pub fn inner_height(&self) -> f64 {
        HEIGHT - MARGIN.top - MARGIN.bottom
    }

    /// Baseline y coordinate
    pub fn baseline(&self) -> f64 {
        MARGIN.top + self.inner_height()
    }

    /// Horizontal position of point `index`; a lone point is centred
    pub fn x(&self, index: usize) -> f64 {
        let n = self.points.len();
        if n <= 1 {
            return MARGIN.left + self.inner_width() / 2.0;
        }
        MARGIN.left + (index as f64 / (n - 1) as f64) * self.inner_width()
    }

    fn y(&self, value: f64, max: f64) -> f64 {
        let ratio = if max > 0.0 {
            (value / max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.baseline() - ratio * self.inner_height()
    }

    pub fn bar_width(&self) -> f64 {
        (self.inner_width() / self.points.len() as f64 * BAR_FILL).max(1.0)
    }

    /// Visitor bars, centred on each x position
    pub fn bars(&self) -> Vec<Rect> {
        let width = self.bar_width();
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let top = self.y(p.uv as f64, self.max_uv);
                Rect {
                    x: self.x(i) - width / 2.0,
                    y: top,
                    width,
                    height: self.baseline() - top,
                }
            })
            .collect()
    }

    /// Average-time vertices
    pub fn time_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (self.x(i), self.y(p.avg_time, self.max_time)))
            .collect()
    }

    /// Closed polygon under the average-time line, from the left to the right edge of the baseline
    pub fn time_area(&self) -> Vec<(f64, f64)> {
        let mut polygon = Vec::with_capacity(self.points.len() + 2);
        polygon.push((MARGIN.left, self.baseline()));
        polygon.extend(self.time_points());
        polygon.push((WIDTH - MARGIN.right, self.baseline()));
        polygon
    }

    /// Y positions of the horizontal grid lines, top to bottom
    pub fn grid_lines(&self) -> [f64; GRID_LINES] {
        let step = self.inner_height() / (GRID_LINES - 1) as f64;
        std::array::from_fn(|i| MARGIN.top + i as f64 * step)
    }

    /// X-axis labels, one every `ceil(n / 7)` points
    pub fn x_labels(&self) -> Vec<(f64, &str)> {
        let every = self.points.len().div_ceil(MAX_X_LABELS).max(1);
        self.points
            .iter()
            .enumerate()
            .filter(|(i, _)| i % every == 0)
            .map(|(i, p)| (self.x(i), p.label.as_str()))
            .collect()
    }

    /// Point nearest to a pointer offset measured from the left edge of the plotting area
    pub fn index_at(&self, offset_x: f64) -> usize {
        let last = self.points.len() - 1;
        if last == 0 || !offset_x.is_finite() {
            return 0;
        }
        let raw = (offset_x / self.inner_width() * last as f64).round();
        raw.clamp(0.0, last as f64) as usize
    }

    /// Hover box for point `index`; flips to the left past the horizontal midpoint
    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        let point = self.points.get(index)?;
        let x = self.x(index);
        let flip = x > WIDTH / 2.0;

        Some(Tooltip {
            x,
            bg: Rect {
                x: if flip { -130.0 } else { 10.0 },
                y: 10.0,
                width: 120.0,
                height: 60.0,
            },
            text_x: if flip { -120.0 } else { 20.0 },
            date: point.label.clone(),
            uv_line: format!("UV: {}", point.uv),
            time_line: format!("Tempo: {}s", point.avg_time),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[(i64, f64)]) -> Vec<ChartPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &(uv, avg_time))| ChartPoint {
                label: format!("10/{:02}", i + 1),
                uv,
                avg_time,
            })
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(ChartLayout::new(&[]).is_none());
    }

    #[test]
    fn test_x_spans_inner_width() {
        let layout = ChartLayout::new(&series(&[(1, 1.0), (2, 2.0), (3, 3.0)])).unwrap();
        assert_eq!(layout.x(0), 50.0);
        assert_eq!(layout.x(1), 400.0);
        assert_eq!(layout.x(2), 750.0);
    }

    #[test]
    fn test_single_point_is_centred() {
        let layout = ChartLayout::new(&series(&[(10, 100.0)])).unwrap();
        assert_eq!(layout.x(0), 400.0);
        assert_eq!(layout.index_at(123.0), 0);
    }

    #[test]
    fn test_bars_scale_with_headroom() {
        let layout = ChartLayout::new(&series(&[(50, 0.0), (100, 0.0)])).unwrap();
        let bars = layout.bars();

        assert_eq!(layout.bar_width(), 700.0 / 2.0 * 0.6);
        // Tallest bar reaches 1 / 1.1 of the inner height
        assert!((bars[1].height - 250.0 / 1.1).abs() < 1e-9);
        assert!((bars[0].height - 125.0 / 1.1).abs() < 1e-9);
        assert!((bars[1].y + bars[1].height - 270.0).abs() < 1e-9);
        assert_eq!(bars[0].x, 50.0 - layout.bar_width() / 2.0);
    }

    #[test]
    fn test_zero_values_stay_on_baseline() {
        let layout = ChartLayout::new(&series(&[(0, 0.0), (0, 0.0)])).unwrap();
        assert!(layout.bars().iter().all(|b| b.height == 0.0));
        assert!(layout.time_points().iter().all(|&(_, y)| y == 270.0));
    }

    #[test]
    fn test_area_closes_on_baseline() {
        let layout = ChartLayout::new(&series(&[(1, 10.0), (2, 20.0)])).unwrap();
        let area = layout.time_area();

        assert_eq!(area.len(), 4);
        assert_eq!(area[0], (50.0, 270.0));
        assert_eq!(area[3], (750.0, 270.0));
    }

    #[test]
    fn test_grid_lines() {
        let layout = ChartLayout::new(&series(&[(1, 1.0)])).unwrap();
        assert_eq!(layout.grid_lines(), [20.0, 82.5, 145.0, 207.5, 270.0]);
    }

    #[test]
    fn test_x_labels_thinned() {
        let values: Vec<(i64, f64)> = (0..30).map(|i| (i, i as f64)).collect();
        let layout = ChartLayout::new(&series(&values)).unwrap();

        // ceil(30 / 7) = 5 → indices 0, 5, 10, 15, 20, 25
        let labels = layout.x_labels();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[1].1, "10/06");
    }

    #[test]
    fn test_index_at_clamps() {
        let values: Vec<(i64, f64)> = (0..11).map(|i| (i, 0.0)).collect();
        let layout = ChartLayout::new(&series(&values)).unwrap();

        assert_eq!(layout.index_at(-20.0), 0);
        assert_eq!(layout.index_at(0.0), 0);
        assert_eq!(layout.index_at(350.0), 5);
        assert_eq!(layout.index_at(10_000.0), 10);
    }

    #[test]
    fn test_tooltip_flips() {
        let layout = ChartLayout::new(&series(&[(45, 185.0), (60, 210.0)])).unwrap();

        let left = layout.tooltip(0).unwrap();
        assert_eq!(left.bg.x, 10.0);
        assert_eq!(left.uv_line, "UV: 45");
        assert_eq!(left.time_line, "Tempo: 185s");

        let right = layout.tooltip(1).unwrap();
        assert_eq!(right.bg.x, -130.0);
        assert_eq!(right.text_x, -120.0);

        assert!(layout.tooltip(2).is_none());
    }
}
