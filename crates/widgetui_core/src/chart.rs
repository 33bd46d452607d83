//! Geometry for the lightweight Chart component.
//!
//! All shapes are computed in a `0 0 100 100` view box so the component can scale them with
//! plain CSS.

use std::f64::consts::PI;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tokens::{parse_token, ParseTokenError};

/// View box side length.
pub const VIEW_BOX: f64 = 100.0;
/// Inner radius used by donut charts.
pub const DONUT_INNER_RADIUS: f64 = 30.0;

const CENTER: f64 = VIEW_BOX / 2.0;
const OUTER_RADIUS: f64 = VIEW_BOX / 2.0;
const FULL_TURN_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One data point.
pub struct ChartDatum {
    /// Axis or legend label.
    pub label: String,
    /// Magnitude.
    pub value: f64,
    /// Fill override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ChartDatum {
    /// Datum with the default fill.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    /// Returns `self` with a fill override.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Chart rendering mode.
pub enum ChartKind {
    /// Vertical bars.
    #[default]
    Bar,
    /// Polyline with point markers.
    Line,
    /// Filled sectors.
    Pie,
    /// Annular sectors.
    Donut,
}

impl ChartKind {
    /// Every kind.
    pub const ALL: [Self; 4] = [Self::Bar, Self::Line, Self::Pie, Self::Donut];

    /// Stable token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Donut => "donut",
        }
    }

    /// Parses `raw`, rendering unknown kinds as bars.
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for ChartKind {
    type Err = ParseTokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_token("chart kind", raw, &Self::ALL, Self::token)
    }
}

fn max_value(data: &[ChartDatum]) -> Option<f64> {
    data.iter()
        .map(|datum| datum.value)
        .filter(|value| value.is_finite())
        .fold(None, |max, value| Some(max.map_or(value, |max: f64| max.max(value))))
        .filter(|max| *max > 0.0)
}

/// Bar heights as percentages of the largest value, clamped to `0..=100`. When no value is
/// positive every bar is flat.
pub fn bar_heights(data: &[ChartDatum]) -> Vec<f64> {
    let Some(max) = max_value(data) else {
        return vec![0.0; data.len()];
    };
    data.iter()
        .map(|datum| percent_of(datum.value, max))
        .collect()
}

fn percent_of(value: f64, max: f64) -> f64 {
    if value.is_finite() {
        (value / max * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Line vertices in view-box coordinates, spread evenly along x. A single point sits in the
/// horizontal center.
pub fn line_points(data: &[ChartDatum]) -> Vec<(f64, f64)> {
    let max = max_value(data);
    let last = data.len().saturating_sub(1);
    data.iter()
        .enumerate()
        .map(|(index, datum)| {
            let x = if last == 0 {
                CENTER
            } else {
                index as f64 / last as f64 * VIEW_BOX
            };
            let height = max.map_or(0.0, |max| percent_of(datum.value, max));
            (x, VIEW_BOX - height)
        })
        .collect()
}

/// `points` attribute for an SVG polyline.
pub fn polyline_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", fmt_num(*x), fmt_num(*y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fill used when a datum carries no color: hues spread evenly around the wheel.
pub fn default_fill(index: usize, count: usize) -> String {
    let hue = if count == 0 {
        0.0
    } else {
        index as f64 * 360.0 / count as f64
    };
    format!("hsl({}, 70%, 50%)", fmt_num(hue))
}

/// Fill of `data[index]`.
pub fn fill_for(data: &[ChartDatum], index: usize) -> String {
    data.get(index)
        .and_then(|datum| datum.color.clone())
        .unwrap_or_else(|| default_fill(index, data.len()))
}

#[derive(Debug, Clone, PartialEq)]
/// One pie or donut sector.
pub struct PieSlice {
    /// Index of the datum the slice represents.
    pub index: usize,
    /// Start angle in degrees, clockwise from 3 o'clock.
    pub start_angle: f64,
    /// End angle in degrees.
    pub end_angle: f64,
    /// Whether the arc spans more than half a turn.
    pub large_arc: bool,
    /// SVG path data.
    pub path: String,
    /// Fill color.
    pub fill: String,
}

impl PieSlice {
    /// Angular extent in degrees.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Sectors for `data`. Non-positive values get no slice; when nothing is positive the result is
/// empty. An `inner_radius` above zero produces annular (donut) sectors.
pub fn pie_slices(data: &[ChartDatum], inner_radius: f64) -> Vec<PieSlice> {
    let Some(max) = max_value(data) else {
        return Vec::new();
    };
    // Weights relative to the largest value keep the total finite near `f64::MAX`.
    let weight = |value: f64| value / max;
    let total: f64 = data
        .iter()
        .map(|datum| datum.value)
        .filter(|value| value.is_finite() && *value > 0.0)
        .map(weight)
        .sum();
    let inner = inner_radius.clamp(0.0, OUTER_RADIUS - 1.0);

    let mut slices = Vec::new();
    let mut cursor = 0.0;
    for (index, datum) in data.iter().enumerate() {
        if !(datum.value.is_finite() && datum.value > 0.0) {
            continue;
        }
        let sweep = weight(datum.value) / total * 360.0;
        let start = cursor;
        let end = cursor + sweep;
        cursor = end;
        slices.push(PieSlice {
            index,
            start_angle: start,
            end_angle: end,
            large_arc: sweep > 180.0,
            path: sector_path(start, end, inner),
            fill: fill_for(data, index),
        });
    }
    slices
}

fn point(angle: f64, radius: f64) -> (String, String) {
    let radians = angle * PI / 180.0;
    (
        fmt_num(CENTER + radius * radians.cos()),
        fmt_num(CENTER + radius * radians.sin()),
    )
}

fn sector_path(start: f64, end: f64, inner: f64) -> String {
    let r = fmt_num(OUTER_RADIUS);
    let sweep = end - start;
    if sweep >= 360.0 - FULL_TURN_EPSILON {
        // A single arc cannot close on itself; draw two halves.
        let mid = start + 180.0;
        let (sx, sy) = point(start, OUTER_RADIUS);
        let (mx, my) = point(mid, OUTER_RADIUS);
        let mut path = format!("M {sx} {sy} A {r} {r} 0 0 1 {mx} {my} A {r} {r} 0 0 1 {sx} {sy} Z");
        if inner > 0.0 {
            let ir = fmt_num(inner);
            let (isx, isy) = point(start, inner);
            let (imx, imy) = point(mid, inner);
            path.push_str(&format!(
                " M {isx} {isy} A {ir} {ir} 0 0 0 {imx} {imy} A {ir} {ir} 0 0 0 {isx} {isy} Z"
            ));
        }
        return path;
    }

    let large = u8::from(sweep > 180.0);
    let (sx, sy) = point(start, OUTER_RADIUS);
    let (ex, ey) = point(end, OUTER_RADIUS);
    if inner > 0.0 {
        let ir = fmt_num(inner);
        let (iex, iey) = point(end, inner);
        let (isx, isy) = point(start, inner);
        format!(
            "M {sx} {sy} A {r} {r} 0 {large} 1 {ex} {ey} L {iex} {iey} A {ir} {ir} 0 {large} 0 {isx} {isy} Z"
        )
    } else {
        let c = fmt_num(CENTER);
        format!("M {c} {c} L {sx} {sy} A {r} {r} 0 {large} 1 {ex} {ey} Z")
    }
}

/// Rounds to three decimals and drops trailing zeros (`50`, `12.5`, `0.001`).
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0 + 0.0;
    format!("{rounded}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn data(values: &[f64]) -> Vec<ChartDatum> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| ChartDatum::new(format!("d{index}"), *value))
            .collect()
    }

    #[test]
    fn bars_scale_to_the_maximum() {
        assert_eq!(bar_heights(&data(&[5.0, 10.0, 2.5])), vec![50.0, 100.0, 25.0]);
        assert_eq!(bar_heights(&data(&[0.0, -3.0])), vec![0.0, 0.0]);
        assert!(bar_heights(&[]).is_empty());
    }

    #[test]
    fn line_points_span_the_view_box() {
        let points = line_points(&data(&[0.0, 5.0, 10.0]));
        assert_eq!(points, vec![(0.0, 100.0), (50.0, 50.0), (100.0, 0.0)]);
        assert_eq!(polyline_attr(&points), "0,100 50,50 100,0");
        assert_eq!(line_points(&data(&[4.0])), vec![(50.0, 0.0)]);
    }

    #[test]
    fn pie_angles_cover_the_full_turn() {
        let slices = pie_slices(&data(&[1.0, 2.0, 3.0, 0.0]), 0.0);
        assert_eq!(slices.len(), 3);
        let total: f64 = slices.iter().map(PieSlice::sweep).sum();
        assert!((total - 360.0).abs() < 1e-9);
        assert_eq!(slices[0].start_angle, 0.0);
        assert!((slices[2].end_angle - 360.0).abs() < 1e-9);
        assert!(!slices[1].large_arc);
        assert!(slices[2].path.starts_with("M 50 50 L "));
    }

    #[test]
    fn huge_values_still_cover_the_full_turn() {
        let slices = pie_slices(&data(&[f64::MAX, f64::MAX / 2.0, f64::INFINITY]), 0.0);
        assert_eq!(slices.len(), 2);
        let total: f64 = slices.iter().map(PieSlice::sweep).sum();
        assert!((total - 360.0).abs() < 1e-9);
        assert!((slices[0].sweep() - 240.0).abs() < 1e-9);
        assert!(slices[0].large_arc);
    }

    #[test]
    fn dominant_slice_sets_large_arc_flag() {
        let slices = pie_slices(&data(&[3.0, 1.0]), 0.0);
        assert!(slices[0].large_arc);
        assert!(slices[0].path.contains(" 0 1 1 "));
        assert_eq!(slices[0].path, "M 50 50 L 100 50 A 50 50 0 1 1 50 0 Z");
    }

    #[test]
    fn single_value_draws_a_closed_circle() {
        let slices = pie_slices(&data(&[7.0]), 0.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].path, "M 100 50 A 50 50 0 0 1 0 50 A 50 50 0 0 1 100 50 Z");
    }

    #[test]
    fn donut_sectors_return_along_the_inner_radius() {
        let slices = pie_slices(&data(&[1.0, 1.0]), DONUT_INNER_RADIUS);
        assert_eq!(
            slices[0].path,
            "M 100 50 A 50 50 0 0 1 0 50 L 20 50 A 30 30 0 0 0 80 50 Z"
        );
    }

    #[test]
    fn non_positive_total_yields_no_slices() {
        assert!(pie_slices(&data(&[0.0, -1.0]), 0.0).is_empty());
        assert!(pie_slices(&[], 0.0).is_empty());
    }

    #[test]
    fn fills_default_to_spread_hues() {
        let mut values = data(&[1.0, 1.0, 1.0]);
        values[1] = values[1].clone().with_color("#ff0000");
        let slices = pie_slices(&values, 0.0);
        assert_eq!(slices[0].fill, "hsl(0, 70%, 50%)");
        assert_eq!(slices[1].fill, "#ff0000");
        assert_eq!(slices[2].fill, "hsl(240, 70%, 50%)");
    }

    #[test]
    fn unknown_kind_renders_as_bar() {
        assert_eq!(ChartKind::parse_lenient("radar"), ChartKind::Bar);
        assert_eq!(ChartKind::parse_lenient("donut"), ChartKind::Donut);
    }
}
