//! Geometry for the inline-SVG charts. Pure math, no DOM.

use std::f64::consts::TAU;

/// One doughnut slice. Angles are radians from 12 o'clock, clockwise.
///
/// Slices align index-wise with the payload's labels and colors; non-positive
/// values keep their index with a zero sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start: f64,
    pub sweep: f64,
}

pub fn doughnut_slices(values: &[f64]) -> Vec<Slice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|&value| {
            let sweep = if value > 0.0 { value / total * TAU } else { 0.0 };
            let slice = Slice { start, sweep };
            start += sweep;
            slice
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// SVG path for an annular slice.
pub fn annular_path(cx: f64, cy: f64, r_outer: f64, r_inner: f64, slice: Slice) -> String {
    // A full-circle arc degenerates in SVG; stop just short of closing.
    let sweep = slice.sweep.min(TAU - 1e-4);
    let end = slice.start + sweep;
    let large = if sweep > TAU / 2.0 { 1 } else { 0 };
    let (x0, y0) = polar(cx, cy, r_outer, slice.start);
    let (x1, y1) = polar(cx, cy, r_outer, end);
    let (x2, y2) = polar(cx, cy, r_inner, end);
    let (x3, y3) = polar(cx, cy, r_inner, slice.start);
    format!(
        "M {x0:.2} {y0:.2} A {r_outer:.2} {r_outer:.2} 0 {large} 1 {x1:.2} {y1:.2} \
         L {x2:.2} {y2:.2} A {r_inner:.2} {r_inner:.2} 0 {large} 0 {x3:.2} {y3:.2} Z"
    )
}

/// Vertical scale for the line chart. Always includes zero, so the axis base
/// is meaningful for signed net-change data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub max: f64,
}

pub fn value_scale(data: &[f64]) -> ValueScale {
    let mut min = 0.0_f64;
    let mut max = 0.0_f64;
    for &value in data {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    if (max - min).abs() < f64::EPSILON {
        // Flat all-zero series still needs a non-degenerate scale.
        max = min + 1.0;
    }
    ValueScale { min, max }
}

/// Pixel y for a value inside a box of `height` (y grows downward).
pub fn y_for(scale: ValueScale, value: f64, height: f64) -> f64 {
    let span = scale.max - scale.min;
    height - (value - scale.min) / span * height
}

/// Map the series into a width × height box.
pub fn line_points(data: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    if data.is_empty() {
        return Vec::new();
    }
    let scale = value_scale(data);
    let step = if data.len() > 1 {
        width / (data.len() - 1) as f64
    } else {
        0.0
    };
    data.iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = if data.len() == 1 {
                width / 2.0
            } else {
                step * i as f64
            };
            (x, y_for(scale, value, height))
        })
        .collect()
}

/// `points` attribute value for an SVG polyline.
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed path for the area fill under the line, down to the box bottom.
pub fn area_path(points: &[(f64, f64)], height: f64) -> String {
    let (Some((first_x, first_y)), Some((last_x, _))) = (points.first(), points.last()) else {
        return String::new();
    };
    let mut path = format!("M {first_x:.2} {first_y:.2}");
    for (x, y) in points.iter().skip(1) {
        path.push_str(&format!(" L {x:.2} {y:.2}"));
    }
    path.push_str(&format!(
        " L {last_x:.2} {height:.2} L {first_x:.2} {height:.2} Z"
    ));
    path
}

/// Evenly spaced axis tick values, max first.
pub fn tick_values(scale: ValueScale, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![scale.max, scale.min];
    }
    (0..count)
        .map(|i| scale.max - (scale.max - scale.min) * i as f64 / (count - 1) as f64)
        .collect()
}

/// Compact label for axis ticks and legends.
pub fn format_value(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_cover_the_full_circle() {
        let slices = doughnut_slices(&[1.0, 2.0, 3.0]);
        assert_eq!(slices.len(), 3);
        let sweep_sum: f64 = slices.iter().map(|s| s.sweep).sum();
        assert!((sweep_sum - TAU).abs() < 1e-9);
        assert_eq!(slices[0].start, 0.0);
        assert!((slices[1].start - slices[0].sweep).abs() < 1e-9);
    }

    #[test]
    fn non_positive_values_keep_their_index_with_zero_sweep() {
        let slices = doughnut_slices(&[2.0, 0.0, 2.0]);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[1].sweep, 0.0);
        let sweep_sum: f64 = slices.iter().map(|s| s.sweep).sum();
        assert!((sweep_sum - TAU).abs() < 1e-9);
    }

    #[test]
    fn all_zero_values_produce_no_slices() {
        assert!(doughnut_slices(&[0.0, 0.0]).is_empty());
        assert!(doughnut_slices(&[]).is_empty());
    }

    #[test]
    fn annular_path_is_well_formed() {
        let slices = doughnut_slices(&[1.0, 1.0]);
        let path = annular_path(120.0, 120.0, 100.0, 60.0, slices[0]);
        assert!(path.starts_with("M "));
        assert!(path.ends_with('Z'));
        assert_eq!(path.matches('A').count(), 2);
        assert!(!path.contains("NaN"));
    }

    #[test]
    fn full_circle_slice_does_not_degenerate() {
        let slices = doughnut_slices(&[5.0]);
        assert!((slices[0].sweep - TAU).abs() < 1e-9);
        let path = annular_path(120.0, 120.0, 100.0, 60.0, slices[0]);
        assert!(!path.contains("NaN"));
        // The sweep is clamped short of a full turn, so start and end of the
        // outer arc must not coincide.
        let start = polar(120.0, 120.0, 100.0, 0.0);
        let end = polar(120.0, 120.0, 100.0, TAU - 1e-4);
        assert!(start != end);
        assert_eq!(path.matches('A').count(), 2);
    }

    #[test]
    fn scale_always_includes_zero() {
        let positive = value_scale(&[3.0, 7.0]);
        assert_eq!(positive.min, 0.0);
        assert_eq!(positive.max, 7.0);

        let signed = value_scale(&[-4.0, 6.0]);
        assert_eq!(signed.min, -4.0);
        assert_eq!(signed.max, 6.0);

        let flat = value_scale(&[0.0, 0.0]);
        assert!(flat.max > flat.min);
    }

    #[test]
    fn line_points_map_extremes_to_box_edges() {
        let points = line_points(&[0.0, 10.0], 100.0, 50.0);
        assert_eq!(points[0], (0.0, 50.0));
        assert_eq!(points[1], (100.0, 0.0));
    }

    #[test]
    fn single_point_is_centered() {
        let points = line_points(&[5.0], 100.0, 50.0);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].0, 50.0);
    }

    #[test]
    fn zero_line_sits_between_signed_extremes() {
        let scale = value_scale(&[-5.0, 5.0]);
        assert_eq!(y_for(scale, 0.0, 100.0), 50.0);
    }

    #[test]
    fn points_attr_formats_pairs() {
        assert_eq!(
            points_attr(&[(0.0, 1.5), (2.25, 3.0)]),
            "0.00,1.50 2.25,3.00"
        );
    }

    #[test]
    fn area_path_closes_to_the_bottom() {
        let path = area_path(&[(0.0, 10.0), (50.0, 0.0)], 40.0);
        assert!(path.starts_with("M 0.00 10.00"));
        assert!(path.ends_with("L 50.00 40.00 L 0.00 40.00 Z"));
        assert_eq!(area_path(&[], 40.0), "");
    }

    #[test]
    fn tick_values_run_from_max_to_min() {
        let ticks = tick_values(ValueScale { min: -10.0, max: 10.0 }, 5);
        assert_eq!(ticks, vec![10.0, 5.0, 0.0, -5.0, -10.0]);
    }

    #[test]
    fn value_labels_drop_trailing_zero_fraction() {
        assert_eq!(format_value(12.0), "12");
        assert_eq!(format_value(-3.0), "-3");
        assert_eq!(format_value(2.5), "2.5");
    }
}
