use super::{format_value, svg_text};
use crate::models::UserPerformance;
use serde::Serialize;
use std::f64::consts::PI;

const SIZE: f64 = 258.0;
const CENTER: f64 = SIZE / 2.0;
const RADIUS: f64 = 80.0;
const RINGS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPoint {
    pub label: String,
    pub value: f64,
}

/// Display label for a performance kind as named in the source.
pub fn kind_label(kind: &str) -> String {
    match kind {
        "cardio" => "Cardio".to_string(),
        "energy" => "Energie".to_string(),
        "endurance" => "Endurance".to_string(),
        "strength" => "Force".to_string(),
        "speed" => "Vitesse".to_string(),
        "intensity" => "Intensité".to_string(),
        other => other.to_string(),
    }
}

pub fn radar_points(record: &UserPerformance) -> Vec<RadarPoint> {
    record
        .data
        .iter()
        .map(|point| RadarPoint {
            label: record
                .kind_name(point.kind)
                .map(kind_label)
                .unwrap_or_else(|| point.kind.to_string()),
            value: point.value,
        })
        .collect()
}

fn vertex(index: usize, count: usize, distance: f64) -> (f64, f64) {
    let angle = -PI / 2.0 + 2.0 * PI * index as f64 / count as f64;
    (CENTER + distance * angle.cos(), CENTER + distance * angle.sin())
}

fn polygon(count: usize, distance: impl Fn(usize) -> f64) -> String {
    (0..count)
        .map(|i| {
            let (x, y) = vertex(i, count, distance(i));
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_svg(record: &UserPerformance) -> String {
    let points = radar_points(record);
    let count = points.len();
    let max = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);

    let mut svg = String::new();
    svg.push_str(&format!(
        r##"<svg class="chart chart-performance" viewBox="0 0 {SIZE} {SIZE}" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Performance">
<rect width="{SIZE}" height="{SIZE}" rx="5" fill="#282D30"/>"##
    ));
    svg.push('\n');

    if count < 3 {
        svg.push_str("</svg>");
        return svg;
    }

    for ring in 1..=RINGS {
        let distance = RADIUS * ring as f64 / RINGS as f64;
        svg.push_str(&format!(
            r##"<polygon points="{}" fill="none" stroke="#FFFFFF"/>"##,
            polygon(count, |_| distance)
        ));
        svg.push('\n');
    }

    svg.push_str(&format!(
        r##"<polygon class="values" points="{}" fill="#FF0101" fill-opacity="0.7"/>"##,
        polygon(count, |i| if max > 0.0 { RADIUS * points[i].value / max } else { 0.0 })
    ));
    svg.push('\n');

    for (index, point) in points.iter().enumerate() {
        let (x, y) = vertex(index, count, RADIUS + 22.0);
        svg.push_str(&format!(
            r##"<text x="{x:.1}" y="{y:.1}" font-size="12" fill="#FFFFFF" text-anchor="middle" dominant-baseline="central"><title>{value}</title>{label}</text>"##,
            value = format_value(point.value),
            label = svg_text(&point.label),
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>");
    svg
}
