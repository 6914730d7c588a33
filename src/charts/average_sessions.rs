use super::{format_value, Axis};
use crate::models::UserAverageSessions;
use chrono::Weekday;
use serde::Serialize;

pub const TITLE: &str = "Durée moyenne des sessions";

const SIZE: f64 = 258.0;
const PLOT_LEFT: f64 = 14.0;
const PLOT_RIGHT: f64 = 244.0;
const PLOT_TOP: f64 = 90.0;
const PLOT_BOTTOM: f64 = 200.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionPoint {
    pub day: &'static str,
    pub minutes: f64,
}

/// French weekday initial for a 1-based day number (1 is Monday).
pub fn weekday_initial(day: u8) -> &'static str {
    let Some(weekday) = day.checked_sub(1).and_then(|index| Weekday::try_from(index).ok()) else {
        return "?";
    };
    match weekday {
        Weekday::Mon => "L",
        Weekday::Tue | Weekday::Wed => "M",
        Weekday::Thu => "J",
        Weekday::Fri => "V",
        Weekday::Sat => "S",
        Weekday::Sun => "D",
    }
}

pub fn session_points(record: &UserAverageSessions) -> Vec<SessionPoint> {
    record
        .sessions
        .iter()
        .map(|session| SessionPoint {
            day: weekday_initial(session.day),
            minutes: session.session_length,
        })
        .collect()
}

pub fn render_svg(record: &UserAverageSessions) -> String {
    let points = session_points(record);
    let axis = Axis::from_zero(points.iter().map(|p| p.minutes), 0.2);
    let step = if points.len() > 1 {
        (PLOT_RIGHT - PLOT_LEFT) / (points.len() - 1) as f64
    } else {
        0.0
    };
    let coords: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            (
                PLOT_LEFT + step * i as f64,
                PLOT_BOTTOM - axis.scale(p.minutes, PLOT_BOTTOM - PLOT_TOP),
            )
        })
        .collect();

    let mut svg = String::new();
    svg.push_str(&format!(
        r##"<svg class="chart chart-sessions" viewBox="0 0 {SIZE} {SIZE}" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="{TITLE}">
<style>.point .tooltip{{visibility:hidden}}.point:hover .tooltip{{visibility:visible}}</style>
<rect width="{SIZE}" height="{SIZE}" rx="5" fill="#FF0000"/>
<text x="34" y="40" font-size="15" font-weight="500" fill="#FFFFFF" opacity="0.6">Durée moyenne des</text>
<text x="34" y="64" font-size="15" font-weight="500" fill="#FFFFFF" opacity="0.6">sessions</text>
"##
    ));

    let line = coords
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");
    svg.push_str(&format!(
        r##"<polyline points="{line}" fill="none" stroke="#FFFFFF" stroke-width="2" opacity="0.8"/>"##
    ));
    svg.push('\n');

    for (point, (x, y)) in points.iter().zip(&coords) {
        let tooltip_x = if x + 47.0 > SIZE { x - 47.0 } else { x + 8.0 };
        svg.push_str(&format!(
            r##"<g class="point"><circle cx="{x:.1}" cy="{y:.1}" r="4" fill="#FFFFFF"/><text x="{x:.1}" y="{ly}" font-size="12" fill="#FFFFFF" opacity="0.6" text-anchor="middle">{day}</text><g class="tooltip"><rect x="{tooltip_x:.1}" y="{ty:.1}" width="39" height="25" fill="#FFFFFF"/><text x="{tx:.1}" y="{tt:.1}" font-size="8" text-anchor="middle">{minutes} min</text></g></g>
"##,
            ly = PLOT_BOTTOM + 40.0,
            day = point.day,
            ty = y - 30.0,
            tx = tooltip_x + 19.5,
            tt = y - 14.0,
            minutes = format_value(point.minutes),
        ));
    }

    svg.push_str("</svg>");
    svg
}
