use std::f64::consts::PI;

const SIZE: f64 = 258.0;
const RADIUS: f64 = 80.0;

/// Whole percentage of the daily goal, clamped to `0..=100`.
pub fn score_percent(score: f64) -> u32 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u32
}

pub fn render_svg(score: f64) -> String {
    let percent = score_percent(score);
    let circumference = 2.0 * PI * RADIUS;
    let filled = circumference * f64::from(percent) / 100.0;
    let center = SIZE / 2.0;

    format!(
        r##"<svg class="chart chart-score" viewBox="0 0 {SIZE} {SIZE}" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Score">
<rect width="{SIZE}" height="{SIZE}" rx="5" fill="#FBFBFB"/>
<text x="30" y="40" font-size="15" font-weight="500" fill="#20253A">Score</text>
<circle cx="{center}" cy="{center}" r="{RADIUS}" fill="#FFFFFF"/>
<circle cx="{center}" cy="{center}" r="{RADIUS}" fill="none" stroke="#FF0000" stroke-width="10" stroke-linecap="round" stroke-dasharray="{filled:.1} {circumference:.1}" transform="rotate(-90 {center} {center})"/>
<text x="{center}" y="{value_y}" font-size="26" font-weight="700" fill="#282D30" text-anchor="middle">{percent}%</text>
<text x="{center}" y="{caption_y}" font-size="16" fill="#74798C" text-anchor="middle">de votre</text>
<text x="{center}" y="{objective_y}" font-size="16" fill="#74798C" text-anchor="middle">objectif</text>
</svg>"##,
        value_y = center - 8.0,
        caption_y = center + 18.0,
        objective_y = center + 40.0,
    )
}
