//! SVG renderers for the dashboard widgets.
//!
//! Each submodule shapes one record type into a chart view and renders it as
//! a standalone `<svg>` string. Views are rebuilt on every render.

pub mod activity;
pub mod average_sessions;
pub mod key_data;
pub mod performance;
pub mod score;

use serde::Serialize;

/// Linear value range mapped onto a pixel length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
}

impl Axis {
    /// Smallest whole-number range covering `values`, widened by the paddings.
    pub fn fit(values: impl IntoIterator<Item = f64>, pad_below: f64, pad_above: f64) -> Self {
        let (lo, hi) = values
            .into_iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if !lo.is_finite() {
            return Self { min: 0.0, max: 1.0 };
        }
        let min = (lo - pad_below).floor();
        let max = (hi + pad_above).ceil();
        if max > min {
            Self { min, max }
        } else {
            Self { min, max: min + 1.0 }
        }
    }

    /// Range from zero to the largest value plus `headroom` (a fraction).
    pub fn from_zero(values: impl IntoIterator<Item = f64>, headroom: f64) -> Self {
        let hi = values.into_iter().fold(0.0_f64, f64::max);
        let max = (hi * (1.0 + headroom)).ceil();
        Self {
            min: 0.0,
            max: if max > 0.0 { max } else { 1.0 },
        }
    }

    /// Distance from the axis origin for `value`, clamped to `0..=length`.
    pub fn scale(&self, value: f64, length: f64) -> f64 {
        let ratio = (value - self.min) / (self.max - self.min);
        ratio.clamp(0.0, 1.0) * length
    }

    /// `count` evenly spaced values from `min` to `max` inclusive.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![self.min];
        }
        let step = (self.max - self.min) / (count - 1) as f64;
        (0..count).map(|i| self.min + step * i as f64).collect()
    }
}

/// Number as a chart label: whole numbers without decimals, others to one place.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Text safe to embed in SVG markup: anything other than letters, digits and
/// spaces becomes a numeric character reference.
pub fn svg_text(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' {
                c.to_string()
            } else {
                format!("&#{};", u32::from(c))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_and_rounds_outwards() {
        let axis = Axis::fit([80.0, 76.0, 81.0], 1.0, 1.0);
        assert_eq!(axis, Axis { min: 75.0, max: 82.0 });
    }

    #[test]
    fn fit_handles_empty_and_flat_input() {
        assert_eq!(Axis::fit([], 1.0, 1.0), Axis { min: 0.0, max: 1.0 });
        assert_eq!(Axis::fit([5.0], 0.0, 0.0), Axis { min: 5.0, max: 6.0 });
    }

    #[test]
    fn scale_clamps_to_length() {
        let axis = Axis { min: 0.0, max: 100.0 };
        assert_eq!(axis.scale(50.0, 200.0), 100.0);
        assert_eq!(axis.scale(-10.0, 200.0), 0.0);
        assert_eq!(axis.scale(150.0, 200.0), 200.0);
    }

    #[test]
    fn ticks_include_both_ends() {
        let axis = Axis { min: 75.0, max: 81.0 };
        assert_eq!(axis.ticks(3), vec![75.0, 78.0, 81.0]);
    }

    #[test]
    fn format_value_drops_zero_fraction() {
        assert_eq!(format_value(68.0), "68");
        assert_eq!(format_value(68.4), "68.4");
        assert_eq!(format_value(250.0), "250");
    }

    #[test]
    fn svg_text_references_markup_characters() {
        assert_eq!(svg_text("Intensité"), "Intensité");
        assert_eq!(svg_text("<b>"), "&#60;b&#62;");
    }
}
