//! Color mapping for heatmap rendering.
//!
//! A "mako"-style sequential colormap: near-black through deep indigo and
//! blue into teal, ending at pale mint. Dark cells read as cheap iterations,
//! bright cells as expensive ones.

use plotters::style::RGBColor;

/// Map a normalized value (0-1) to a mako-style color.
///
/// Values outside the range are clamped.
pub fn mako(value: f64) -> RGBColor {
    let t = value.clamp(0.0, 1.0);

    let (r, g, b) = if t < 0.2 {
        // Near-black to deep indigo
        let s = t / 0.2;
        (0.02 + s * 0.13, 0.02 + s * 0.08, 0.04 + s * 0.28)
    } else if t < 0.4 {
        // Deep indigo to blue
        let s = (t - 0.2) / 0.2;
        (0.15 + s * 0.06, 0.10 + s * 0.20, 0.32 + s * 0.24)
    } else if t < 0.6 {
        // Blue to teal
        let s = (t - 0.4) / 0.2;
        (0.21 + s * 0.01, 0.30 + s * 0.22, 0.56 + s * 0.03)
    } else if t < 0.8 {
        // Teal to sea green
        let s = (t - 0.6) / 0.2;
        (0.22 + s * 0.13, 0.52 + s * 0.21, 0.59 + s * 0.02)
    } else {
        // Sea green to pale mint
        let s = (t - 0.8) / 0.2;
        (0.35 + s * 0.51, 0.73 + s * 0.23, 0.61 + s * 0.29)
    };

    RGBColor(
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
    )
}

/// Fixed per-algorithm series colors for the bar and line charts.
pub const SERIES_COLORS: [RGBColor; 3] = [
    RGBColor(66, 133, 244),  // blue
    RGBColor(52, 168, 83),   // green
    RGBColor(251, 140, 0),   // orange
];
