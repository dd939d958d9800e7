// Deterministic color assignment for series, points, and surface vertices

/// Fixed cyclic palette for frequency charts (pie/doughnut).
pub const CLASSIC_8: [&str; 8] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#FF6384", "#C9CBCF",
];

/// Hue step for bar series and per-row 3D point colors.
pub const BAR_HUE_STEP: u32 = 60;

/// Hue step for line series; wider spacing since at most three are drawn.
pub const LINE_HUE_STEP: u32 = 120;

/// Cycle the classic palette across `n` slices, index modulo palette length.
pub fn cycle_classic(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| CLASSIC_8[i % CLASSIC_8.len()].to_string())
        .collect()
}

/// Stepped-hue series color, stable across re-renders of the same data.
pub fn hue_color(index: usize, step: u32) -> String {
    format!("hsl({}, 70%, 50%)", hue_degrees(index, step))
}

/// Matching translucent fill for line charts.
pub fn hue_fill(index: usize, step: u32) -> String {
    format!("hsla({}, 70%, 50%, 0.2)", hue_degrees(index, step))
}

fn hue_degrees(index: usize, step: u32) -> u32 {
    ((index as u64 * step as u64) % 360) as u32
}

/// Height-ramp vertex color for surface charts. Fractional hue runs from
/// 0.7 (low) to 0.0 (high) at saturation 0.8 and lightness 0.5, so every
/// surface shares the same blue-to-red ramp regardless of absolute data
/// magnitude; heights arrive already normalized onto the shared ceiling.
pub fn vertex_color(height: f64, ceiling: f64) -> String {
    let t = if ceiling == 0.0 { 0.0 } else { height / ceiling };
    let hue = (0.7 - 0.7 * t).rem_euclid(1.0);
    let (r, g, b) = hsl_to_rgb(hue, 0.8, 0.5);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Fractional HSL to 8-bit RGB.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);
    (
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_at_palette_length() {
        let colors = cycle_classic(10);
        assert_eq!(colors.len(), 10);
        assert_eq!(colors[0], CLASSIC_8[0]);
        assert_eq!(colors[8], CLASSIC_8[0]);
        assert_eq!(colors[9], CLASSIC_8[1]);
    }

    #[test]
    fn test_hue_color_steps_and_wraps() {
        assert_eq!(hue_color(0, BAR_HUE_STEP), "hsl(0, 70%, 50%)");
        assert_eq!(hue_color(2, BAR_HUE_STEP), "hsl(120, 70%, 50%)");
        assert_eq!(hue_color(6, BAR_HUE_STEP), "hsl(0, 70%, 50%)");
        assert_eq!(hue_color(1, LINE_HUE_STEP), "hsl(120, 70%, 50%)");
    }

    #[test]
    fn test_hue_fill_matches_color_hue() {
        assert_eq!(hue_fill(1, LINE_HUE_STEP), "hsla(120, 70%, 50%, 0.2)");
    }

    #[test]
    fn test_vertex_color_is_pure_in_height() {
        assert_eq!(vertex_color(2.5, 5.0), vertex_color(2.5, 5.0));
        assert_ne!(vertex_color(0.0, 5.0), vertex_color(5.0, 5.0));
    }

    #[test]
    fn test_vertex_color_endpoints() {
        // Height at the ceiling lands on hue 0 (red).
        assert_eq!(vertex_color(5.0, 5.0), "#e61a1a");
        // Height 0 keeps the low-end hue 0.7 (blue).
        assert_eq!(vertex_color(0.0, 5.0), "#421ae6");
    }
}
