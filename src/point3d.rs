use crate::data::{Dataset, EMPTY_CELL};
use crate::ir::{NormalizedPoint3D, SeriesPoint3D};
use crate::palette;

/// Map every row to a 3D point. Coercion rules keep the output finite for
/// arbitrary spreadsheet junk: y and z default to 0 when unparseable or
/// unselected, x falls back to the row's 0-based index. Point color is a
/// stepped hue off the row index, stable across re-renders.
pub fn project_points(
    data: &Dataset,
    x_axis: &str,
    y_axis: &str,
    z_axis: Option<&str>,
) -> Vec<SeriesPoint3D> {
    let x_idx = data.column_index(x_axis);
    let y_idx = data.column_index(y_axis);
    let z_idx = z_axis.and_then(|z| data.column_index(z));

    data.rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cell_at = |idx: Option<usize>| idx.and_then(|c| row.get(c)).unwrap_or(&EMPTY_CELL);

            let x_cell = cell_at(x_idx);
            let label = if x_cell.is_falsy() {
                format!("Item {}", i + 1)
            } else {
                x_cell.display()
            };

            SeriesPoint3D {
                x: x_cell.as_number().unwrap_or(i as f64),
                y: cell_at(y_idx).as_number().unwrap_or(0.0),
                z: cell_at(z_idx).as_number().unwrap_or(0.0),
                label,
                color: palette::hue_color(i, palette::BAR_HUE_STEP),
            }
        })
        .collect()
}

/// Rescale y/z so the dataset's largest magnitude sits at `ceiling`, the
/// shared vertical scale for every 3D chart kind. An all-zero dataset must
/// normalize to all zeros — never divide by zero or emit NaN.
pub fn normalize_points(points: &[SeriesPoint3D], ceiling: f64) -> Vec<NormalizedPoint3D> {
    let max_magnitude = points
        .iter()
        .map(|p| p.y.max(p.z))
        .fold(f64::NEG_INFINITY, f64::max);

    points
        .iter()
        .map(|p| {
            let (y, z) = if max_magnitude == 0.0 {
                (0.0, 0.0)
            } else {
                (p.y / max_magnitude * ceiling, p.z / max_magnitude * ceiling)
            };
            NormalizedPoint3D {
                x: p.x,
                y,
                z,
                label: p.label.clone(),
                color: p.color.clone(),
            }
        })
        .collect()
}
