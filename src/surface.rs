use crate::ir::{NormalizedPoint3D, SurfaceChart, SurfaceMarker};
use crate::palette;

/// Reshape the normalized point set into a square height field of side
/// `ceil(sqrt(N))`. Cell (i, j) holds point `i*side + j`; cells past the
/// last point are zero-filled. Placement is row-major by point index — the
/// surface is a layout over row order, not a spatial interpolation by x/y
/// proximity. An empty point set means no surface to build.
pub fn build_surface(points: &[NormalizedPoint3D], ceiling: f64) -> Option<SurfaceChart> {
    if points.is_empty() {
        return None;
    }

    let side = (points.len() as f64).sqrt().ceil() as usize;

    let mut heights = Vec::with_capacity(side);
    let mut colors = Vec::with_capacity(side);
    for i in 0..side {
        let mut height_row = Vec::with_capacity(side);
        let mut color_row = Vec::with_capacity(side);
        for j in 0..side {
            let height = points.get(i * side + j).map(|p| p.y).unwrap_or(0.0);
            color_row.push(palette::vertex_color(height, ceiling));
            height_row.push(height);
        }
        heights.push(height_row);
        colors.push(color_row);
    }

    // Marker overlay: grids never carry more than side*side markers.
    let markers = points
        .iter()
        .take(side * side)
        .enumerate()
        .map(|(i, p)| SurfaceMarker {
            row: i / side,
            col: i % side,
            height: p.y,
        })
        .collect();

    Some(SurfaceChart {
        side,
        heights,
        colors,
        markers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_points(heights: &[f64]) -> Vec<NormalizedPoint3D> {
        heights
            .iter()
            .enumerate()
            .map(|(i, &y)| NormalizedPoint3D {
                x: i as f64,
                y,
                z: 0.0,
                label: format!("Item {}", i + 1),
                color: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_side_is_ceil_sqrt_of_count() {
        for (n, expected) in [(1, 1), (2, 2), (4, 2), (5, 3), (9, 3), (10, 4)] {
            let grid = build_surface(&make_points(&vec![1.0; n]), 5.0).unwrap();
            assert_eq!(grid.side, expected, "n = {}", n);
            assert_eq!(grid.heights.len(), expected);
            assert!(grid.heights.iter().all(|row| row.len() == expected));
        }
    }

    #[test]
    fn test_row_major_placement_with_zero_fill() {
        let grid = build_surface(&make_points(&[4.0, 2.0, 1.0, 3.0, 5.0]), 5.0).unwrap();
        assert_eq!(grid.heights[0], vec![4.0, 2.0, 1.0]);
        assert_eq!(grid.heights[1], vec![3.0, 5.0, 0.0]);
        assert_eq!(grid.heights[2], vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_input_builds_nothing() {
        assert!(build_surface(&[], 5.0).is_none());
    }

    #[test]
    fn test_vertex_color_depends_on_height_only() {
        let grid = build_surface(&make_points(&[2.0, 2.0, 5.0, 0.0]), 5.0).unwrap();
        // Equal heights share a color regardless of position.
        assert_eq!(grid.colors[0][0], grid.colors[0][1]);
        // Zero-filled cells match any other zero-height vertex.
        assert_eq!(grid.colors[1][1], palette::vertex_color(0.0, 5.0));
        assert_ne!(grid.colors[0][0], grid.colors[1][0]);
    }

    #[test]
    fn test_markers_sit_at_their_grid_cells() {
        let grid = build_surface(&make_points(&[4.0, 2.0, 1.0, 3.0, 5.0]), 5.0).unwrap();
        assert_eq!(grid.markers.len(), 5);
        assert_eq!(grid.markers[0].row, 0);
        assert_eq!(grid.markers[0].col, 0);
        assert_eq!(grid.markers[4].row, 1);
        assert_eq!(grid.markers[4].col, 1);
        assert_eq!(grid.markers[4].height, 5.0);
    }
}
