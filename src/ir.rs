use serde::Serialize;

// =============================================================================
// 2D derived structures
// =============================================================================

/// Solid series color, or an ordered per-slice palette for frequency charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesColor {
    Solid(String),
    Palette(Vec<String>),
}

/// One renderable series; `values` aligns 1:1 with the owning set's labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset2D {
    pub label: String,
    pub values: Vec<f64>,
    pub color: SeriesColor,
    /// Translucent area fill, emitted for line series only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

/// Chart-ready 2D data: parallel label and series arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeriesSet {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset2D>,
}

// =============================================================================
// 3D derived structures
// =============================================================================

/// One row mapped into 3D space. Coordinates are always finite: unparseable
/// y/z coerce to 0, unparseable x to the row's 0-based index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub label: String,
    pub color: String,
}

/// A `SeriesPoint3D` with y/z rescaled so the dataset's largest magnitude
/// sits at the shared vertical ceiling. A distinct type so the surface
/// builder can only be fed normalized input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPoint3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub label: String,
    pub color: String,
}

/// Marker overlay entry: a normalized point pinned to its grid cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceMarker {
    pub row: usize,
    pub col: usize,
    pub height: f64,
}

/// Square height field of side `ceil(sqrt(N))`. Placement is row-major by
/// point index, not spatial binning; cells past the last point are zero.
/// `colors[i][j]` is a pure function of `heights[i][j]` alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceChart {
    pub side: usize,
    pub heights: Vec<Vec<f64>>,
    pub colors: Vec<Vec<String>>,
    pub markers: Vec<SurfaceMarker>,
}

// =============================================================================
// Engine output
// =============================================================================

/// Everything the rendering collaborator needs for the active chart kind.
/// `Empty` is the normal "nothing selected yet / nothing to draw" state,
/// never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", content = "data", rename_all = "snake_case")]
pub enum DerivedView {
    Empty,
    Series2d(ChartSeriesSet),
    Points3d(Vec<NormalizedPoint3D>),
    Surface3d(SurfaceChart),
}

impl DerivedView {
    pub fn is_empty(&self) -> bool {
        matches!(self, DerivedView::Empty)
    }
}
