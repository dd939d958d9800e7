// Selection model: the user's chart kind and axis/column choices

use serde::{Deserialize, Serialize};

/// The chart kinds the engine derives data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Pie,
    Doughnut,
    Bar,
    Line,
    Bar3d,
    Scatter3d,
    Surface3d,
}

impl ChartKind {
    pub fn is_3d(&self) -> bool {
        matches!(
            self,
            ChartKind::Bar3d | ChartKind::Scatter3d | ChartKind::Surface3d
        )
    }
}

/// One render cycle's worth of user choices. Every field except the chart
/// kind starts unset; an unset or unknown column resolves to "no chart",
/// never an error. Hosts embedding the engine build this directly; the CLI
/// builds it from a chart-spec string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub chart: ChartKind,
    /// Column driving 2D charts: the aggregation column for pie/doughnut,
    /// the label column for bar/line.
    #[serde(default)]
    pub column: Option<String>,
    #[serde(default)]
    pub x: Option<String>,
    #[serde(default)]
    pub y: Option<String>,
    #[serde(default)]
    pub z: Option<String>,
}
