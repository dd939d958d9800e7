// Library exports for sheetviz

pub mod classify;
pub mod data;
pub mod ir;
pub mod palette;
pub mod parser;
pub mod point3d;
pub mod resolve;
pub mod runtime;
pub mod series2d;
pub mod surface;

use serde::Deserialize;

/// Engine tuning knobs. The defaults reproduce the fixed visual contract:
/// every 3D chart shares the 5.0 vertical ceiling, and line charts carry at
/// most three series.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineOptions {
    #[serde(default = "default_normalize_ceiling")]
    pub normalize_ceiling: f64,
    #[serde(default = "default_line_series_cap")]
    pub line_series_cap: usize,
}

fn default_normalize_ceiling() -> f64 { 5.0 }
fn default_line_series_cap() -> usize { 3 }

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            normalize_ceiling: 5.0,
            line_series_cap: 3,
        }
    }
}
