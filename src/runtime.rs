// Engine entry point: one pure (Dataset, Selection) -> DerivedView pass

use crate::classify::{ColumnClasses, ColumnClassifier, FirstRowHeuristic};
use crate::data::Dataset;
use crate::ir::DerivedView;
use crate::parser::ast::{ChartKind, Selection};
use crate::resolve::{resolve_axes, resolve_column};
use crate::EngineOptions;
use crate::{point3d, series2d, surface};
use log::debug;

/// The transformation engine. Holds configuration only — every call to
/// [`Engine::derive_view`] recomputes the full derived structure from its
/// inputs, so a new Dataset or selection never reuses stale state.
pub struct Engine {
    classifier: Box<dyn ColumnClassifier>,
    options: EngineOptions,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_classifier(Box::new(FirstRowHeuristic))
    }

    /// Swap the column-type inference strategy without touching any
    /// generator call site.
    pub fn with_classifier(classifier: Box<dyn ColumnClassifier>) -> Self {
        Engine {
            classifier,
            options: EngineOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    /// Column classes for the host's axis selectors.
    pub fn classify(&self, data: &Dataset) -> ColumnClasses {
        self.classifier.classify(data)
    }

    /// Derive the renderer-ready structure for the active chart kind.
    /// Never fails: malformed values coerce to defined fallbacks, and an
    /// empty dataset or unusable selection yields [`DerivedView::Empty`].
    pub fn derive_view(&self, data: &Dataset, selection: &Selection) -> DerivedView {
        if data.is_empty() {
            debug!("no rows, nothing to derive");
            return DerivedView::Empty;
        }

        let classes = self.classifier.classify(data);
        debug!(
            "deriving {:?} view over {} rows ({} numeric / {} categorical columns)",
            selection.chart,
            data.len(),
            classes.numeric.len(),
            classes.categorical.len()
        );

        match selection.chart {
            ChartKind::Pie | ChartKind::Doughnut => {
                self.derive_2d(selection, &classes, |column| {
                    series2d::frequency_series(data, column)
                })
            }
            ChartKind::Bar => self.derive_2d(selection, &classes, |column| {
                series2d::bar_series(data, column, &classes)
            }),
            ChartKind::Line => self.derive_2d(selection, &classes, |column| {
                series2d::line_series(data, column, &classes, self.options.line_series_cap)
            }),
            ChartKind::Bar3d | ChartKind::Scatter3d => {
                match self.normalized_points(data, selection, &classes) {
                    Some(points) => DerivedView::Points3d(points),
                    None => DerivedView::Empty,
                }
            }
            ChartKind::Surface3d => self
                .normalized_points(data, selection, &classes)
                .and_then(|points| surface::build_surface(&points, self.options.normalize_ceiling))
                .map(DerivedView::Surface3d)
                .unwrap_or(DerivedView::Empty),
        }
    }

    fn derive_2d<F>(&self, selection: &Selection, classes: &ColumnClasses, generate: F) -> DerivedView
    where
        F: FnOnce(&str) -> Option<crate::ir::ChartSeriesSet>,
    {
        match resolve_column(selection.column.as_deref(), classes) {
            Some(column) => generate(&column)
                .map(DerivedView::Series2d)
                .unwrap_or(DerivedView::Empty),
            None => {
                debug!("column selection unusable, reporting no chart");
                DerivedView::Empty
            }
        }
    }

    fn normalized_points(
        &self,
        data: &Dataset,
        selection: &Selection,
        classes: &ColumnClasses,
    ) -> Option<Vec<crate::ir::NormalizedPoint3D>> {
        let axes = resolve_axes(selection, classes)?;
        let points = point3d::project_points(data, &axes.x, &axes.y, axes.z.as_deref());
        Some(point3d::normalize_points(
            &points,
            self.options.normalize_ceiling,
        ))
    }
}
