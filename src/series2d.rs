use crate::classify::ColumnClasses;
use crate::data::{Dataset, EMPTY_CELL};
use crate::ir::{ChartSeriesSet, Dataset2D, SeriesColor};
use crate::palette;
use indexmap::IndexMap;

/// Frequency aggregation for pie and doughnut charts: distinct non-falsy
/// values of the chosen column, counted in first-seen order. Falsy cells are
/// skipped by policy — zero and empty values carry no visual weight in a
/// frequency chart — so the counts may sum to less than the row count.
pub fn frequency_series(data: &Dataset, column: &str) -> Option<ChartSeriesSet> {
    let idx = data.column_index(column)?;
    if data.is_empty() {
        return None;
    }

    let mut counts: IndexMap<String, u64> = IndexMap::new();
    for row in &data.rows {
        let cell = row.get(idx).unwrap_or(&EMPTY_CELL);
        if cell.is_falsy() {
            continue;
        }
        *counts.entry(cell.display()).or_insert(0) += 1;
    }

    let labels: Vec<String> = counts.keys().cloned().collect();
    let values: Vec<f64> = counts.values().map(|&c| c as f64).collect();
    let colors = palette::cycle_classic(labels.len());

    Some(ChartSeriesSet {
        labels,
        datasets: vec![Dataset2D {
            label: column.to_string(),
            values,
            color: SeriesColor::Palette(colors),
            fill: None,
        }],
    })
}

/// Bar chart series: one per Numeric column in classifier order, uncapped.
pub fn bar_series(
    data: &Dataset,
    label_column: &str,
    classes: &ColumnClasses,
) -> Option<ChartSeriesSet> {
    numeric_series(data, label_column, &classes.numeric, palette::BAR_HUE_STEP, false)
}

/// Line chart series: capped to the first `cap` Numeric columns to bound
/// visual clutter, with a translucent fill per series.
pub fn line_series(
    data: &Dataset,
    label_column: &str,
    classes: &ColumnClasses,
    cap: usize,
) -> Option<ChartSeriesSet> {
    let columns: Vec<String> = classes.numeric.iter().take(cap).cloned().collect();
    numeric_series(data, label_column, &columns, palette::LINE_HUE_STEP, true)
}

/// Multi-series numeric extraction shared by bar and line. One label per
/// row (placeholder when the label cell is falsy), one series per numeric
/// column with unparseable values coerced to 0. No numeric columns means
/// no chart, not an error.
fn numeric_series(
    data: &Dataset,
    label_column: &str,
    numeric_columns: &[String],
    hue_step: u32,
    fill: bool,
) -> Option<ChartSeriesSet> {
    if data.is_empty() || numeric_columns.is_empty() {
        return None;
    }
    let label_idx = data.column_index(label_column)?;

    let labels: Vec<String> = data
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cell = row.get(label_idx).unwrap_or(&EMPTY_CELL);
            if cell.is_falsy() {
                format!("Row {}", i + 1)
            } else {
                cell.display()
            }
        })
        .collect();

    let mut datasets = Vec::with_capacity(numeric_columns.len());
    for (series_idx, column) in numeric_columns.iter().enumerate() {
        let idx = data.column_index(column)?;
        let values: Vec<f64> = data
            .rows
            .iter()
            .map(|row| {
                row.get(idx)
                    .unwrap_or(&EMPTY_CELL)
                    .as_number()
                    .unwrap_or(0.0)
            })
            .collect();

        datasets.push(Dataset2D {
            label: column.clone(),
            values,
            color: SeriesColor::Solid(palette::hue_color(series_idx, hue_step)),
            fill: fill.then(|| palette::hue_fill(series_idx, hue_step)),
        });
    }

    Some(ChartSeriesSet { labels, datasets })
}
