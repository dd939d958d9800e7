use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::Read;

/// A single scalar table value.
///
/// Type is never declared by the source: JSON numbers arrive as `Number`,
/// text as `Text`, null/missing as `Empty`. CSV fields stay `Text` until the
/// classifier inspects them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

/// Stand-in for cells missing from ragged rows.
pub(crate) static EMPTY_CELL: Cell = Cell::Empty;

impl Cell {
    /// Numeric reading: a number cell, or text that parses fully as `f64`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
            Cell::Empty => None,
        }
    }

    /// Truthiness rule shared by frequency aggregation and placeholder
    /// labels: absent values, blank text, and zero carry no visual weight.
    pub fn is_falsy(&self) -> bool {
        match self {
            Cell::Number(n) => *n == 0.0,
            Cell::Text(s) => s.is_empty(),
            Cell::Empty => true,
        }
    }

    /// Stringify for labels and aggregation keys.
    pub fn display(&self) -> String {
        match self {
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Empty => String::new(),
        }
    }
}

/// One uploaded table: ordered headers plus rows of scalar cells.
/// Built once per fetch; the engine only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    /// Create a Dataset from a JSON array of flat objects, the shape the
    /// data-fetch collaborator delivers. Headers come from the first
    /// object's keys; an empty array is a valid empty Dataset.
    pub fn from_json(value: &Value) -> Result<Self> {
        let array = value
            .as_array()
            .ok_or_else(|| anyhow!("Input data must be a JSON array of objects"))?;

        let Some(first) = array.first() else {
            return Ok(Dataset::default());
        };
        let first_obj = first
            .as_object()
            .ok_or_else(|| anyhow!("Items in array must be objects"))?;

        let headers: Vec<String> = first_obj.keys().cloned().collect();

        let mut rows = Vec::with_capacity(array.len());
        for item in array {
            let obj = item
                .as_object()
                .ok_or_else(|| anyhow!("Items in array must be objects"))?;

            let mut row = Vec::with_capacity(headers.len());
            for header in &headers {
                let cell = match obj.get(header) {
                    Some(Value::String(s)) => Cell::Text(s.clone()),
                    Some(Value::Number(n)) => {
                        n.as_f64().map(Cell::Number).unwrap_or(Cell::Empty)
                    }
                    Some(Value::Bool(b)) => Cell::Text(b.to_string()),
                    Some(Value::Null) | None => Cell::Empty,
                    Some(_) => {
                        return Err(anyhow!("Unsupported value type for field '{}'", header))
                    }
                };
                row.push(cell);
            }
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// Read a Dataset from CSV with headers in the first record. Fields are
    /// kept as text (blank fields become `Empty`); type inference happens
    /// downstream in the classifier.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()
            .context("Failed to read CSV headers")?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record.context("Failed to read CSV record")?;
            let row = record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(field.to_string())
                    }
                })
                .collect();
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name; first occurrence wins when
    /// headers repeat.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}
