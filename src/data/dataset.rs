use std::path::Path;

use crate::data::csv::{parse_csv, RawTable};
use crate::error::{Error, Result};

/// Labelled samples ready for training: one feature row and one class index
/// per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub inputs: Vec<Vec<f64>>,
    /// Class index of every row, in `[0, n_classes)`.
    pub labels: Vec<usize>,
    pub n_classes: usize,
    /// Raw class value behind each index, ascending. Empty when the dataset
    /// was built from indices directly.
    pub class_values: Vec<i64>,
}

impl Dataset {
    /// Validated constructor for already-indexed labels.
    pub fn new(inputs: Vec<Vec<f64>>, labels: Vec<usize>, n_classes: usize) -> Result<Dataset> {
        if inputs.len() != labels.len() {
            return Err(Error::dimension("dataset labels", inputs.len(), labels.len()));
        }
        if let Some(first) = inputs.first() {
            let width = first.len();
            if let Some(row) = inputs.iter().find(|row| row.len() != width) {
                return Err(Error::dimension("dataset row", width, row.len()));
            }
        }
        if let Some(&label) = labels.iter().find(|&&label| label >= n_classes) {
            return Err(Error::InvalidLabel { label, n_classes });
        }
        Ok(Dataset { inputs, labels, n_classes, class_values: Vec::new() })
    }

    /// Maps raw class values to contiguous indices in ascending order, so
    /// classes `{1, 2, 3}` become `{0, 1, 2}`.
    pub fn from_raw(table: RawTable) -> Dataset {
        let mut class_values = table.classes.clone();
        class_values.sort_unstable();
        class_values.dedup();

        let labels = table
            .classes
            .iter()
            .map(|c| class_values.binary_search(c).unwrap_or_default())
            .collect();

        Dataset {
            inputs: table.features,
            labels,
            n_classes: class_values.len(),
            class_values,
        }
    }

    pub fn from_csv_bytes(data: &[u8]) -> Result<Dataset> {
        Ok(Dataset::from_raw(parse_csv(data)?))
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Dataset> {
        let bytes = std::fs::read(path)?;
        Dataset::from_csv_bytes(&bytes)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Number of features per sample.
    pub fn input_dim(&self) -> usize {
        self.inputs.first().map_or(0, Vec::len)
    }

    /// Rows at `indices`, in that order.
    ///
    /// Panics if an index is out of range.
    pub fn subset(&self, indices: &[usize]) -> Dataset {
        Dataset {
            inputs: indices.iter().map(|&i| self.inputs[i].clone()).collect(),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
            n_classes: self.n_classes,
            class_values: self.class_values.clone(),
        }
    }

    /// Rescales every feature column to `[0, 1]` via (x − min) / (max − min).
    /// A constant column maps to 0.
    pub fn normalize_min_max(&mut self) {
        for col in 0..self.input_dim() {
            let (min, max) = self.inputs.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), row| {
                (lo.min(row[col]), hi.max(row[col]))
            });
            let range = max - min;
            for row in &mut self.inputs {
                row[col] = if range > 0.0 { (row[col] - min) / range } else { 0.0 };
            }
        }
    }
}
