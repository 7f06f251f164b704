//! Row-indexed table of simulation output

use crate::errors::{AtmoError, Result};
use chrono::{DateTime, Utc};
use ndarray::{Array2, ArrayView1};

/// A 2-D numeric block with named columns and one timestamp per row
#[derive(Debug, Clone, PartialEq)]
pub struct TimeTable {
    columns: Vec<String>,
    index: Vec<DateTime<Utc>>,
    data: Array2<f64>,
}

impl TimeTable {
    /// Assemble a table, checking that names, index and data agree in size.
    pub fn new(
        var: &str,
        columns: Vec<String>,
        index: Vec<DateTime<Utc>>,
        data: Array2<f64>,
    ) -> Result<Self> {
        check_columns(var, &columns, &data)?;
        if index.len() != data.nrows() {
            return Err(AtmoError::IndexLengthMismatch {
                var: var.to_string(),
                index: index.len(),
                rows: data.nrows(),
            });
        }
        Ok(Self {
            columns,
            index,
            data,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn time_index(&self) -> &[DateTime<Utc>] {
        &self.index
    }

    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// Position of the first column with this name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.column_index(name).map(|i| self.data.column(i))
    }

    /// Row values and their timestamp
    pub fn row(&self, i: usize) -> Option<(DateTime<Utc>, ArrayView1<'_, f64>)> {
        let time = *self.index.get(i)?;
        Some((time, self.data.row(i)))
    }

    /// Consume the table, returning names, index and data
    pub fn into_parts(self) -> (Vec<String>, Vec<DateTime<Utc>>, Array2<f64>) {
        (self.columns, self.index, self.data)
    }
}

/// Fails unless there is exactly one name per array column.
pub fn check_columns(var: &str, columns: &[String], data: &Array2<f64>) -> Result<()> {
    if columns.len() != data.ncols() {
        return Err(AtmoError::ColumnMismatch {
            var: var.to_string(),
            columns: columns.len(),
            width: data.ncols(),
        });
    }
    Ok(())
}
