//! Distance-matrix graph construction.
//!
//! Builds the tour graph from a comma-delimited city distance matrix. The
//! first line is a header with a leading empty cell followed by the city
//! names; each following line holds one city's name and its distances to
//! every city in header order. A zero distance means "no edge" and is
//! excluded. Each unordered pair is connected once, from the upper
//! triangle of the matrix; the lower triangle is ignored.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::graph::{Graph, VertexId};

/// Errors raised while reading a distance matrix.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// The matrix file could not be read.
    #[error("failed to read {path}")]
    Io {
        /// Path of the unreadable file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input has no header row or no city names.
    #[error("matrix is empty")]
    Empty,

    /// A data row has the wrong number of cells.
    #[error("row {row} has {found} cells, expected {expected} (city name plus one distance per city)")]
    RowLength {
        /// 1-based data row number.
        row: usize,
        /// Cells found in the row.
        found: usize,
        /// Cells expected.
        expected: usize,
    },

    /// The number of data rows does not match the header.
    #[error("matrix has {rows} distance rows for {cities} cities")]
    RowCount {
        /// Data rows found.
        rows: usize,
        /// Cities named in the header.
        cities: usize,
    },

    /// A distance cell could not be parsed as a number.
    #[error("row {row}, column {column}: invalid distance '{value}'")]
    BadDistance {
        /// 1-based data row number.
        row: usize,
        /// 1-based distance column number.
        column: usize,
        /// The offending cell text.
        value: String,
    },

    /// A distance cell is negative; edge weights must be non-negative.
    #[error("row {row}, column {column}: negative distance {value}")]
    NegativeDistance {
        /// 1-based data row number.
        row: usize,
        /// 1-based distance column number.
        column: usize,
        /// The offending distance.
        value: f64,
    },
}

/// Parses a distance matrix into a tour graph.
///
/// Blank lines are skipped. Cell values are trimmed before parsing.
///
/// # Examples
///
/// ```
/// let text = "\
/// ,a,b,c
/// a,0,1,2
/// b,1,0,3
/// c,2,3,0";
/// let graph = formic::matrix::parse(text).expect("well-formed matrix");
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// ```
pub fn parse(text: &str) -> Result<Graph, MatrixError> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let header = lines.next().ok_or(MatrixError::Empty)?;
    let names: Vec<&str> = header.split(',').skip(1).map(str::trim).collect();
    if names.is_empty() {
        return Err(MatrixError::Empty);
    }

    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(names.len());
    for (i, line) in lines.enumerate() {
        let row = i + 1;
        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() != names.len() + 1 {
            return Err(MatrixError::RowLength {
                row,
                found: cells.len(),
                expected: names.len() + 1,
            });
        }

        let mut distances = Vec::with_capacity(names.len());
        for (j, cell) in cells[1..].iter().enumerate() {
            let column = j + 1;
            let value: f64 = cell.trim().parse().map_err(|_| MatrixError::BadDistance {
                row,
                column,
                value: cell.trim().to_string(),
            })?;
            if value < 0.0 {
                return Err(MatrixError::NegativeDistance { row, column, value });
            }
            distances.push(value);
        }
        rows.push(distances);
    }

    if rows.len() != names.len() {
        return Err(MatrixError::RowCount {
            rows: rows.len(),
            cities: names.len(),
        });
    }

    let mut graph = Graph::new();
    let ids: Vec<VertexId> = names.iter().map(|&n| graph.add_vertex(n)).collect();
    for i in 0..names.len() {
        for j in (i + 1)..names.len() {
            let distance = rows[i][j];
            if distance != 0.0 {
                graph.connect(ids[i], ids[j], distance);
            }
        }
    }
    Ok(graph)
}

/// Reads and parses a distance matrix file.
pub fn load(path: impl AsRef<Path>) -> Result<Graph, MatrixError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MatrixError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&text)
}
