// src/process/raw_table.rs

use crate::error::LoadError;
use csv::ReaderBuilder;
use std::{collections::HashSet, fs::File, io::BufReader, path::Path};
use tracing::debug;

#[derive(Debug)]
pub struct RawTable {
    /// Column names from the header row, made unique.
    pub headers: Vec<String>,
    /// Each data row as raw string cells. Rows shorter than the header are kept
    /// short; missing cells read as empty.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Cell `col` of row `row`, or `""` past the end of a short row.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows[row].get(col).map(String::as_str).unwrap_or("")
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = &str> + '_ {
        (0..self.rows.len()).map(move |row| self.cell(row, col))
    }
}

/// Read the whole delimited file at `path`; the first record is the header.
pub fn read_raw_table(path: &Path, delimiter: u8) -> Result<RawTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true) // short rows are padded, long rows rejected below
        .from_reader(BufReader::new(file));

    let header = rdr
        .headers()
        .map_err(|e| csv_error(path, e))?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    if header.is_empty() || header.iter().all(|h| h.trim().is_empty()) {
        return Err(LoadError::format(path, "no columns to parse from file"));
    }
    let headers = dedupe_headers(header);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| csv_error(path, e))?;
        if record.len() > headers.len() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(LoadError::format(
                path,
                format!(
                    "expected {} fields in line {}, saw {}",
                    headers.len(),
                    line,
                    record.len()
                ),
            ));
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(columns = headers.len(), rows = rows.len(), "read raw table");
    Ok(RawTable { headers, rows })
}

/// Rename repeated headers to `name.1`, `name.2`, ... keeping the first as is.
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut out = Vec::with_capacity(headers.len());
    for name in headers {
        let mut candidate = name.clone();
        let mut n = 0;
        while seen.contains(&candidate) {
            n += 1;
            candidate = format!("{}.{}", name, n);
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

fn csv_error(path: &Path, err: csv::Error) -> LoadError {
    match err.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => LoadError::format(path, format!("{:?}", other)),
    }
}
