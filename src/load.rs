use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::Path;

use thiserror::Error;

use crate::core::state::{Process, Ticks};

/// Why a catalog failed to load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading catalog: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: expected 3 or 4 fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}, field {field:?}: {source}")]
    BadInt {
        line: usize,
        field: String,
        source: ParseIntError,
    },
    #[error("line {line}: burst duration must be positive")]
    ZeroBurst { line: usize },
    #[error("catalog is empty")]
    Empty,
}

/// Parse a comma-delimited catalog, one process per line in the column order
/// `id,burst,arrival[,priority]`. A missing priority normalizes to 0. Blank
/// lines are skipped. The result is stable-sorted by arrival time, which is
/// the precondition every discipline relies on.
pub fn parse_catalog(input: &str) -> Result<Vec<Process>, LoadError> {
    let mut catalog = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
        if fields.len() != 3 && fields.len() != 4 {
            return Err(LoadError::FieldCount {
                line,
                found: fields.len(),
            });
        }

        let pid = parse_field::<u32>(fields[0], line)?;
        let burst = parse_field::<Ticks>(fields[1], line)?;
        let arrival = parse_field::<Ticks>(fields[2], line)?;
        let priority = match fields.get(3) {
            Some(f) => parse_field::<i32>(f, line)?,
            None => 0,
        };

        if burst == 0 {
            return Err(LoadError::ZeroBurst { line });
        }

        catalog.push(Process {
            pid,
            arrival,
            burst,
            priority,
        });
    }

    if catalog.is_empty() {
        return Err(LoadError::Empty);
    }

    catalog.sort_by_key(|p| p.arrival);
    Ok(catalog)
}

pub fn load_catalog(path: &Path) -> Result<Vec<Process>, LoadError> {
    parse_catalog(&fs::read_to_string(path)?)
}

fn parse_field<T: std::str::FromStr<Err = ParseIntError>>(
    field: &str,
    line: usize,
) -> Result<T, LoadError> {
    field.parse().map_err(|source| LoadError::BadInt {
        line,
        field: field.to_string(),
        source,
    })
}
