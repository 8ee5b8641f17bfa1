//! Text line protocol for the live driver
//!
//! One line carries one row of values, separated by `;`. A blank field means
//! "no value for this column this row". Output rows are prefixed with `"> "`
//! to keep them distinguishable when stdin and stdout share a terminal.

use crate::error::{Result, RuntimeError};
use tzio_spec::Value;

pub const FIELD_SEPARATOR: char = ';';

const OUTPUT_PREFIX: &str = "> ";

/// Parse one input line into a row of optional values.
pub fn parse_line(line: &str) -> Result<Vec<Option<Value>>> {
    line.split(FIELD_SEPARATOR)
        .map(|field| {
            let field = field.trim();
            if field.is_empty() {
                Ok(None)
            } else {
                field
                    .parse::<Value>()
                    .map(Some)
                    .map_err(|_| RuntimeError::MalformedLine {
                        line: line.to_string(),
                        field: field.to_string(),
                    })
            }
        })
        .collect()
}

/// Render a sampled output row as a protocol line.
pub fn format_outputs(values: &[Option<Value>]) -> String {
    let fields: Vec<String> = values
        .iter()
        .map(|value| match value {
            Some(value) => value.to_string(),
            None => String::new(),
        })
        .collect();
    format!("{}{}", OUTPUT_PREFIX, fields.join(&FIELD_SEPARATOR.to_string()))
}
