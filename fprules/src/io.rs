use crate::error::InputError;
use crate::fp::Item;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Read comma-delimited transactions from a file.
///
/// The first column of every line is a transaction id and is discarded.
pub fn read_transactions(path: impl AsRef<Path>) -> Result<Vec<Vec<Item>>, InputError> {
    let file = File::open(path.as_ref())?;
    let transactions = parse_transactions(BufReader::new(file))?;
    debug!(path = %path.as_ref().display(), transactions = transactions.len(), "read transactions");
    Ok(transactions)
}

pub fn parse_transactions<R: BufRead>(reader: R) -> Result<Vec<Vec<Item>>, InputError> {
    let mut transactions = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let transaction = line
            .split(',')
            .skip(1)
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(|field| {
                field.parse::<Item>().map_err(|_| InputError::InvalidItem {
                    line: idx + 1,
                    value: field.to_string(),
                })
            })
            .collect::<Result<Vec<Item>, InputError>>()?;
        transactions.push(transaction);
    }

    Ok(transactions)
}
