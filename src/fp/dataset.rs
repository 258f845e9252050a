use std::io::BufRead;

use crate::fp::error::FpError;

/// Reads a delimiter-separated transaction database: one line per
/// transaction, tokens split on `separator`, surrounding whitespace and the
/// line terminator stripped.
///
/// A line yielding no tokens at all is a malformed record. The mining core
/// never opens files itself; hand it the returned transactions.
pub fn read_transactions<R: BufRead>(
    reader: R,
    separator: char,
) -> Result<Vec<Vec<String>>, FpError> {
    let mut transactions = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let tokens: Vec<String> = line
            .split(separator)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        if tokens.is_empty() {
            return Err(FpError::MalformedTransaction { line: idx + 1 });
        }
        transactions.push(tokens);
    }

    Ok(transactions)
}
