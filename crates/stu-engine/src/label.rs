//! Spreadsheet-style column labels.
//!
//! Maps zero-indexed column numbers to letter labels
//! (0 -> "A", 25 -> "Z", 26 -> "AA", 701 -> "ZZ").

/// Convert column index to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
pub fn col_to_letters(col: usize) -> String {
    let mut result = String::new();
    let mut n = col as u128 + 1;
    while n > 0 {
        n -= 1;
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    result
}

/// Labels for the first `count` columns.
pub fn synthetic_labels(count: usize) -> Vec<String> {
    (0..count).map(col_to_letters).collect()
}
