pub mod constants;

/// Strips whitespace from an entered row, so `S . #` and `S.#` read the same.
pub fn normalize_row(row: &str) -> String {
    row.split_whitespace().collect()
}
