/// Closed form of `Σ_{k<n} (i + k)(k - j)`, the product cell for the
/// `i + j` / `i - j` fill pattern.
///
/// Evaluated in `i64`, so it stays exact well past the point where the
/// `i32` accumulation overflows.
pub fn expected_cell(row: usize, col: usize, dimension: usize) -> i64 {
    let (i, j, n) = (row as i64, col as i64, dimension as i64);
    let s1 = n * (n - 1) / 2;
    let s2 = (n - 1) * n * (2 * n - 1) / 6;
    i * s1 - i * j * n + s2 - j * s1
}
