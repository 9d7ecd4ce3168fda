/// Maximum normalized edit distance for a field to count as a match.
pub const SIMILARITY_THRESHOLD: f64 = 0.3;

/// Levenshtein distance counted in chars (single insert, delete or substitute).
///
/// Callers lowercase both sides first; the comparison itself is exact.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + table[i - 1][j]
                    .min(table[i][j - 1])
                    .min(table[i - 1][j - 1])
            };
        }
    }

    table[a.len()][b.len()]
}

/// Whether `field` is close enough to `query` at the given threshold.
///
/// The distance is normalized by the length of `field` alone, not the longer of the two
/// strings, so a query much longer than a short field never matches it.
pub fn is_similar_with(field: &str, query: &str, threshold: f64) -> bool {
    let length = field.chars().count();
    if length == 0 {
        return false;
    }
    let distance = edit_distance(&field.to_lowercase(), &query.to_lowercase());
    (distance as f64) / (length as f64) < threshold
}

pub fn is_similar(field: &str, query: &str) -> bool {
    is_similar_with(field, query, SIMILARITY_THRESHOLD)
}
