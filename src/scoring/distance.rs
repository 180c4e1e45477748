//! Levenshtein edit distance over Unicode scalar values.

/// Minimum number of single-character insertions, deletions or substitutions
/// turning `a` into `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Rows follow `b`, columns follow `a`; only the previous row is kept.
    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0; a.len() + 1];

    for i in 1..=b.len() {
        curr[0] = i;
        for j in 1..=a.len() {
            curr[j] = if a[j - 1] == b[i - 1] {
                prev[j - 1]
            } else {
                1 + prev[j - 1] // substitution
                    .min(curr[j - 1]) // insertion
                    .min(prev[j]) // deletion
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}
