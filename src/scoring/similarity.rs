use super::distance::edit_distance;

/// Normalized similarity in `[0, 1]`, measured against the longer input.
///
/// Two empty strings are identical (1.0). The denominator is the longer
/// string's length, so a short attempt at a long phrase is not penalized
/// beyond the characters it is missing.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longer = a.chars().count().max(b.chars().count());
    if longer == 0 {
        return 1.0;
    }

    let distance = edit_distance(a, b);
    (longer - distance) as f64 / longer as f64
}

/// Integer percentage (0-100), rounding halves up.
pub fn to_percent(similarity: f64) -> u8 {
    let percent = (similarity * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(similarity("good morning", "good morning"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_against_empty() {
        assert_eq!(similarity("cat", ""), 0.0);
        assert_eq!(similarity("", "cat"), 0.0);
    }

    #[test]
    fn test_single_substitution() {
        let s = similarity("cat", "cap");
        assert!((s - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(to_percent(s), 67);
    }

    #[test]
    fn test_missing_word() {
        let s = similarity("good morning", "good");
        assert!((s - 4.0 / 12.0).abs() < 1e-9);
        assert_eq!(to_percent(s), 33);
    }

    #[test]
    fn test_to_percent_rounding() {
        assert_eq!(to_percent(0.0), 0);
        assert_eq!(to_percent(0.005), 1);
        assert_eq!(to_percent(0.794), 79);
        assert_eq!(to_percent(0.795), 80);
        assert_eq!(to_percent(1.0), 100);
    }
}
