/// Case-insensitive containment in either direction
///
/// This is the only notion of "same interest" the matcher uses, so
/// "art" matches "Artistic" and "hiking" matches "Hiking trips".
#[inline]
pub fn terms_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Entries of `wanted` that overlap at least one entry of `offered`, in `wanted` order
pub fn shared_terms<'a>(wanted: &'a [String], offered: &[String]) -> Vec<&'a str> {
    wanted
        .iter()
        .filter(|w| offered.iter().any(|o| terms_overlap(w, o)))
        .map(String::as_str)
        .collect()
}

/// True if any entry of `values` overlaps any of `keywords`
pub fn overlaps_any(values: &[String], keywords: &[&str]) -> bool {
    values
        .iter()
        .any(|v| keywords.iter().any(|k| terms_overlap(v, k)))
}

/// Overlap score in [0, 1]
///
/// `matched / max(|wanted|, |offered|)` where `matched` counts entries of
/// `wanted` that overlap something in `offered`. Zero if either side is empty.
pub fn overlap_score(wanted: &[String], offered: &[String]) -> f64 {
    if wanted.is_empty() || offered.is_empty() {
        return 0.0;
    }

    let matched = shared_terms(wanted, offered).len() as f64;
    let denominator = wanted.len().max(offered.len()) as f64;

    matched / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_terms_overlap_both_directions() {
        assert!(terms_overlap("art", "Artistic"));
        assert!(terms_overlap("Artistic", "art"));
        assert!(terms_overlap("HIKING", "hiking"));
        assert!(!terms_overlap("chess", "checkers"));
    }

    #[test]
    fn test_overlap_score_half() {
        let wanted = strings(&["hiking", "cooking"]);
        let offered = strings(&["Hiking", "reading"]);
        assert_eq!(overlap_score(&wanted, &offered), 0.5);
    }

    #[test]
    fn test_overlap_score_uses_larger_denominator() {
        let wanted = strings(&["music"]);
        let offered = strings(&["music", "yoga", "travel", "films"]);
        assert_eq!(overlap_score(&wanted, &offered), 0.25);
    }

    #[test]
    fn test_overlap_score_empty_sides() {
        let some = strings(&["music"]);
        assert_eq!(overlap_score(&[], &some), 0.0);
        assert_eq!(overlap_score(&some, &[]), 0.0);
    }

    #[test]
    fn test_shared_terms_keep_wanted_order() {
        let wanted = strings(&["yoga", "art", "chess"]);
        let offered = strings(&["Artistic painting", "Yoga"]);
        assert_eq!(shared_terms(&wanted, &offered), vec!["yoga", "art"]);
    }

    #[test]
    fn test_overlaps_any() {
        let traits = strings(&["Warm-hearted", "curious"]);
        assert!(overlaps_any(&traits, &["romantic", "passionate", "warm"]));
        assert!(!overlaps_any(&traits, &["calm"]));
    }
}
