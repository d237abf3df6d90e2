use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Normalize a name for comparison: lowercase, alphanumerics only.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolve free text against a set of named values.
///
/// Tries an exact (case- and punctuation-insensitive) match on any alias
/// first, then falls back to the best Jaro-Winkler score above
/// [`FUZZY_MATCH_THRESHOLD`].
pub fn resolve_name<T: Copy>(input: &str, candidates: &[(T, &[&str])]) -> Option<T> {
    let needle = normalize(input);
    if needle.is_empty() {
        return None;
    }

    let exact = candidates
        .iter()
        .find(|(_, aliases)| aliases.iter().any(|a| normalize(a) == needle));
    if let Some((value, _)) = exact {
        return Some(*value);
    }

    let mut best: Option<(T, f64)> = None;
    for (value, aliases) in candidates {
        for alias in aliases.iter() {
            let score = jaro_winkler(&normalize(alias), &needle);
            if score > FUZZY_MATCH_THRESHOLD && best.is_none_or(|(_, s)| score > s) {
                best = Some((*value, score));
            }
        }
    }

    best.map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: [(u8, &[&str]); 2] = [(1, &["Red", "crimson"]), (2, &["Blue"])];

    #[test]
    fn test_exact_match_ignores_case_and_punctuation() {
        assert_eq!(resolve_name("RED", &COLORS), Some(1));
        assert_eq!(resolve_name("cri-mson", &COLORS), Some(1));
        assert_eq!(resolve_name("blue", &COLORS), Some(2));
    }

    #[test]
    fn test_fuzzy_match() {
        assert_eq!(resolve_name("bleu", &COLORS), Some(2));
        assert_eq!(resolve_name("crimsn", &COLORS), Some(1));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(resolve_name("", &COLORS), None);
        assert_eq!(resolve_name("zzzzzz", &COLORS), None);
    }
}
