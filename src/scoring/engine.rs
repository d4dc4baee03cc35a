// Keyword scoring engine.
//
// A KeywordSet is a named list of lowercase trigger phrases with a weight.
// Applying a set to a profile's search text yields a Contribution: the
// score delta (weight × total occurrence count across all phrases) plus
// the phrases that matched, when the set records them.
//
// Applications are pure — the caller threads Contributions through a
// ScoredProfile rather than the engine mutating anything in place. The
// numeric result is order-independent; only the order in which matched
// phrases are first recorded depends on application order.

/// A named, weighted collection of trigger phrases.
///
/// Phrases are expected to be lowercase. A phrase may carry leading or
/// trailing spaces to approximate word-boundary matching (e.g. `" ai "`
/// will not fire inside "maintain").
#[derive(Debug, Clone)]
pub struct KeywordSet {
    /// Category identifier, also the key under which the set's delta is
    /// recorded in `ScoredProfile::category_scores`.
    pub name: String,
    pub keywords: Vec<String>,
    /// Score per occurrence. Negative for penalty sets.
    pub weight: i64,
    /// Whether matched phrases are surfaced as visible tags.
    pub record_matches: bool,
}

impl KeywordSet {
    pub fn new(name: &str, keywords: &[&str], weight: i64, record_matches: bool) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            weight,
            record_matches,
        }
    }
}

/// The result of applying one KeywordSet to one profile's text.
#[derive(Debug, Clone, Default)]
pub struct Contribution {
    /// Score delta: weight × total occurrence count across all phrases.
    pub delta: i64,
    /// Phrases that matched at least once, in set order. Empty when the
    /// set does not record matches.
    pub matches: Vec<String>,
}

/// Build the lowercase text a keyword set is matched against:
/// biography and occupation joined by a newline.
pub fn search_text(biography: &str, occupation: &str) -> String {
    format!("{}\n{}", biography.to_lowercase(), occupation.to_lowercase())
}

/// Apply one keyword set to a prepared search text.
///
/// Counts non-overlapping occurrences of each phrase as a literal
/// substring. Empty sets, empty text, and phrases with zero occurrences
/// all contribute nothing; there are no error conditions.
pub fn apply(text: &str, set: &KeywordSet) -> Contribution {
    let mut contribution = Contribution::default();

    for keyword in &set.keywords {
        let count = count_occurrences(text, keyword);
        if count > 0 {
            contribution.delta += count as i64 * set.weight;
            if set.record_matches {
                contribution.matches.push(keyword.clone());
            }
        }
    }

    contribution
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
///
/// Matches are found by left-to-right scan, resuming after each match —
/// the same semantics as Python's `str.count`. An empty needle never
/// matches.
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.match_indices(needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edu_set() -> KeywordSet {
        KeywordSet::new("Education", &["education", "learning", "professor"], 1, true)
    }

    #[test]
    fn test_counts_every_occurrence() {
        let set = KeywordSet::new("Education", &["education"], 1, true);
        let text = search_text("education and more education", "head of education");
        let c = apply(&text, &set);
        assert_eq!(c.delta, 3);
        assert_eq!(c.matches, vec!["education"]);
    }

    #[test]
    fn test_weight_multiplies_count() {
        let set = KeywordSet::new("Dropout", &["actor"], -5, false);
        let c = apply("actor and actor", &set);
        assert_eq!(c.delta, -10);
        assert!(c.matches.is_empty());
    }

    #[test]
    fn test_matching_is_case_blind_via_search_text() {
        let text = search_text("A PROFESSOR of Learning", "");
        let c = apply(&text, &edu_set());
        assert_eq!(c.delta, 2);
        assert_eq!(c.matches, vec!["learning", "professor"]);
    }

    #[test]
    fn test_padded_phrase_respects_boundaries() {
        let set = KeywordSet::new("Other", &[" ai "], 1, true);
        // "maintain" contains "ai" but not " ai "
        assert_eq!(apply("we maintain systems", &set).delta, 0);
        assert_eq!(apply("works on ai systems", &set).delta, 1);
    }

    #[test]
    fn test_empty_set_and_empty_text_contribute_zero() {
        let empty = KeywordSet::new("Education", &[], 1, true);
        assert_eq!(apply("some text", &empty).delta, 0);
        assert_eq!(apply("", &edu_set()).delta, 0);
    }

    #[test]
    fn test_empty_phrase_never_matches() {
        let set = KeywordSet::new("Other", &[""], 1, true);
        let c = apply("anything", &set);
        assert_eq!(c.delta, 0);
        assert!(c.matches.is_empty());
    }

    #[test]
    fn test_occurrences_scan_is_non_overlapping() {
        let set = KeywordSet::new("Other", &["aa"], 1, false);
        // "aaaa" scans as two disjoint matches, not three overlapping ones
        assert_eq!(apply("aaaa", &set).delta, 2);
    }

    #[test]
    fn test_search_text_joins_with_newline() {
        assert_eq!(search_text("Bio Text", "Dean"), "bio text\ndean");
    }
}
