use crate::types::MatchCount;

/// Counts non-overlapping occurrences, scanning left to right. This is the
/// same set of spans `str::replace` rewrites.
pub fn count_occurrences(content: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    content.match_indices(needle).count()
}

pub fn classify(content: &str, needle: &str) -> MatchCount {
    MatchCount::from_count(count_occurrences(content, needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_occurrences() {
        assert_eq!(count_occurrences("a b a b a", "a"), 3);
        assert_eq!(count_occurrences("abc", "x"), 0);
        assert_eq!(count_occurrences("abc", ""), 0);

        // Overlapping candidates are consumed left to right.
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("aaa", "aa"), 1);
    }

    #[test]
    fn test_classify_multiline_block() {
        let src = "          </Dialog>\n      </div>\n\n          </Dialog>\n      </div>\n";
        assert_eq!(
            classify(src, "          </Dialog>\n      </div>"),
            MatchCount::Ambiguous(2)
        );
        assert_eq!(classify(src, "</Dialog>\n</div>"), MatchCount::Missing);
        assert_eq!(classify("x\ny\n", "x\ny"), MatchCount::Unique);
    }

    #[test]
    fn test_match_count_applied() {
        assert!(!MatchCount::Missing.applied());
        assert!(MatchCount::Unique.applied());
        assert!(MatchCount::Ambiguous(3).applied());
    }
}
