/// Vocabulary probed against the free-text profile fields
///
/// Opaque constant table curated from what students actually write in their
/// intros; matching is whole-word so e.g. "food" does not fire on "foodie".
pub const VIBE_KEYWORDS: [&str; 29] = [
    "gym",
    "study",
    "gamer",
    "gaming",
    "movie",
    "music",
    "travel",
    "food",
    "quiet",
    "chill",
    "party",
    "introvert",
    "extrovert",
    "coding",
    "art",
    "nature",
    "hike",
    "coffee",
    "date",
    "cat",
    "dog",
    "relationship",
    "casual",
    "serious",
    "muslim",
    "christian",
    "anime",
    "foodie",
    "netflix",
];

/// Whole-word containment check
///
/// A hit requires the characters adjacent to the occurrence to be
/// non-word characters (word characters being ASCII alphanumerics and
/// underscore), mirroring a `\b<keyword>\b` regex.
#[inline]
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    for (start, _) in haystack.match_indices(needle) {
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let after_ok = haystack[start + needle.len()..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));

        if before_ok && after_ok {
            return true;
        }
    }

    false
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Count keyword cross-matches between two profiles' free text
///
/// All four inputs must already be lower-cased. For every keyword, A's
/// looking-for hitting B's intro counts one match and B's looking-for
/// hitting A's intro counts a second, independent match, so a single
/// keyword can contribute up to 2.
pub fn count_cross_matches(
    a_intro: &str,
    a_looking: &str,
    b_intro: &str,
    b_looking: &str,
) -> u32 {
    let mut matches = 0;

    for keyword in VIBE_KEYWORDS {
        if contains_word(a_looking, keyword) && contains_word(b_intro, keyword) {
            matches += 1;
        }
        if contains_word(b_looking, keyword) && contains_word(a_intro, keyword) {
            matches += 1;
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_size_is_pinned() {
        assert_eq!(VIBE_KEYWORDS.len(), 29);
    }

    #[test]
    fn test_whole_word_boundaries() {
        assert!(contains_word("i love gaming a lot", "gaming"));
        assert!(contains_word("gaming", "gaming"));
        assert!(contains_word("gaming, movies", "gaming"));
        assert!(contains_word("(gym) rat", "gym"));

        // Embedded occurrences are not words
        assert!(!contains_word("foodie at heart", "food"));
        assert!(!contains_word("category five", "cat"));
        assert!(!contains_word("my_cat_pic", "cat"));
        assert!(!contains_word("update me", "date"));
    }

    #[test]
    fn test_non_ascii_neighbors_break_words() {
        // Emoji and CJK neighbors are not word characters
        assert!(contains_word("cat😺person", "cat"));
        assert!(contains_word("喜欢coffee时间", "coffee"));
    }

    #[test]
    fn test_cross_match_counts_each_direction() {
        // "gym" matches in both directions, "coffee" in one
        let matches = count_cross_matches(
            "gym rat and coffee addict",
            "gym buddy wanted",
            "i live at the gym",
            "someone for gym and coffee",
        );
        assert_eq!(matches, 3);
    }

    #[test]
    fn test_cross_match_requires_opposite_fields() {
        // Both intros mention "anime" but neither looking-for does
        let matches = count_cross_matches("anime fan", "", "anime watcher", "");
        assert_eq!(matches, 0);
    }

    #[test]
    fn test_cross_match_empty_text() {
        assert_eq!(count_cross_matches("", "", "", ""), 0);
    }
}
