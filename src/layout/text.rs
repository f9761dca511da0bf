//! Text measurement and truncation.
//!
//! Lengths are counted in extended grapheme clusters, so an accented
//! letter built from combining marks counts as one character.

use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Number of user-perceived characters in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Shorten `s` to at most `max_width` characters.
///
/// Text that already fits is returned unchanged. Longer text keeps its first
/// `max_width - 3` characters followed by [`ELLIPSIS`]. When `max_width` is
/// 3 or less there is no room for the marker and the text is cut hard.
pub fn truncate(s: &str, max_width: usize) -> Cow<'_, str> {
    if char_len(s) <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width <= ELLIPSIS.len() {
        return Cow::Borrowed(prefix(s, max_width));
    }
    let mut out = String::with_capacity(max_width + ELLIPSIS.len());
    out.push_str(prefix(s, max_width - ELLIPSIS.len()));
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}

/// The first `n` characters of `s`.
fn prefix(s: &str, n: usize) -> &str {
    match s.grapheme_indices(true).nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate("GenuineIntel", 12), "GenuineIntel");
        assert_eq!(truncate("GenuineIntel", 40), "GenuineIntel");
        assert!(matches!(truncate("abc", 3), Cow::Borrowed(_)));
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        let out = truncate("Intel(R) Core(TM) i7-9750H", 10);
        assert_eq!(out, "Intel(R...");
        assert_eq!(char_len(&out), 10);
    }

    #[test]
    fn test_truncate_degenerate_widths() {
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("abcdef", 1), "a");
        assert_eq!(truncate("abcdef", 0), "");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_truncate_length_bound_holds_for_all_widths() {
        let s = "avx512_vnni_and_a_long_tail";
        for n in 0..=s.len() + 2 {
            let out = truncate(s, n);
            assert!(char_len(&out) <= n, "n={n} out={out}");
            if n > 3 && s.len() > n {
                assert!(out.ends_with(ELLIPSIS));
                assert_eq!(char_len(&out), n);
            }
            if s.len() <= n {
                assert_eq!(out, s);
            }
        }
    }

    #[test]
    fn test_truncate_counts_graphemes() {
        // "é" spelled as e + combining acute accent
        let s = "cafe\u{301} noir";
        assert_eq!(char_len(s), 9);
        assert_eq!(truncate(s, 7), "cafe\u{301}...");
    }
}
