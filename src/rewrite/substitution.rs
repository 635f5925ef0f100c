// src/rewrite/substitution.rs

/// A literal find-and-replace of one pattern.
///
/// Matching is plain substring matching: occurrences are found left to right
/// and never overlap, so the count always equals the number of replacements made.
///
/// # Examples
///
/// ```
/// use template_rebrand::rewrite::Substitution;
///
/// let subst = Substitution::new("AD_GI_Proc", "MiProceso");
/// let (text, matches) = subst.apply("AD_GI_Proc_main.xaml, AD_GI_Proc");
/// assert_eq!(text, "MiProceso_main.xaml, MiProceso");
/// assert_eq!(matches, 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Substitution<'a> {
    pattern: &'a str,
    replacement: &'a str,
}

impl<'a> Substitution<'a> {
    /// Creates a substitution. An empty pattern never matches.
    pub fn new(pattern: &'a str, replacement: &'a str) -> Self {
        Self {
            pattern,
            replacement,
        }
    }

    /// Number of non-overlapping occurrences of the pattern in `text`.
    #[inline]
    pub fn count(&self, text: &str) -> usize {
        if self.pattern.is_empty() {
            return 0;
        }
        text.matches(self.pattern).count()
    }

    /// Returns the substituted text and the number of occurrences replaced.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let matches = self.count(text);
        if matches == 0 {
            return (text.to_string(), 0);
        }
        (text.replace(self.pattern, self.replacement), matches)
    }

    /// Same as [`Substitution::apply`], over raw bytes that need not be UTF-8.
    ///
    /// ```
    /// use template_rebrand::rewrite::Substitution;
    ///
    /// let subst = Substitution::new("TPL", "New");
    /// assert_eq!(subst.apply_bytes(b"TPL_\xff"), (b"New_\xff".to_vec(), 1));
    /// ```
    pub fn apply_bytes(&self, bytes: &[u8]) -> (Vec<u8>, usize) {
        let pattern = self.pattern.as_bytes();
        if pattern.is_empty() {
            return (bytes.to_vec(), 0);
        }

        let mut out = Vec::with_capacity(bytes.len());
        let mut matches = 0;
        let mut rest = bytes;
        while !rest.is_empty() {
            if rest.starts_with(pattern) {
                out.extend_from_slice(self.replacement.as_bytes());
                rest = &rest[pattern.len()..];
                matches += 1;
            } else {
                out.push(rest[0]);
                rest = &rest[1..];
            }
        }
        (out, matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_returns_input() {
        let subst = Substitution::new("ABC", "xyz");
        assert_eq!(subst.apply("nothing here"), ("nothing here".to_string(), 0));
    }

    #[test]
    fn test_matches_do_not_overlap() {
        let subst = Substitution::new("aa", "b");
        assert_eq!(subst.count("aaaa"), 2);
        assert_eq!(subst.count("aaa"), 1);
        assert_eq!(subst.apply("aaa"), ("ba".to_string(), 1));
    }

    #[test]
    fn test_pattern_is_literal() {
        let subst = Substitution::new("a.c", "X");
        assert_eq!(subst.count("abc"), 0);
        assert_eq!(subst.apply("a.c abc"), ("X abc".to_string(), 1));
    }

    #[test]
    fn test_replacement_is_inserted_verbatim() {
        let subst = Substitution::new("NAME", "$1 \\n");
        assert_eq!(subst.apply("<NAME>").0, "<$1 \\n>");
    }

    #[test]
    fn test_empty_pattern_never_matches() {
        let subst = Substitution::new("", "Z");
        assert_eq!(subst.count("abc"), 0);
        assert_eq!(subst.apply("abc"), ("abc".to_string(), 0));
        assert_eq!(subst.apply_bytes(b"abc"), (b"abc".to_vec(), 0));
    }

    #[test]
    fn test_bytes_match_like_text() {
        let subst = Substitution::new("aa", "b");
        assert_eq!(subst.apply_bytes(b"aaa\xffaa"), (b"ba\xffb".to_vec(), 2));
    }
}
