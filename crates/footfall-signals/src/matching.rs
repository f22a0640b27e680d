//! Case-insensitive keyword matching over record text fields.

/// Keywords lowercased once so each record comparison only lowercases the text.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    needles: Vec<String>,
}

impl KeywordSet {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self {
            needles: keywords
                .iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// True if any keyword is a case-insensitive substring of `text`.
    /// Absent text is treated as empty and never matches a non-empty keyword.
    #[must_use]
    pub fn matches(&self, text: Option<&str>) -> bool {
        let haystack = text.unwrap_or("").to_lowercase();
        self.needles.iter().any(|needle| haystack.contains(needle.as_str()))
    }

    /// True if any keyword matches any of the given fields.
    #[must_use]
    pub fn matches_any_field(&self, fields: &[Option<&str>]) -> bool {
        fields.iter().any(|field| self.matches(*field))
    }
}

/// Case-insensitive "contains any keyword" check for one text.
#[must_use]
pub fn contains_any<S: AsRef<str>>(text: Option<&str>, keywords: &[S]) -> bool {
    KeywordSet::new(keywords).matches(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_case_insensitively() {
        assert!(contains_any(Some("Best Sneaker Shops"), &["sneaker"]));
        assert!(!contains_any(Some("Shoes for sale"), &["sneaker"]));
    }

    #[test]
    fn matches_substrings_inside_words() {
        assert!(contains_any(Some("sneakerheads unite"), &["Sneaker"]));
    }

    #[test]
    fn any_keyword_is_enough() {
        let keywords = ["Express Avenue", "VR Chennai"];
        assert!(contains_any(Some("queue outside vr chennai today"), &keywords));
    }

    #[test]
    fn absent_text_does_not_match() {
        assert!(!contains_any(None, &["mall"]));
        assert!(!contains_any(Some(""), &["mall"]));
    }

    #[test]
    fn no_keywords_never_match() {
        assert!(!contains_any::<&str>(Some("anything"), &[]));
    }

    #[test]
    fn any_field_is_enough() {
        let set = KeywordSet::new(&["T Nagar"]);
        assert!(set.matches_any_field(&[Some("Weekend haul"), Some("shopping in t nagar")]));
        assert!(set.matches_any_field(&[Some("T NAGAR finds"), None]));
        assert!(!set.matches_any_field(&[Some("Weekend haul"), None]));
    }
}
