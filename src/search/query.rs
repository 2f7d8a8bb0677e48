use std::fmt;

/// Case-folds char by char so folded labels and folded queries always
/// agree on char positions.
pub fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// The field's current text, trimmed and case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Query {
    folded: String,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        Self {
            folded: fold(raw.trim()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.folded
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    pub fn char_len(&self) -> usize {
        self.folded.chars().count()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.folded)
    }
}

#[cfg(test)]
mod tests {
    use super::{Query, fold};

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(Query::parse("  BlEnDeR \t").as_str(), "blender");
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert!(Query::parse("   ").is_empty());
        assert!(Query::parse("").is_empty());
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(Query::parse(" Fresh  Eggs ").as_str(), "fresh  eggs");
    }

    #[test]
    fn fold_is_per_char() {
        assert_eq!(fold("ΣΑΣ"), "σασ");
        assert_eq!(Query::parse("ÄPFEL").char_len(), 5);
    }
}
