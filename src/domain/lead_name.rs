use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadName(String);

impl LeadName {
    /// Returns an instance of `LeadName` if the input satisfies all our validation constraints
    /// on first and last names, an error message otherwise.
    ///
    /// Lengths are counted in graphemes, i.e. the characters a user actually sees.
    pub fn parse(s: String) -> Result<LeadName, String> {
        let trimmed = s.trim();

        let is_empty_or_whitespace = trimmed.is_empty();

        // A grapheme is defined by the Unicode standard as a "user-perceived" character: `é` typed
        // as `e` + combining accent is a single grapheme, but it is composed of two characters.
        let is_too_long = trimmed.graphemes(true).count() > 256;

        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters =
            trimmed.chars().any(|g| forbidden_characters.contains(&g));

        if is_empty_or_whitespace {
            Err("champ obligatoire.".to_string())
        } else if is_too_long {
            Err("256 caractères visibles maximum.".to_string())
        } else if contains_forbidden_characters {
            Err(r#"les caractères / ( ) " < > \ { } ne sont pas acceptés."#.to_string())
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }
}

/// The caller gets a shared reference to the inner string. This gives the caller **read-only**
/// access, they have no way to compromise our invariants!
impl AsRef<str> for LeadName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
