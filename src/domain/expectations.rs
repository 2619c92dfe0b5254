use unicode_segmentation::UnicodeSegmentation;

/// What the registrant hopes to get out of the training, in their own words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectations(String);

impl Expectations {
    /// Counted in graphemes: an emoji made of several code points counts once.
    pub const MAX_LENGTH: usize = 2000;

    pub fn parse(s: String) -> Result<Expectations, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err("champ obligatoire.".to_string())
        } else if trimmed.graphemes(true).count() > Self::MAX_LENGTH {
            Err(format!("{} caractères visibles maximum.", Self::MAX_LENGTH))
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }
}

impl AsRef<str> for Expectations {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
