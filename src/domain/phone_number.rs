use unicode_segmentation::UnicodeSegmentation;

/// Any non-blank text is accepted: the page only hints `type="tel"` to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(s: String) -> Result<PhoneNumber, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err("champ obligatoire.".to_string())
        } else if trimmed.graphemes(true).count() > 32 {
            Err("32 caractères visibles maximum.".to_string())
        } else {
            Ok(Self(trimmed.to_owned()))
        }
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
