use validator::validate_email;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadEmail(String);

impl LeadEmail {
    pub fn parse(s: String) -> Result<LeadEmail, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err("champ obligatoire.".to_string())
        } else if validate_email(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(format!("« {trimmed} » n'est pas une adresse email valide."))
        }
    }
}

impl AsRef<str> for LeadEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
