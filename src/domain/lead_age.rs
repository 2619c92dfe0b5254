/// Age of a registrant, in years. Registration is open from 15 onwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadAge(i32);

impl LeadAge {
    pub const MINIMUM: i32 = 15;
    const MAXIMUM: i32 = 120;

    /// Parses the raw text of the age input. A non-numeric value is an error, never a default.
    pub fn parse(s: &str) -> Result<LeadAge, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("champ obligatoire.".to_string());
        }
        let age: i32 = trimmed
            .parse()
            .map_err(|_| format!("« {trimmed} » n'est pas un nombre entier."))?;

        if age < Self::MINIMUM {
            Err(format!("il faut avoir au moins {} ans.", Self::MINIMUM))
        } else if age > Self::MAXIMUM {
            Err(format!("{age} n'est pas un âge plausible."))
        } else {
            Ok(Self(age))
        }
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}
