use crate::domain::{Expectations, LeadAge, LeadEmail, LeadName, PhoneNumber};

/// Raw text of the six registration inputs, exactly as the user typed it.
///
/// Field names follow the form's `name` attributes. Missing inputs deserialize as blank text so
/// that they are reported by validation instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct LeadFields {
    pub prenom: String,
    pub nom: String,
    pub email: String,
    pub age: String,
    pub telephone: String,
    pub attentes: String,
}

impl LeadFields {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// # Type Driven Development
/// A `NewLead` can only be obtained from fields that passed validation, so the store client never
/// has to double check what it is asked to insert. The creation timestamp is deliberately absent:
/// it is assigned by the client at insertion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    pub first_name: LeadName,
    pub last_name: LeadName,
    pub email: LeadEmail,
    pub age: LeadAge,
    pub phone_number: PhoneNumber,
    pub expectations: Expectations,
}

impl TryFrom<LeadFields> for NewLead {
    type Error = String;

    fn try_from(fields: LeadFields) -> Result<Self, Self::Error> {
        // Messages are shown next to the form, prefixed with the label of the faulty input.
        let first_name = LeadName::parse(fields.prenom).map_err(labelled("Prénom"))?;
        let last_name = LeadName::parse(fields.nom).map_err(labelled("Nom"))?;
        let email = LeadEmail::parse(fields.email).map_err(labelled("Email"))?;
        let age = LeadAge::parse(&fields.age).map_err(labelled("Âge"))?;
        let phone_number = PhoneNumber::parse(fields.telephone).map_err(labelled("Téléphone"))?;
        let expectations =
            Expectations::parse(fields.attentes).map_err(labelled("Tes attentes"))?;

        Ok(Self {
            first_name,
            last_name,
            email,
            age,
            phone_number,
            expectations,
        })
    }
}

fn labelled(label: &'static str) -> impl Fn(String) -> String {
    move |message| format!("{label} : {message}")
}
