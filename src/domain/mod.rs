mod expectations;
mod lead_age;
mod lead_email;
mod lead_name;
mod new_lead;
mod phone_number;

pub use expectations::Expectations;
pub use lead_age::LeadAge;
pub use lead_email::LeadEmail;
pub use lead_name::LeadName;
pub use new_lead::{LeadFields, NewLead};
pub use phone_number::PhoneNumber;
