mod health_check;
mod home;
mod landing_page;
mod registrations;

pub use health_check::*;
pub use home::*;
pub use registrations::*;
