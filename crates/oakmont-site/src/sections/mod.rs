//! Page sections, top to bottom

mod contact;
mod hero;
mod services;

pub use contact::ContactSection;
pub use hero::Hero;
pub use services::Services;
