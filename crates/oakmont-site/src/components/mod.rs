//! Shared page components

mod cards;
mod footer;
mod nav;

pub use cards::ServiceCard;
pub use footer::Footer;
pub use nav::MarketingNav;
