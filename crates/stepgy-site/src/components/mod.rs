//! Shared page components

mod cards;
mod footer;
mod icon;
mod nav;
mod section;

pub use cards::*;
pub use footer::Footer;
pub use icon::IconGlyph;
pub use nav::MarketingNav;
pub use section::Section;
