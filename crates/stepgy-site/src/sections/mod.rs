//! Page section bodies. Each renders the content of one section; the
//! entrance frame around it comes from [`crate::components::Section`].

mod contact;
mod gallery;
mod hero;
mod prototype;
mod solution;
mod team;
mod technology;
mod text;

pub use contact::ContactSection;
pub use gallery::GallerySection;
pub use hero::HeroSection;
pub use prototype::PrototypeSection;
pub use solution::SolutionSection;
pub use team::TeamSection;
pub use technology::TechnologySection;
pub use text::TextSection;
