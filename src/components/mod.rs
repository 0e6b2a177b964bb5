//! UI Components
//!
//! Shell chrome and the page sections.

mod section_heading;
mod nav_bar;
mod scroll_top_button;
mod particle_field;
mod home_section;
mod about_section;
mod experience_section;
mod projects_section;
mod skills_section;
mod contact_section;

pub use section_heading::SectionHeading;
pub use nav_bar::NavBar;
pub use scroll_top_button::ScrollTopButton;
pub use particle_field::ParticleField;
pub use home_section::HomeSection;
pub use about_section::AboutSection;
pub use experience_section::ExperienceSection;
pub use projects_section::ProjectsSection;
pub use skills_section::SkillsSection;
pub use contact_section::ContactSection;
