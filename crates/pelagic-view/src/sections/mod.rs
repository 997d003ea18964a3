//! The page sections, one composer per module.

pub mod articles;
pub mod compliance;
pub mod contact;
pub mod ecosystem;
pub mod footer;
pub mod hero;
pub mod insights;
pub mod map;
pub mod overlay;
pub mod team;

pub use articles::ArticlesSection;
pub use compliance::ComplianceSection;
pub use contact::ContactSection;
pub use ecosystem::EcosystemSection;
pub use footer::FooterSection;
pub use hero::HeroSection;
pub use insights::InsightsSection;
pub use map::MapSection;
pub use overlay::OverlaySection;
pub use team::TeamSection;
