//! Team roster fixtures.
//!
//! Members carry a free-form role string (classified into buckets by
//! [`crate::classify::Classifier::team`]) and expertise tags used by the
//! substring filter on the team grid.

use crate::classify::Classifier;
use crate::record::{Metric, Record};

/// Expertise filter tokens for the team grid, `all` sentinel first.
pub const FILTER_TOKENS: &[&str] = &["all", "robotics", "ai", "engineering", "marine"];

/// External profile links for a member.
#[derive(Debug, Clone, Copy, Default)]
pub struct Links {
    pub github: Option<&'static str>,
    pub linkedin: Option<&'static str>,
    pub website: Option<&'static str>,
}

/// One member of the team roster.
#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub expertise: &'static [&'static str],
    pub country: &'static str,
    pub avatar: &'static str,
    pub links: Links,
}

impl Record for TeamMember {
    fn id(&self) -> &'static str {
        self.id
    }
    fn title(&self) -> &'static str {
        self.name
    }
    fn category(&self) -> &'static str {
        self.role
    }
    fn body(&self) -> &'static str {
        self.bio
    }
    fn tags(&self) -> &'static [&'static str] {
        self.expertise
    }
    fn metrics(&self) -> &'static [Metric] {
        &[]
    }
}

/// The roster, in display order.
pub static TEAM: [TeamMember; 12] = [
    TeamMember {
        id: "r-ellison",
        name: "Rachel Ellison",
        role: "Founder & CEO",
        bio: "Founded the company to prove that critical-mineral supply and ocean stewardship \
            are not mutually exclusive. Previously led subsea survey programs in the Pacific.",
        expertise: &["Strategy", "Ocean Policy", "Marine Operations"],
        country: "United States",
        avatar: "\u{1f9ed}",
        links: Links {
            github: None,
            linkedin: Some("https://linkedin.com/in/rachel-ellison"),
            website: Some("https://tritonmining.io"),
        },
    },
    TeamMember {
        id: "d-okafor",
        name: "Daniel Okafor",
        role: "Chief Technology Officer (CTO)",
        bio: "Architect of the ecosystem platform, from AUV firmware to the compliance \
            dashboard. Two decades of distributed-systems work in harsh environments.",
        expertise: &["Systems Architecture", "Engineering Leadership", "AI"],
        country: "Nigeria",
        avatar: "\u{2699}\u{fe0f}",
        links: Links {
            github: Some("https://github.com/dokafor"),
            linkedin: Some("https://linkedin.com/in/daniel-okafor"),
            website: None,
        },
    },
    TeamMember {
        id: "m-santos",
        name: "Mariana Santos",
        role: "Software Engineer",
        bio: "Builds the data pipelines that move sensor readings from the seabed to the \
            public transparency portal.",
        expertise: &["Data Engineering", "APIs", "Cloud Infrastructure"],
        country: "Brazil",
        avatar: "\u{1f6e0}\u{fe0f}",
        links: Links {
            github: Some("https://github.com/marisantos"),
            linkedin: None,
            website: None,
        },
    },
    TeamMember {
        id: "j-lindqvist",
        name: "Jonas Lindqvist",
        role: "Full-Stack Developer",
        bio: "Owns the public-facing dashboards and the internal operations console.",
        expertise: &["Web Engineering", "Visualization", "UX"],
        country: "Sweden",
        avatar: "\u{1f4bb}",
        links: Links {
            github: Some("https://github.com/jlindqvist"),
            linkedin: Some("https://linkedin.com/in/jonas-lindqvist"),
            website: None,
        },
    },
    TeamMember {
        id: "a-haddad",
        name: "Amira Haddad",
        role: "Backend/AI/ML Engineer",
        bio: "Trains the nodule-grading models that run on CrabBots and keeps the inference \
            stack lean enough for embedded deployment.",
        expertise: &["Machine Learning", "AI", "Embedded Inference"],
        country: "Tunisia",
        avatar: "\u{1f9e0}",
        links: Links {
            github: Some("https://github.com/ahaddad"),
            linkedin: None,
            website: None,
        },
    },
    TeamMember {
        id: "k-tanaka",
        name: "Kenji Tanaka",
        role: "Mechatronic Engineer & ROS2 Developer",
        bio: "Designs the manipulator arms on the collector fleet and maintains the ROS2 \
            control stack.",
        expertise: &["Robotics", "ROS2", "Control Systems"],
        country: "Japan",
        avatar: "\u{1f916}",
        links: Links {
            github: Some("https://github.com/ktanaka"),
            linkedin: Some("https://linkedin.com/in/kenji-tanaka"),
            website: None,
        },
    },
    TeamMember {
        id: "s-moreau",
        name: "Sophie Moreau",
        role: "Marine Robotics Engineer",
        bio: "Responsible for Luna AUV hull design and pressure-tolerant electronics down to \
            6,000 metres.",
        expertise: &["Marine Robotics", "Pressure Systems", "AUV Design"],
        country: "France",
        avatar: "\u{1f30a}",
        links: Links {
            github: None,
            linkedin: Some("https://linkedin.com/in/sophie-moreau"),
            website: Some("https://sophiemoreau.dev"),
        },
    },
    TeamMember {
        id: "p-novak",
        name: "Petr Nov\u{e1}k",
        role: "Fleet Management & RL Engineer",
        bio: "Coordinates the AUV swarm with reinforcement-learning mission planners.",
        expertise: &["Reinforcement Learning", "Fleet Robotics", "Simulation"],
        country: "Czechia",
        avatar: "\u{1f5fa}\u{fe0f}",
        links: Links {
            github: Some("https://github.com/pnovak"),
            linkedin: None,
            website: None,
        },
    },
    TeamMember {
        id: "l-mwangi",
        name: "Lydia Mwangi",
        role: "Deep Learning Engineer",
        bio: "Builds the species-detection networks behind Shellby's marine life protection.",
        expertise: &["Deep Learning", "Computer Vision", "AI"],
        country: "Kenya",
        avatar: "\u{1f40b}",
        links: Links {
            github: Some("https://github.com/lmwangi"),
            linkedin: Some("https://linkedin.com/in/lydia-mwangi"),
            website: None,
        },
    },
    TeamMember {
        id: "c-reyes",
        name: "Carlos Reyes",
        role: "AI Developer & Tech Lead",
        bio: "Leads the predictive-compliance models in DeepSeaGuard and mentors the ML guild.",
        expertise: &["AI", "Predictive Analytics", "Team Leadership"],
        country: "Mexico",
        avatar: "\u{1f4c8}",
        links: Links {
            github: Some("https://github.com/creyes"),
            linkedin: None,
            website: None,
        },
    },
    TeamMember {
        id: "i-petrova",
        name: "Irina Petrova",
        role: "Technical Artist",
        bio: "Turns bathymetry and telemetry into the visual language of the public site.",
        expertise: &["3D Visualization", "Shaders", "Design"],
        country: "Bulgaria",
        avatar: "\u{1f3a8}",
        links: Links {
            github: None,
            linkedin: Some("https://linkedin.com/in/irina-petrova"),
            website: Some("https://irinapetrova.art"),
        },
    },
    TeamMember {
        id: "h-berg",
        name: "Henrik Berg",
        role: "Electrical Engineer",
        bio: "Designs the power and charging systems for the buoy mesh and collector fleet.",
        expertise: &["Power Systems", "Marine Electronics", "Hardware"],
        country: "Norway",
        avatar: "\u{1f50b}",
        links: Links {
            github: Some("https://github.com/hberg"),
            linkedin: None,
            website: None,
        },
    },
];

/// Aggregate roster statistics shown above the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStats {
    pub members: usize,
    pub countries: usize,
    pub expertise_areas: usize,
}

/// Derive roster statistics from the fixtures.
pub fn stats() -> TeamStats {
    let mut countries: Vec<_> = TEAM.iter().map(|m| m.country).collect();
    countries.sort_unstable();
    countries.dedup();

    let mut areas: Vec<_> = TEAM.iter().flat_map(|m| m.expertise.iter()).collect();
    areas.sort_unstable();
    areas.dedup();

    TeamStats {
        members: TEAM.len(),
        countries: countries.len(),
        expertise_areas: areas.len(),
    }
}

/// Role bucket for a member, via the team classifier.
pub fn bucket(member: &TeamMember) -> &'static str {
    Classifier::team().classify(member.role)
}
