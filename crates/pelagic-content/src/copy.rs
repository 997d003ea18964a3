//! Static page copy: hero, contact channels, quick actions, footer columns.

/// Hero banner copy.
#[derive(Debug, Clone, Copy)]
pub struct Hero {
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub lede: &'static str,
    pub pillars: &'static [&'static str],
    pub stats: &'static [(&'static str, &'static str)],
}

/// The hero fixture.
pub static HERO: Hero = Hero {
    headline: "Redefining Ocean Mining",
    subheadline: "with AI, Autonomy, and Ethics",
    lede: "Pioneering sustainable deep-sea mining through advanced autonomous systems, \
        real-time environmental monitoring, and transparent compliance management.",
    pillars: &["Sustainability", "Compliance", "Transparency", "Innovation"],
    stats: &[
        ("95%", "Environmental Compliance"),
        ("24/7", "Real-time Monitoring"),
        ("50+", "Autonomous Vehicles"),
        ("100%", "Transparent Operations"),
    ],
};

/// A way to reach the company.
#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub title: &'static str,
    pub lines: &'static [&'static str],
    pub action: &'static str,
}

/// Contact channels in display order.
pub static CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        title: "Email",
        lines: &["contact@tritonmining.io"],
        action: "mailto:contact@tritonmining.io",
    },
    ContactChannel {
        title: "Phone",
        lines: &["+1 (239) 428-3414", "Mon-Fri 9AM-6PM PST"],
        action: "tel:+12394283414",
    },
    ContactChannel {
        title: "Office",
        lines: &[
            "7901 4th St N STE 300, St. Pete Beach, Florida 33702",
            "United States",
        ],
        action: "https://maps.google.com",
    },
    ContactChannel {
        title: "GitHub",
        lines: &["github.com/tritonmining", "Open Source Projects"],
        action: "https://github.com/tritonminingco",
    },
];

/// Quick action cards beside the contact form.
#[derive(Debug, Clone, Copy)]
pub struct QuickAction {
    pub title: &'static str,
    pub blurb: &'static str,
    pub action: &'static str,
}

/// The quick actions.
pub static QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        title: "Schedule a Demo",
        blurb: "See our technology in action",
        action: "https://calendly.com/tritonminingc",
    },
    QuickAction {
        title: "Press Inquiries",
        blurb: "Media and press contacts",
        action: "mailto:contacts@tritonmining.io",
    },
    QuickAction {
        title: "Partnership",
        blurb: "Collaborate with us",
        action: "mailto:contact@tritonmining.io",
    },
];

/// A named column of footer links.
#[derive(Debug, Clone, Copy)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

/// Footer link columns.
pub static FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        title: "Company",
        links: &[
            ("About Us", "#about"),
            ("Our Mission", "#mission"),
            ("Careers", "#careers"),
            ("Press", "#press"),
        ],
    },
    FooterColumn {
        title: "Technology",
        links: &[
            ("DeepSeaGuard", "#deepseaguard"),
            ("Luna AUV", "#luna-auv"),
            ("CrabBots", "#crabbots"),
            ("SeaLink", "#sealink"),
        ],
    },
    FooterColumn {
        title: "Resources",
        links: &[
            ("Documentation", "#docs"),
            ("API Reference", "#api"),
            ("Open Source", "#opensource"),
            ("Research Papers", "#research"),
        ],
    },
    FooterColumn {
        title: "Legal",
        links: &[
            ("Privacy Policy", "#privacy"),
            ("Terms of Service", "#terms"),
            ("Environmental Policy", "#environmental"),
            ("Compliance", "#compliance"),
        ],
    },
];

/// Copyright line.
pub const COPYRIGHT: &str = "\u{a9} 2024 Triton Mining Co. All rights reserved.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_has_four_pillars_and_stats() {
        assert_eq!(HERO.pillars.len(), 4);
        assert_eq!(HERO.stats.len(), 4);
    }

    #[test]
    fn footer_columns_are_balanced() {
        for col in &FOOTER_COLUMNS {
            assert_eq!(col.links.len(), 4, "{} column unbalanced", col.title);
        }
    }

    #[test]
    fn every_channel_has_an_action() {
        for ch in &CONTACT_CHANNELS {
            assert!(!ch.action.is_empty());
            assert!(!ch.lines.is_empty());
        }
    }
}
