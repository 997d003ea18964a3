//! First-match role classification.
//!
//! The team grid groups members by a role bucket derived from the free-form
//! role string. The mapping is an explicit ordered rule table: rules are
//! evaluated top to bottom, the first matching rule wins, and roles nothing
//! claims fall into the fallback bucket. Rule order is load-bearing - a role
//! like "Backend/AI/ML Engineer" belongs to Engineering, not AI/ML, because
//! the Engineering rule is evaluated first.

/// One classification rule: a bucket plus the keywords that claim a role.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
}

impl Rule {
    /// Whether this rule claims the given role string.
    pub fn claims(&self, role: &str) -> bool {
        self.keywords.iter().any(|kw| role.contains(kw))
    }
}

/// Ordered rule table for the team roster.
const TEAM_RULES: &[Rule] = &[
    Rule {
        category: "Leadership",
        keywords: &["Founder", "Chief"],
    },
    Rule {
        category: "Engineering",
        keywords: &["Software", "Full-Stack", "Backend", "Electronics", "Embedded"],
    },
    Rule {
        category: "Robotics",
        keywords: &["Mechatronic", "Robotics", "Marine", "Fleet"],
    },
    Rule {
        category: "AI/ML",
        keywords: &["Deep Learning", "AI", "ML"],
    },
];

/// Ordered first-match classifier with a fallback bucket.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    rules: &'static [Rule],
    fallback: &'static str,
}

impl Classifier {
    /// The classifier used by the team section.
    pub fn team() -> Self {
        Self {
            rules: TEAM_RULES,
            fallback: "Specialized",
        }
    }

    /// Build a classifier over a custom rule table.
    pub fn new(rules: &'static [Rule], fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// Classify a role string; first matching rule wins.
    pub fn classify(&self, role: &str) -> &'static str {
        self.rules
            .iter()
            .find(|rule| rule.claims(role))
            .map(|rule| rule.category)
            .unwrap_or(self.fallback)
    }

    /// Buckets in evaluation order, fallback last.
    pub fn buckets(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules
            .iter()
            .map(|rule| rule.category)
            .chain(std::iter::once(self.fallback))
    }

    /// The fallback bucket name.
    pub fn fallback(&self) -> &'static str {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leadership_wins_on_founder() {
        let c = Classifier::team();
        assert_eq!(c.classify("Founder & CEO"), "Leadership");
        assert_eq!(c.classify("Chief Technology Officer (CTO)"), "Leadership");
    }

    #[test]
    fn engineering_claims_backend_before_ai() {
        // "Backend/AI/ML Engineer" could match two rules; the Engineering
        // rule is evaluated first and must win.
        let c = Classifier::team();
        assert_eq!(c.classify("Backend/AI/ML Engineer"), "Engineering");
    }

    #[test]
    fn robotics_bucket() {
        let c = Classifier::team();
        assert_eq!(c.classify("Marine Robotics Engineer"), "Robotics");
        assert_eq!(c.classify("Mechatronic Engineer & ROS2 Developer"), "Robotics");
    }

    #[test]
    fn ai_bucket() {
        let c = Classifier::team();
        assert_eq!(c.classify("Deep Learning Engineer"), "AI/ML");
    }

    #[test]
    fn unmatched_role_falls_back() {
        let c = Classifier::team();
        assert_eq!(c.classify("Technical Artist"), "Specialized");
    }

    #[test]
    fn buckets_preserve_rule_order() {
        let c = Classifier::team();
        let buckets: Vec<_> = c.buckets().collect();
        assert_eq!(
            buckets,
            vec!["Leadership", "Engineering", "Robotics", "AI/ML", "Specialized"]
        );
    }
}
