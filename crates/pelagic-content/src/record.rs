//! Uniform record interface.
//!
//! Every catalog record (product, article, team member, compliance standard,
//! AUV unit) exposes the same read-only surface through [`Record`]. The state
//! layer filters and groups through this trait without knowing the concrete
//! fixture type.

/// A labelled numeric-ish reading attached to a record.
///
/// The display value is pre-formatted (`"99.9%"`, `"< 2 seconds"`); `percent`
/// carries the raw gauge value when one exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub percent: Option<f32>,
}

impl Metric {
    /// A metric with no gauge value (spec-sheet rows like "Depth Rating: 6,000m").
    pub const fn spec(label: &'static str, value: &'static str) -> Self {
        Self {
            label,
            value,
            percent: None,
        }
    }

    /// A metric backed by a 0-100 gauge reading.
    pub const fn gauge(label: &'static str, value: &'static str, percent: f32) -> Self {
        Self {
            label,
            value,
            percent: Some(percent),
        }
    }
}

/// Read-only interface over a content record.
///
/// Records are static fixtures: created at load, never mutated, alive for the
/// page session. Identity is the `id` string, unique within a catalog.
pub trait Record {
    /// Unique identifier within the owning catalog.
    fn id(&self) -> &'static str;

    /// Display title.
    fn title(&self) -> &'static str;

    /// Primary category token (lowercase).
    fn category(&self) -> &'static str;

    /// Body or summary copy.
    fn body(&self) -> &'static str;

    /// Secondary tags; empty for records that filter on category alone.
    fn tags(&self) -> &'static [&'static str] {
        &[]
    }

    /// Labelled metrics; empty where the record carries none.
    fn metrics(&self) -> &[Metric] {
        &[]
    }

    /// Whether this record matches a filter token.
    ///
    /// The `all` sentinel matches everything. Otherwise the token must equal
    /// the category or appear (case-insensitively) inside one of the tags,
    /// mirroring the site's substring expertise filter.
    fn matches(&self, token: &str) -> bool {
        if token == crate::record::ALL_TOKEN {
            return true;
        }
        if self.category().eq_ignore_ascii_case(token) {
            return true;
        }
        let needle = token.to_ascii_lowercase();
        self.tags()
            .iter()
            .any(|tag| tag.to_ascii_lowercase().contains(&needle))
    }
}

/// Sentinel filter token meaning "no filtering".
pub const ALL_TOKEN: &str = "all";

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        category: &'static str,
        tags: &'static [&'static str],
    }

    impl Record for Probe {
        fn id(&self) -> &'static str {
            "probe"
        }
        fn title(&self) -> &'static str {
            "Probe"
        }
        fn category(&self) -> &'static str {
            self.category
        }
        fn body(&self) -> &'static str {
            ""
        }
        fn tags(&self) -> &'static [&'static str] {
            self.tags
        }
    }

    #[test]
    fn all_matches_everything() {
        let probe = Probe {
            category: "technology",
            tags: &[],
        };
        assert!(probe.matches(ALL_TOKEN));
    }

    #[test]
    fn category_match_is_case_insensitive() {
        let probe = Probe {
            category: "technology",
            tags: &[],
        };
        assert!(probe.matches("Technology"));
        assert!(!probe.matches("sustainability"));
    }

    #[test]
    fn tag_match_is_substring() {
        let probe = Probe {
            category: "crew",
            tags: &["Marine Robotics", "ROS2"],
        };
        assert!(probe.matches("robotics"));
        assert!(probe.matches("marine"));
        assert!(!probe.matches("ai"));
    }

    #[test]
    fn metric_constructors() {
        let spec = Metric::spec("Max Depth", "6,000m");
        assert!(spec.percent.is_none());
        let gauge = Metric::gauge("Uptime", "99.9%", 99.9);
        assert_eq!(gauge.percent, Some(99.9));
    }
}
