//! Compliance dashboard fixtures: standards, alerts, and capability blurbs.

use crate::record::{Metric, Record};

/// Standing of a monitored standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    Compliant,
    Warning,
    Critical,
}

impl Standing {
    pub fn label(self) -> &'static str {
        match self {
            Standing::Compliant => "Compliant",
            Standing::Warning => "Warning",
            Standing::Critical => "Critical",
        }
    }

    /// Lowercase token for filtering and palette lookup.
    pub fn token(self) -> &'static str {
        match self {
            Standing::Compliant => "compliant",
            Standing::Warning => "warning",
            Standing::Critical => "critical",
        }
    }
}

/// A monitored regulatory standard.
#[derive(Debug, Clone, Copy)]
pub struct Standard {
    pub slug: &'static str,
    pub name: &'static str,
    pub standing: Standing,
    pub last_check: &'static str,
    pub score: u8,
    pub score_metric: Metric,
}

impl Record for Standard {
    fn id(&self) -> &'static str {
        self.slug
    }
    fn title(&self) -> &'static str {
        self.name
    }
    fn category(&self) -> &'static str {
        self.standing.token()
    }
    fn body(&self) -> &'static str {
        self.last_check
    }
    fn metrics(&self) -> &[Metric] {
        std::slice::from_ref(&self.score_metric)
    }
}

/// Monitored standards, dashboard order.
pub static STANDARDS: [Standard; 5] = [
    Standard {
        slug: "isa-environmental",
        name: "ISA Environmental Regulations",
        standing: Standing::Compliant,
        last_check: "2 minutes ago",
        score: 95,
        score_metric: Metric::gauge("Score", "95", 95.0),
    },
    Standard {
        slug: "marine-biodiversity",
        name: "Marine Biodiversity Protection",
        standing: Standing::Compliant,
        last_check: "5 minutes ago",
        score: 98,
        score_metric: Metric::gauge("Score", "98", 98.0),
    },
    Standard {
        slug: "sediment-plume",
        name: "Sediment Plume Management",
        standing: Standing::Warning,
        last_check: "1 minute ago",
        score: 87,
        score_metric: Metric::gauge("Score", "87", 87.0),
    },
    Standard {
        slug: "noise-levels",
        name: "Noise Level Standards",
        standing: Standing::Compliant,
        last_check: "3 minutes ago",
        score: 92,
        score_metric: Metric::gauge("Score", "92", 92.0),
    },
    Standard {
        slug: "waste-management",
        name: "Waste Management Protocols",
        standing: Standing::Compliant,
        last_check: "10 minutes ago",
        score: 96,
        score_metric: Metric::gauge("Score", "96", 96.0),
    },
];

/// Alert class on the live feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Warning,
    Critical,
    Success,
}

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One entry on the alert feed.
#[derive(Debug, Clone, Copy)]
pub struct Alert {
    pub id: &'static str,
    pub kind: AlertKind,
    pub title: &'static str,
    pub message: &'static str,
    pub timestamp: &'static str,
    pub severity: Severity,
    pub resolved: bool,
}

/// Alert feed fixtures, newest first.
pub static ALERTS: [Alert; 4] = [
    Alert {
        id: "plume-7b",
        kind: AlertKind::Warning,
        title: "Sediment Plume Concentration",
        message: "Plume concentration approaching threshold in Sector 7B",
        timestamp: "2 minutes ago",
        severity: Severity::Medium,
        resolved: false,
    },
    Alert {
        id: "auv-gamma-maintenance",
        kind: AlertKind::Critical,
        title: "AUV Maintenance Required",
        message: "Luna Gamma requires immediate maintenance - returning to surface",
        timestamp: "5 minutes ago",
        severity: Severity::High,
        resolved: false,
    },
    Alert {
        id: "env-scan-complete",
        kind: AlertKind::Info,
        title: "Environmental Scan Complete",
        message: "Quarterly environmental assessment completed successfully",
        timestamp: "1 hour ago",
        severity: Severity::Low,
        resolved: true,
    },
    Alert {
        id: "isa-verified",
        kind: AlertKind::Success,
        title: "ISA Compliance Verified",
        message: "All operations within ISA regulatory requirements",
        timestamp: "3 hours ago",
        severity: Severity::Low,
        resolved: true,
    },
];

/// Capability blurb on the compliance section.
#[derive(Debug, Clone, Copy)]
pub struct Capability {
    pub title: &'static str,
    pub blurb: &'static str,
}

/// The four compliance capabilities.
pub static CAPABILITIES: [Capability; 4] = [
    Capability {
        title: "Real-time Monitoring",
        blurb: "Continuous surveillance of all operations with instant alerts for any \
            deviation from compliance standards.",
    },
    Capability {
        title: "ISA Regulation Compliance",
        blurb: "Automated adherence to International Seabed Authority regulations and \
            environmental protocols.",
    },
    Capability {
        title: "Environmental Protection",
        blurb: "Advanced monitoring ensures minimal impact on marine ecosystems and \
            biodiversity.",
    },
    Capability {
        title: "Transparent Reporting",
        blurb: "Public access to real-time compliance data and environmental impact \
            assessments.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_scores_match_gauges() {
        for s in &STANDARDS {
            assert_eq!(s.score_metric.percent, Some(f32::from(s.score)));
        }
    }

    #[test]
    fn one_standard_in_warning() {
        let warnings: Vec<_> = STANDARDS
            .iter()
            .filter(|s| s.standing == Standing::Warning)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].slug, "sediment-plume");
    }

    #[test]
    fn active_alerts_are_unresolved() {
        assert_eq!(ALERTS.iter().filter(|a| !a.resolved).count(), 2);
        for alert in ALERTS.iter().filter(|a| a.kind == AlertKind::Critical) {
            assert_eq!(alert.severity, Severity::High);
        }
    }

    #[test]
    fn severity_orders_low_to_high() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }
}
