//! Chart feeds for the data-insights dashboards.
//!
//! Each feed is a static bundle of labelled numeric series plus a chart kind
//! from a closed variant set. The charting surface is an external
//! collaborator: it receives these arrays and draws them; nothing feeds back
//! into the state layer.

/// Kind of chart a feed is drawn as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
    Radar,
}

/// Role of a series within a feed, so the surface can style without
/// free-form color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesRole {
    /// The house data series.
    Primary,
    /// A contrasting series (industry baseline, second measure).
    Comparison,
    /// A regulatory limit, drawn dashed.
    Threshold,
}

/// One labelled series of points.
#[derive(Debug, Clone, Copy)]
pub struct Series {
    pub label: &'static str,
    pub role: SeriesRole,
    pub points: &'static [f64],
}

/// A complete chart feed.
#[derive(Debug, Clone, Copy)]
pub struct ChartFeed {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub labels: &'static [&'static str],
    pub series: &'static [Series],
}

/// Critical-minerals supply vs demand projection.
pub static SUPPLY_DEMAND: ChartFeed = ChartFeed {
    id: "supply-demand",
    title: "Critical Mineral Supply vs Demand",
    kind: ChartKind::Line,
    labels: &[
        "2023", "2024", "2025", "2026", "2027", "2028", "2029", "2030",
    ],
    series: &[
        Series {
            label: "Supply (k MT)",
            role: SeriesRole::Primary,
            points: &[330.0, 345.0, 360.0, 380.0, 395.0, 410.0, 425.0, 440.0],
        },
        Series {
            label: "Demand (k MT)",
            role: SeriesRole::Comparison,
            points: &[360.0, 390.0, 430.0, 480.0, 540.0, 610.0, 690.0, 780.0],
        },
    ],
};

/// Environmental cost, traditional mining vs ocean technology.
pub static ENVIRONMENTAL_IMPACT: ChartFeed = ChartFeed {
    id: "environmental-impact",
    title: "Environmental Impact Comparison",
    kind: ChartKind::Bar,
    labels: &[
        "Water Use",
        "Land Disruption",
        "CO\u{2082} Emissions",
        "Waste",
        "Chemicals",
    ],
    series: &[
        Series {
            label: "Traditional Mining",
            role: SeriesRole::Comparison,
            points: &[85.0, 120.0, 58.0, 1800.0, 12.0],
        },
        Series {
            label: "Ocean Technology",
            role: SeriesRole::Primary,
            points: &[18.0, 2.0, 21.0, 240.0, 3.0],
        },
    ],
};

/// Compliance status breakdown.
pub static COMPLIANCE_BREAKDOWN: ChartFeed = ChartFeed {
    id: "compliance-breakdown",
    title: "Compliance Status",
    kind: ChartKind::Doughnut,
    labels: &["Compliant", "Warning", "Critical"],
    series: &[Series {
        label: "Operations",
        role: SeriesRole::Primary,
        points: &[85.0, 12.0, 3.0],
    }],
};

/// Environmental monitoring radar against the ISA threshold.
pub static ENVIRONMENTAL_MONITORING: ChartFeed = ChartFeed {
    id: "environmental-monitoring",
    title: "Environmental Monitoring",
    kind: ChartKind::Radar,
    labels: &[
        "Water Quality",
        "Sediment Levels",
        "Species Protection",
        "Noise Levels",
        "Plume Dispersion",
        "Recovery Rate",
    ],
    series: &[
        Series {
            label: "Current Status",
            role: SeriesRole::Primary,
            points: &[92.0, 88.0, 95.0, 90.0, 85.0, 93.0],
        },
        Series {
            label: "ISA Threshold",
            role: SeriesRole::Threshold,
            points: &[80.0, 80.0, 80.0, 80.0, 80.0, 80.0],
        },
    ],
};

/// Fleet battery and efficiency readings.
pub static AUV_FLEET: ChartFeed = ChartFeed {
    id: "auv-fleet",
    title: "AUV Fleet Status",
    kind: ChartKind::Bar,
    labels: &[
        "AUV-Alpha",
        "AUV-Beta",
        "AUV-Gamma",
        "AUV-Delta",
        "AUV-Epsilon",
    ],
    series: &[
        Series {
            label: "Battery Level (%)",
            role: SeriesRole::Primary,
            points: &[87.0, 92.0, 78.0, 95.0, 83.0],
        },
        Series {
            label: "Efficiency (%)",
            role: SeriesRole::Comparison,
            points: &[94.0, 89.0, 91.0, 96.0, 88.0],
        },
    ],
};

/// Sediment plume dispersion over 24 hours against the ISA limit.
pub static SEDIMENT_PLUME: ChartFeed = ChartFeed {
    id: "sediment-plume",
    title: "Sediment Plume Dispersion",
    kind: ChartKind::Line,
    labels: &[
        "0h", "2h", "4h", "6h", "8h", "10h", "12h", "14h", "16h", "18h", "20h", "22h", "24h",
    ],
    series: &[
        Series {
            label: "Plume Concentration (mg/L)",
            role: SeriesRole::Primary,
            points: &[
                0.0, 45.0, 78.0, 92.0, 85.0, 72.0, 58.0, 41.0, 28.0, 18.0, 12.0, 8.0, 5.0,
            ],
        },
        Series {
            label: "ISA Limit (mg/L)",
            role: SeriesRole::Threshold,
            points: &[
                50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 50.0,
            ],
        },
    ],
};

/// The dashboard feeds in display order.
pub fn dashboards() -> [&'static ChartFeed; 6] {
    [
        &SUPPLY_DEMAND,
        &ENVIRONMENTAL_IMPACT,
        &COMPLIANCE_BREAKDOWN,
        &ENVIRONMENTAL_MONITORING,
        &AUV_FLEET,
        &SEDIMENT_PLUME,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_series_matches_label_count() {
        for feed in dashboards() {
            for series in feed.series {
                assert_eq!(
                    series.points.len(),
                    feed.labels.len(),
                    "{}::{} length mismatch",
                    feed.id,
                    series.label
                );
            }
        }
    }

    #[test]
    fn feed_ids_are_unique() {
        let mut ids: Vec<_> = dashboards().iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn thresholds_are_flat() {
        for feed in dashboards() {
            for series in feed
                .series
                .iter()
                .filter(|s| s.role == SeriesRole::Threshold)
            {
                let first = series.points[0];
                assert!(series.points.iter().all(|p| (p - first).abs() < f64::EPSILON));
            }
        }
    }

    #[test]
    fn doughnut_is_single_series() {
        assert_eq!(COMPLIANCE_BREAKDOWN.series.len(), 1);
        let total: f64 = COMPLIANCE_BREAKDOWN.series[0].points.iter().sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn demand_outpaces_supply() {
        let supply = SUPPLY_DEMAND.series[0].points;
        let demand = SUPPLY_DEMAND.series[1].points;
        for (s, d) in supply.iter().zip(demand) {
            assert!(d > s);
        }
    }
}
