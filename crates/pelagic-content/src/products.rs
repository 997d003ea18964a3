//! Ecosystem product dossiers.
//!
//! Nine products make up the ecosystem grid; each carries the card blurb, the
//! long-form dossier shown in the product modal, spec-sheet rows, gauge
//! readings, and supporting info sections.

use crate::accent::Accent;
use crate::record::{Metric, Record};

/// Release status shown on the product badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductStatus {
    ProductionReady,
    Available,
}

impl ProductStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProductStatus::ProductionReady => "Production Ready",
            ProductStatus::Available => "Available",
        }
    }
}

/// Titled info section in the product modal.
#[derive(Debug, Clone, Copy)]
pub struct InfoSection {
    pub title: &'static str,
    pub body: &'static str,
}

/// One product in the ecosystem catalog.
#[derive(Debug, Clone, Copy)]
pub struct Product {
    pub key: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub status: ProductStatus,
    /// Card blurb on the ecosystem grid.
    pub blurb: &'static str,
    /// Long-form dossier copy.
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub specs: &'static [Metric],
    pub gauges: &'static [Metric],
    pub info: &'static [InfoSection],
    pub updated: &'static str,
    pub accent: Accent,
}

impl Record for Product {
    fn id(&self) -> &'static str {
        self.key
    }
    fn title(&self) -> &'static str {
        self.name
    }
    fn category(&self) -> &'static str {
        self.category
    }
    fn body(&self) -> &'static str {
        self.blurb
    }
    fn metrics(&self) -> &'static [Metric] {
        self.gauges
    }
}

/// The ecosystem catalog, in grid order.
pub static PRODUCTS: [Product; 9] = [
    Product {
        key: "deepseaguard",
        name: "DeepSeaGuard",
        category: "compliance",
        status: ProductStatus::ProductionReady,
        blurb: "Real-time compliance dashboard for ISA regulations and environmental monitoring",
        description: "Advanced real-time compliance monitoring system that ensures adherence to \
            International Seabed Authority (ISA) regulations and environmental protection \
            standards, with instant alerts and detailed reporting across all operations.",
        features: &[
            "Real-time ISA compliance monitoring and alerting",
            "Environmental impact assessment and tracking",
            "Automated regulatory reporting and documentation",
            "Predictive compliance risk assessment",
        ],
        specs: &[
            Metric::spec("Response Time", "< 2 seconds"),
            Metric::spec("Data Sources", "50+ sensors"),
            Metric::spec("Uptime", "99.9%"),
            Metric::spec("Compliance Rate", "95%"),
            Metric::spec("Alert Accuracy", "98.5%"),
            Metric::spec("Data Retention", "7 years"),
        ],
        gauges: &[
            Metric::gauge("Compliance Score", "95%", 95.0),
            Metric::gauge("System Uptime", "99.9%", 99.9),
            Metric::gauge("Alert Response", "98%", 98.0),
            Metric::gauge("Data Accuracy", "99.2%", 99.2),
        ],
        info: &[
            InfoSection {
                title: "Regulatory Compliance",
                body: "Fully compliant with ISA regulations ISBA/21/LTC/15 and international \
                    environmental standards. Automated reporting to regulatory bodies with \
                    real-time status updates.",
            },
            InfoSection {
                title: "Integration Capabilities",
                body: "Integrates with existing mining operations, environmental monitoring \
                    systems, and third-party compliance tools. RESTful API and webhook support.",
            },
        ],
        updated: "December 2024",
        accent: Accent::Azure,
    },
    Product {
        key: "sealink",
        name: "SeaLink",
        category: "communication",
        status: ProductStatus::ProductionReady,
        blurb: "Autonomous buoy mesh network for communication and data transmission",
        description: "Autonomous buoy mesh network providing reliable communication \
            infrastructure for deep-sea operations: real-time data transmission, command and \
            control, and emergency communication across vast ocean areas.",
        features: &[
            "Mesh network topology with self-healing capabilities",
            "Low-latency data transmission (< 100ms)",
            "Satellite and underwater communication links",
            "Solar and wave energy harvesting",
        ],
        specs: &[
            Metric::spec("Coverage Area", "10,000 km\u{b2}"),
            Metric::spec("Data Rate", "100 Mbps"),
            Metric::spec("Latency", "< 100ms"),
            Metric::spec("Battery Life", "5+ years"),
            Metric::spec("Depth Rating", "6,000m"),
            Metric::spec("Buoy Count", "50+ units"),
        ],
        gauges: &[
            Metric::gauge("Network Uptime", "99.8%", 99.8),
            Metric::gauge("Data Throughput", "95%", 95.0),
            Metric::gauge("Signal Strength", "98%", 98.0),
            Metric::gauge("Energy Efficiency", "92%", 92.0),
        ],
        info: &[
            InfoSection {
                title: "Autonomous Operations",
                body: "Self-deploying and self-maintaining buoy network with ML-powered \
                    optimization and automatic reconfiguration to environmental conditions.",
            },
            InfoSection {
                title: "Scalability",
                body: "Modular design scales from small operations to large projects with \
                    thousands of connected devices.",
            },
        ],
        updated: "November 2024",
        accent: Accent::Cyan,
    },
    Product {
        key: "shellby",
        name: "Shellby",
        category: "environmental",
        status: ProductStatus::ProductionReady,
        blurb: "Coastal sentinel system for environmental protection and monitoring",
        description: "Coastal sentinel system protecting and monitoring coastal ecosystems \
            during mining operations, with early warning systems and automated protection \
            protocols.",
        features: &[
            "Real-time coastal ecosystem monitoring",
            "Marine life detection and protection",
            "Sediment plume tracking and analysis",
            "Automated protection protocols",
        ],
        specs: &[
            Metric::spec("Monitoring Range", "50 km radius"),
            Metric::spec("Sensor Types", "15+ different"),
            Metric::spec("Detection Accuracy", "99.5%"),
            Metric::spec("Response Time", "< 30 seconds"),
            Metric::spec("Data Points", "1,000+/hour"),
            Metric::spec("Alert Thresholds", "Customizable"),
        ],
        gauges: &[
            Metric::gauge("Detection Accuracy", "99.5%", 99.5),
            Metric::gauge("Response Time", "98%", 98.0),
            Metric::gauge("False Positives", "0.2%", 0.2),
            Metric::gauge("Coverage Area", "100%", 100.0),
        ],
        info: &[
            InfoSection {
                title: "Marine Life Protection",
                body: "Detects and protects marine life including whales and dolphins, with \
                    automatic operation suspension when threats are detected.",
            },
            InfoSection {
                title: "Environmental Standards",
                body: "Exceeds MARPOL, IMO guidelines, and regional marine protection \
                    regulations, with continuous compliance monitoring.",
            },
        ],
        updated: "October 2024",
        accent: Accent::Teal,
    },
    Product {
        key: "luna-auv",
        name: "Luna AUV",
        category: "vehicles",
        status: ProductStatus::ProductionReady,
        blurb: "Deep-sea autonomous underwater vehicles for exploration and data collection",
        description: "Deep-sea autonomous underwater vehicles for exploration, data collection, \
            and precision operations at extreme depths, operating independently or in \
            coordinated swarms.",
        features: &[
            "Autonomous navigation and mission planning",
            "Deep-sea operation capability (6,000m+)",
            "Swarm coordination and communication",
            "Long-duration missions (24+ hours)",
        ],
        specs: &[
            Metric::spec("Max Depth", "6,000m"),
            Metric::spec("Endurance", "24+ hours"),
            Metric::spec("Speed", "5 knots"),
            Metric::spec("Payload", "50kg"),
            Metric::spec("Sensors", "20+ types"),
            Metric::spec("Swarm Size", "10+ units"),
        ],
        gauges: &[
            Metric::gauge("Mission Success", "97%", 97.0),
            Metric::gauge("Battery Efficiency", "94%", 94.0),
            Metric::gauge("Data Quality", "99.1%", 99.1),
            Metric::gauge("Swarm Coordination", "96%", 96.0),
        ],
        info: &[
            InfoSection {
                title: "Swarm Intelligence",
                body: "Coordinated swarm operations let multiple AUVs share data and optimize \
                    collective performance on complex tasks.",
            },
            InfoSection {
                title: "Modular Design",
                body: "Modular payload system allows customization of sensors and tools per \
                    mission requirements.",
            },
        ],
        updated: "December 2024",
        accent: Accent::Green,
    },
    Product {
        key: "crabbots",
        name: "CrabBots",
        category: "mining",
        status: ProductStatus::ProductionReady,
        blurb: "Autonomous nodule collectors with precision harvesting capabilities",
        description: "Precision nodule collectors designed for efficient, environmentally \
            conscious collection of polymetallic nodules with minimal seabed disturbance.",
        features: &[
            "Precision harvesting with real-time quality assessment",
            "Minimal seabed disturbance design",
            "Environmental impact monitoring",
            "Self-cleaning and maintenance systems",
        ],
        specs: &[
            Metric::spec("Collection Rate", "500kg/hour"),
            Metric::spec("Precision", "\u{b1}2cm"),
            Metric::spec("Efficiency", "95%"),
            Metric::spec("Disturbance Area", "< 1m\u{b2}"),
            Metric::spec("Operating Depth", "4,000m"),
            Metric::spec("Battery Life", "12 hours"),
        ],
        gauges: &[
            Metric::gauge("Collection Efficiency", "95%", 95.0),
            Metric::gauge("Precision Accuracy", "98%", 98.0),
            Metric::gauge("Environmental Impact", "Minimal", 85.0),
            Metric::gauge("Operational Uptime", "92%", 92.0),
        ],
        info: &[
            InfoSection {
                title: "Environmental Design",
                body: "Gentle collection methods and real-time monitoring of seabed conditions \
                    minimize environmental impact.",
            },
            InfoSection {
                title: "Quality Control",
                body: "On-board quality assessment ensures only high-grade material is \
                    collected and processed.",
            },
        ],
        updated: "November 2024",
        accent: Accent::Emerald,
    },
    Product {
        key: "processing-stations",
        name: "Processing Stations",
        category: "processing",
        status: ProductStatus::ProductionReady,
        blurb: "Inland refineries for sustainable mineral processing and refinement",
        description: "Inland refineries for sustainable mineral processing, extracting maximum \
            value from collected materials while holding to environmental standards.",
        features: &[
            "Zero-waste production methods",
            "Advanced separation technologies",
            "Automated processing lines",
            "Energy-efficient operations",
        ],
        specs: &[
            Metric::spec("Processing Capacity", "1,000 tons/day"),
            Metric::spec("Recovery Rate", "98.5%"),
            Metric::spec("Energy Efficiency", "95%"),
            Metric::spec("Waste Reduction", "99%"),
            Metric::spec("Water Usage", "90% less"),
            Metric::spec("Emissions", "Carbon neutral"),
        ],
        gauges: &[
            Metric::gauge("Processing Efficiency", "98.5%", 98.5),
            Metric::gauge("Energy Efficiency", "95%", 95.0),
            Metric::gauge("Waste Reduction", "99%", 99.0),
            Metric::gauge("Quality Control", "99.8%", 99.8),
        ],
        info: &[
            InfoSection {
                title: "Sustainable Processing",
                body: "Zero-waste production with full material utilization and minimal \
                    environmental impact.",
            },
            InfoSection {
                title: "Environmental Standards",
                body: "Carbon-neutral operations, minimal water usage, and comprehensive waste \
                    management.",
            },
        ],
        updated: "December 2024",
        accent: Accent::Lime,
    },
    Product {
        key: "data-infrastructure",
        name: "Data Infrastructure",
        category: "infrastructure",
        status: ProductStatus::ProductionReady,
        blurb: "Secure databases, APIs, and cloud systems for data management",
        description: "Secure, scalable data infrastructure supporting the whole ecosystem: \
            real-time analytics, secure storage, and seamless integration.",
        features: &[
            "Real-time data processing and analytics",
            "Secure cloud and edge computing",
            "API-first architecture",
            "Comprehensive data security",
        ],
        specs: &[
            Metric::spec("Data Processing", "1TB/hour"),
            Metric::spec("Storage Capacity", "10PB+"),
            Metric::spec("API Response", "< 50ms"),
            Metric::spec("Uptime", "99.99%"),
            Metric::spec("Security", "SOC 2 Type II"),
            Metric::spec("Scalability", "Unlimited"),
        ],
        gauges: &[
            Metric::gauge("System Uptime", "99.99%", 99.99),
            Metric::gauge("Data Processing", "98%", 98.0),
            Metric::gauge("Security Score", "100%", 100.0),
            Metric::gauge("API Performance", "99.5%", 99.5),
        ],
        info: &[
            InfoSection {
                title: "Security & Compliance",
                body: "End-to-end encryption, multi-factor authentication, and audit logging \
                    on SOC 2 Type II compliant infrastructure.",
            },
            InfoSection {
                title: "Integration & APIs",
                body: "RESTful and GraphQL APIs for third-party systems and custom \
                    applications.",
            },
        ],
        updated: "December 2024",
        accent: Accent::Amber,
    },
    Product {
        key: "external-systems",
        name: "External Systems",
        category: "integration",
        status: ProductStatus::ProductionReady,
        blurb: "Integration with regulators, NGOs, and partner organizations",
        description: "Integration platform connecting operations with regulators, NGOs, \
            partners, and external stakeholders for transparency and collaboration.",
        features: &[
            "Regulatory system integration",
            "NGO and stakeholder portals",
            "Transparency reporting tools",
            "Public data access portals",
        ],
        specs: &[
            Metric::spec("Integration Points", "50+"),
            Metric::spec("API Endpoints", "200+"),
            Metric::spec("Data Sharing", "Real-time"),
            Metric::spec("Compliance Rate", "100%"),
            Metric::spec("Stakeholder Access", "24/7"),
            Metric::spec("Documentation", "Automated"),
        ],
        gauges: &[
            Metric::gauge("Integration Success", "100%", 100.0),
            Metric::gauge("Data Accuracy", "99.9%", 99.9),
            Metric::gauge("Stakeholder Satisfaction", "98%", 98.0),
            Metric::gauge("Compliance Rate", "100%", 100.0),
        ],
        info: &[
            InfoSection {
                title: "Regulatory Integration",
                body: "Direct integration with ISA, IMO, and other regulatory bodies for \
                    automated compliance reporting.",
            },
            InfoSection {
                title: "Transparency & Trust",
                body: "Public data access and transparency reporting demonstrate commitment to \
                    responsible ocean mining.",
            },
        ],
        updated: "December 2024",
        accent: Accent::Ember,
    },
    Product {
        key: "triton-services",
        name: "Triton Services",
        category: "services",
        status: ProductStatus::Available,
        blurb: "Consulting services and open-source tools for the industry",
        description: "Consulting services and open-source tools supporting the sustainable \
            ocean mining industry: strategy, implementation, training, and community support.",
        features: &[
            "Strategic consulting and planning",
            "Open-source tool development",
            "Training and education programs",
            "Regulatory compliance consulting",
        ],
        specs: &[
            Metric::spec("Consulting Hours", "24/7"),
            Metric::spec("Open Source Tools", "20+"),
            Metric::spec("Training Programs", "10+"),
            Metric::spec("Client Satisfaction", "98%"),
            Metric::spec("Response Time", "< 4 hours"),
            Metric::spec("Support Coverage", "Global"),
        ],
        gauges: &[
            Metric::gauge("Client Satisfaction", "98%", 98.0),
            Metric::gauge("Project Success", "95%", 95.0),
            Metric::gauge("Response Time", "96%", 96.0),
            Metric::gauge("Knowledge Transfer", "99%", 99.0),
        ],
        info: &[
            InfoSection {
                title: "Open Source Community",
                body: "Community-driven development of tools and libraries benefiting the \
                    whole industry.",
            },
            InfoSection {
                title: "Global Support",
                body: "Worldwide support network with local expertise and 24/7 technical \
                    assistance.",
            },
        ],
        updated: "December 2024",
        accent: Accent::Coral,
    },
];

/// Look up a product by key.
pub fn by_key(key: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = PRODUCTS.iter().map(|p| p.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), PRODUCTS.len());
    }

    #[test]
    fn lookup_by_key() {
        assert_eq!(by_key("sealink").unwrap().name, "SeaLink");
        assert!(by_key("nonexistent").is_none());
    }

    #[test]
    fn every_product_has_full_dossier() {
        for p in &PRODUCTS {
            assert!(!p.features.is_empty(), "{} missing features", p.key);
            assert_eq!(p.specs.len(), 6, "{} spec sheet incomplete", p.key);
            assert_eq!(p.gauges.len(), 4, "{} gauges incomplete", p.key);
            assert!(!p.info.is_empty(), "{} missing info sections", p.key);
        }
    }

    #[test]
    fn gauges_carry_percentages() {
        for p in &PRODUCTS {
            for g in p.gauges {
                let pct = g.percent.expect("gauge without percent");
                assert!((0.0..=100.0).contains(&pct));
            }
        }
    }

    #[test]
    fn accents_follow_category_table() {
        for p in &PRODUCTS {
            assert_eq!(p.accent, crate::accent::Accent::for_category(p.category));
        }
    }
}
