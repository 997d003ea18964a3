//! AUV fleet and survey-zone fixtures for the map surface.
//!
//! The map renders the Clarion-Clipperton Zone with AUV markers and sediment
//! plume overlays. Coordinates are plain lat/lon degrees; the map surface is
//! an external collaborator fed these fixtures verbatim.

use crate::record::{Metric, Record};

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Axis-aligned geographic bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub southwest: GeoPoint,
    pub northeast: GeoPoint,
}

impl GeoBounds {
    /// Whether a point lies within the bounds (inclusive).
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat >= self.southwest.lat
            && p.lat <= self.northeast.lat
            && p.lon >= self.southwest.lon
            && p.lon <= self.northeast.lon
    }
}

/// Clarion-Clipperton Zone center.
pub const CCZ_CENTER: GeoPoint = GeoPoint {
    lat: 10.0,
    lon: -140.0,
};

/// Clarion-Clipperton Zone display bounds.
pub const CCZ_BOUNDS: GeoBounds = GeoBounds {
    southwest: GeoPoint {
        lat: 5.0,
        lon: -160.0,
    },
    northeast: GeoPoint {
        lat: 15.0,
        lon: -120.0,
    },
};

/// Operational status of an AUV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuvStatus {
    Active,
    Maintenance,
}

impl AuvStatus {
    pub fn token(self) -> &'static str {
        match self {
            AuvStatus::Active => "active",
            AuvStatus::Maintenance => "maintenance",
        }
    }
}

/// One unit in the AUV fleet.
#[derive(Debug, Clone, Copy)]
pub struct AuvUnit {
    pub id: &'static str,
    pub name: &'static str,
    pub position: GeoPoint,
    pub status: AuvStatus,
    pub battery_pct: u8,
    pub depth_m: u32,
    pub water_temp_c: f64,
    pub pressure_bar: u32,
    pub last_update: &'static str,
    pub mission: &'static str,
    pub efficiency_pct: u8,
    telemetry: [Metric; 3],
}

impl AuvUnit {
    /// Telemetry rows for the marker popup.
    pub fn telemetry(&self) -> &[Metric] {
        &self.telemetry
    }
}

impl Record for AuvUnit {
    fn id(&self) -> &'static str {
        self.id
    }
    fn title(&self) -> &'static str {
        self.name
    }
    fn category(&self) -> &'static str {
        self.status.token()
    }
    fn body(&self) -> &'static str {
        self.mission
    }
    fn metrics(&self) -> &'static [Metric] {
        &[]
    }
}

/// The fleet, marker order.
pub static FLEET: [AuvUnit; 4] = [
    AuvUnit {
        id: "auv-001",
        name: "Luna Alpha",
        position: GeoPoint {
            lat: 9.5,
            lon: -142.3,
        },
        status: AuvStatus::Active,
        battery_pct: 87,
        depth_m: 4200,
        water_temp_c: 1.2,
        pressure_bar: 420,
        last_update: "2 minutes ago",
        mission: "Nodule Survey",
        efficiency_pct: 94,
        telemetry: [
            Metric::gauge("Battery", "87%", 87.0),
            Metric::spec("Depth", "4,200m"),
            Metric::gauge("Efficiency", "94%", 94.0),
        ],
    },
    AuvUnit {
        id: "auv-002",
        name: "Luna Beta",
        position: GeoPoint {
            lat: 10.2,
            lon: -138.7,
        },
        status: AuvStatus::Active,
        battery_pct: 92,
        depth_m: 4100,
        water_temp_c: 1.4,
        pressure_bar: 410,
        last_update: "1 minute ago",
        mission: "Environmental Monitoring",
        efficiency_pct: 89,
        telemetry: [
            Metric::gauge("Battery", "92%", 92.0),
            Metric::spec("Depth", "4,100m"),
            Metric::gauge("Efficiency", "89%", 89.0),
        ],
    },
    AuvUnit {
        id: "auv-003",
        name: "Luna Gamma",
        position: GeoPoint {
            lat: 11.1,
            lon: -141.2,
        },
        status: AuvStatus::Maintenance,
        battery_pct: 45,
        depth_m: 0,
        water_temp_c: 25.0,
        pressure_bar: 1,
        last_update: "5 minutes ago",
        mission: "Surface Maintenance",
        efficiency_pct: 78,
        telemetry: [
            Metric::gauge("Battery", "45%", 45.0),
            Metric::spec("Depth", "surface"),
            Metric::gauge("Efficiency", "78%", 78.0),
        ],
    },
    AuvUnit {
        id: "auv-004",
        name: "Luna Delta",
        position: GeoPoint {
            lat: 8.8,
            lon: -139.5,
        },
        status: AuvStatus::Active,
        battery_pct: 95,
        depth_m: 4300,
        water_temp_c: 1.1,
        pressure_bar: 430,
        last_update: "30 seconds ago",
        mission: "Nodule Collection",
        efficiency_pct: 96,
        telemetry: [
            Metric::gauge("Battery", "95%", 95.0),
            Metric::spec("Depth", "4,300m"),
            Metric::gauge("Efficiency", "96%", 96.0),
        ],
    },
];

/// Circular sediment plume overlay.
#[derive(Debug, Clone, Copy)]
pub struct PlumeRegion {
    pub center: GeoPoint,
    pub radius_m: u32,
    pub concentration_mg_l: u32,
    pub age_hours: u32,
}

/// Current plume overlays.
pub static PLUMES: [PlumeRegion; 2] = [
    PlumeRegion {
        center: GeoPoint {
            lat: 9.5,
            lon: -142.3,
        },
        radius_m: 500,
        concentration_mg_l: 45,
        age_hours: 2,
    },
    PlumeRegion {
        center: GeoPoint {
            lat: 10.2,
            lon: -138.7,
        },
        radius_m: 300,
        concentration_mg_l: 28,
        age_hours: 1,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_within_zone_bounds() {
        for auv in &FLEET {
            assert!(
                CCZ_BOUNDS.contains(auv.position),
                "{} outside the CCZ",
                auv.id
            );
        }
        assert!(CCZ_BOUNDS.contains(CCZ_CENTER));
    }

    #[test]
    fn plumes_track_active_units() {
        for plume in &PLUMES {
            assert!(
                FLEET.iter().any(|a| a.position == plume.center),
                "plume not anchored to a unit"
            );
        }
    }

    #[test]
    fn maintenance_unit_is_surfaced() {
        let gamma = FLEET.iter().find(|a| a.id == "auv-003").unwrap();
        assert_eq!(gamma.status, AuvStatus::Maintenance);
        assert_eq!(gamma.depth_m, 0);
    }

    #[test]
    fn telemetry_rows_per_unit() {
        for auv in &FLEET {
            assert_eq!(auv.telemetry().len(), 3);
        }
    }
}
