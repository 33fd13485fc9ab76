//! Operating picture sample data
//!
//! The dashboard map shows a fixed set of logistics sites. The data is a
//! plain value handed to whatever renders it; nothing here is global.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Kind of logistics site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum SiteKind {
    #[strum(serialize = "Supply Point")]
    #[serde(rename = "Supply Point")]
    SupplyPoint,
    #[strum(serialize = "Fuel Depot")]
    #[serde(rename = "Fuel Depot")]
    FuelDepot,
    #[strum(serialize = "Medical Facility")]
    #[serde(rename = "Medical Facility")]
    MedicalFacility,
    #[strum(serialize = "Motor Pool")]
    #[serde(rename = "Motor Pool")]
    MotorPool,
    #[strum(serialize = "Ammunition Supply Point")]
    #[serde(rename = "Ammunition Supply Point")]
    AmmunitionSupplyPoint,
}

/// Readiness of a site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum SiteStatus {
    Operational,
    Degraded,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMarker {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub kind: SiteKind,
    pub status: SiteStatus,
}

impl SiteMarker {
    fn new(name: &str, latitude: f64, longitude: f64, kind: SiteKind, status: SiteStatus) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
            kind,
            status,
        }
    }
}

/// Everything the map layer draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingPicture {
    pub sites: Vec<SiteMarker>,
}

impl OperatingPicture {
    /// Built-in five-site sample
    pub fn sample() -> Self {
        Self {
            sites: vec![
                SiteMarker::new(
                    "Logistics Hub Alpha",
                    35.1415,
                    -79.0060,
                    SiteKind::SupplyPoint,
                    SiteStatus::Operational,
                ),
                SiteMarker::new(
                    "Fuel Point Bravo",
                    35.1702,
                    -79.0233,
                    SiteKind::FuelDepot,
                    SiteStatus::Operational,
                ),
                SiteMarker::new(
                    "Aid Station Charlie",
                    35.1198,
                    -78.9701,
                    SiteKind::MedicalFacility,
                    SiteStatus::Degraded,
                ),
                SiteMarker::new(
                    "Motor Pool Delta",
                    35.1550,
                    -78.9884,
                    SiteKind::MotorPool,
                    SiteStatus::Operational,
                ),
                SiteMarker::new(
                    "ASP Echo",
                    35.1021,
                    -79.0412,
                    SiteKind::AmmunitionSupplyPoint,
                    SiteStatus::Offline,
                ),
            ],
        }
    }

    /// Number of sites per status, in status order
    pub fn counts_by_status(&self) -> Vec<(SiteStatus, usize)> {
        SiteStatus::iter()
            .map(|status| {
                let n = self.sites.iter().filter(|s| s.status == status).count();
                (status, n)
            })
            .collect()
    }

    /// Geographic center of all sites, for map framing
    pub fn center(&self) -> Option<(f64, f64)> {
        if self.sites.is_empty() {
            return None;
        }
        let n = self.sites.len() as f64;
        let lat = self.sites.iter().map(|s| s.latitude).sum::<f64>() / n;
        let lon = self.sites.iter().map(|s| s.longitude).sum::<f64>() / n;
        Some((lat, lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_five_sites() {
        let picture = OperatingPicture::sample();
        assert_eq!(picture.sites.len(), 5);
        assert!(picture.sites.iter().all(|s| {
            (-90.0..=90.0).contains(&s.latitude) && (-180.0..=180.0).contains(&s.longitude)
        }));
    }

    #[test]
    fn test_counts_by_status() {
        let counts = OperatingPicture::sample().counts_by_status();
        assert_eq!(
            counts,
            vec![
                (SiteStatus::Operational, 3),
                (SiteStatus::Degraded, 1),
                (SiteStatus::Offline, 1)
            ]
        );
    }

    #[test]
    fn test_center() {
        assert!(OperatingPicture { sites: Vec::new() }.center().is_none());
        let (lat, lon) = OperatingPicture::sample().center().unwrap();
        assert!((35.0..35.2).contains(&lat));
        assert!((-79.1..-78.9).contains(&lon));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(SiteKind::AmmunitionSupplyPoint.to_string(), "Ammunition Supply Point");
        assert_eq!("Fuel Depot".parse::<SiteKind>().unwrap(), SiteKind::FuelDepot);
    }
}
