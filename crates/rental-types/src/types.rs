//! Vehicle listing types

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Kind of rentable vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum VehicleCategory {
    Car,
    Bus,
    Cycle,
    Motorcycle,
    Bike,
    Scooter,
    Truck,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 7] = [
        VehicleCategory::Car,
        VehicleCategory::Bus,
        VehicleCategory::Cycle,
        VehicleCategory::Motorcycle,
        VehicleCategory::Bike,
        VehicleCategory::Scooter,
        VehicleCategory::Truck,
    ];

    /// Display label (e.g. "Car")
    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "Car",
            VehicleCategory::Bus => "Bus",
            VehicleCategory::Cycle => "Cycle",
            VehicleCategory::Motorcycle => "Motorcycle",
            VehicleCategory::Bike => "Bike",
            VehicleCategory::Scooter => "Scooter",
            VehicleCategory::Truck => "Truck",
        }
    }

    /// Wire form, lowercase
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "car",
            VehicleCategory::Bus => "bus",
            VehicleCategory::Cycle => "cycle",
            VehicleCategory::Motorcycle => "motorcycle",
            VehicleCategory::Bike => "bike",
            VehicleCategory::Scooter => "scooter",
            VehicleCategory::Truck => "truck",
        }
    }
}

impl FromStr for VehicleCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        VehicleCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

impl TryFrom<String> for VehicleCategory {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VehicleCategory> for &'static str {
    fn from(category: VehicleCategory) -> Self {
        category.as_str()
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Availability of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum VehicleStatus {
    #[default]
    Available,
    Booked,
}

impl VehicleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::Booked => "Booked",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Booked => "booked",
        }
    }
}

impl FromStr for VehicleStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(VehicleStatus::Available),
            "booked" => Ok(VehicleStatus::Booked),
            _ => Err(Error::UnknownStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for VehicleStatus {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VehicleStatus> for &'static str {
    fn from(status: VehicleStatus) -> Self {
        status.as_str()
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A rentable vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleListing {
    /// Opaque identifier
    pub id: String,
    /// Vehicle name (e.g., "Toyota Camry")
    pub name: String,
    #[serde(alias = "type")]
    pub category: VehicleCategory,
    /// Pickup location, free text
    pub location: String,
    /// Price per day, whole currency units
    pub price: u32,
    /// Average rating, 0.0 - 5.0
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub status: VehicleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image reference, never dereferenced here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl VehicleListing {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: VehicleCategory,
        location: impl Into<String>,
        price: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            location: location.into(),
            price,
            rating: 0.0,
            status: VehicleStatus::Available,
            description: None,
            image_url: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_status(mut self, status: VehicleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }

    /// Check the invariants serde cannot express
    pub fn validate(&self) -> Result<(), Error> {
        if self.id.trim().is_empty() {
            return Err(Error::MissingField("id"));
        }
        if self.name.trim().is_empty() {
            return Err(Error::MissingField("name"));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(Error::InvalidRating(self.rating.to_string()));
        }
        Ok(())
    }
}
