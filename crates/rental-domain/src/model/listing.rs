use serde::Deserialize;

use rental_types::{Error, VehicleCategory, VehicleListing, VehicleStatus};

/// Listing as it arrives from a form or an import file, every field still text
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewListing {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "type")]
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

impl NewListing {
    pub fn new(name: &str, category: &str, location: &str, price: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            location: location.to_string(),
            price: price.to_string(),
            ..Self::default()
        }
    }

    pub fn with_rating(mut self, rating: &str) -> Self {
        self.rating = Some(rating.to_string());
        self
    }

    /// Parse every field into a typed listing. `generate_id` is only called
    /// when the input carries no id of its own.
    pub fn into_listing(self, generate_id: impl FnOnce() -> String) -> Result<VehicleListing, Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::MissingField("Vehicle name"));
        }
        let location = self.location.trim();
        if location.is_empty() {
            return Err(Error::MissingField("Location"));
        }
        if self.category.trim().is_empty() {
            return Err(Error::MissingField("Vehicle type"));
        }
        let category: VehicleCategory = self.category.parse()?;

        let price = self.price.trim();
        if price.is_empty() {
            return Err(Error::MissingField("Price"));
        }
        let price: u32 = price.parse().map_err(|_| Error::InvalidPrice(price.to_string()))?;

        let rating = match non_blank(self.rating.as_deref()) {
            Some(raw) => raw.parse::<f64>().map_err(|_| Error::InvalidRating(raw.to_string()))?,
            None => 0.0,
        };
        let status = match non_blank(self.status.as_deref()) {
            Some(raw) => raw.parse::<VehicleStatus>()?,
            None => VehicleStatus::Available,
        };
        let id = match non_blank(self.id.as_deref()) {
            Some(id) => id.to_string(),
            None => generate_id(),
        };

        let mut listing = VehicleListing::new(id, name, category, location, price)
            .with_rating(rating)
            .with_status(status);
        listing.description = non_blank(self.description.as_deref()).map(str::to_string);
        listing.validate()?;
        Ok(listing)
    }
}
