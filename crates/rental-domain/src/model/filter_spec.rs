//! Search constraints chosen on the search form

use std::cmp::Ordering;
use std::str::FromStr;

use rental_types::{Error, VehicleCategory, VehicleListing};

/// Category constraint; "all" passes everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(VehicleCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: VehicleCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Fixed price intervals. A boundary price belongs to exactly one band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PriceBand {
    #[default]
    Any,
    /// price <= 50
    UpTo50,
    /// 50 < price <= 100
    From50To100,
    /// 100 < price <= 200
    From100To200,
    /// price > 200
    Over200,
}

impl PriceBand {
    pub const BANDS: [PriceBand; 4] = [
        PriceBand::UpTo50,
        PriceBand::From50To100,
        PriceBand::From100To200,
        PriceBand::Over200,
    ];

    pub fn contains(&self, price: u32) -> bool {
        match self {
            PriceBand::Any => true,
            PriceBand::UpTo50 => price <= 50,
            PriceBand::From50To100 => price > 50 && price <= 100,
            PriceBand::From100To200 => price > 100 && price <= 200,
            PriceBand::Over200 => price > 200,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBand::Any => "any",
            PriceBand::UpTo50 => "0-50",
            PriceBand::From50To100 => "50-100",
            PriceBand::From100To200 => "100-200",
            PriceBand::Over200 => "200+",
        }
    }
}

impl FromStr for PriceBand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_ascii_lowercase()
            .replace(['\u{2013}', '\u{2014}'], "-");
        match normalized.as_str() {
            "" | "any" => Ok(PriceBand::Any),
            "0-50" => Ok(PriceBand::UpTo50),
            "50-100" => Ok(PriceBand::From50To100),
            "100-200" => Ok(PriceBand::From100To200),
            "200+" => Ok(PriceBand::Over200),
            _ => Err(Error::InvalidPriceBand(s.to_string())),
        }
    }
}

impl std::fmt::Display for PriceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    PriceAscending,
    PriceDescending,
    RatingDescending,
    LocationAlphabetical,
}

impl SortKey {
    /// Parse a form value; anything unrecognized means "keep input order"
    pub fn parse_lenient(s: &str) -> Option<SortKey> {
        s.parse().ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAscending => "price-low",
            SortKey::PriceDescending => "price-high",
            SortKey::RatingDescending => "rating",
            SortKey::LocationAlphabetical => "distance",
        }
    }

    pub fn compare(&self, a: &VehicleListing, b: &VehicleListing) -> Ordering {
        match self {
            SortKey::PriceAscending => a.price.cmp(&b.price),
            SortKey::PriceDescending => b.price.cmp(&a.price),
            SortKey::RatingDescending => b.rating.total_cmp(&a.rating),
            SortKey::LocationAlphabetical => a.location.cmp(&b.location),
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price-low" | "price-asc" | "price-ascending" => Ok(SortKey::PriceAscending),
            "price-high" | "price-desc" | "price-descending" => Ok(SortKey::PriceDescending),
            "rating" | "rating-descending" => Ok(SortKey::RatingDescending),
            "distance" | "location" | "location-alphabetical" => Ok(SortKey::LocationAlphabetical),
            _ => Err(Error::InvalidSortKey(s.to_string())),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter and sort constraints for a listing search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Substring matched against location or name
    pub location: Option<String>,
    pub category: CategoryFilter,
    pub price_band: PriceBand,
    pub sort: Option<SortKey>,
}

impl FilterSpec {
    /// Build from raw search form values, where empty strings mean "not set"
    pub fn from_form(location: &str, category: &str, price_range: &str, sort_by: &str) -> Result<Self, Error> {
        Ok(Self {
            location: if location.is_empty() {
                None
            } else {
                Some(location.to_string())
            },
            category: category.parse()?,
            price_band: price_range.parse()?,
            sort: SortKey::parse_lenient(sort_by),
        })
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_category(mut self, category: VehicleCategory) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    pub fn with_price_band(mut self, band: PriceBand) -> Self {
        self.price_band = band;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    /// True when the spec neither filters nor reorders
    pub fn is_empty(&self) -> bool {
        self.location.as_deref().map_or(true, str::is_empty)
            && self.category == CategoryFilter::All
            && self.price_band == PriceBand::Any
            && self.sort.is_none()
    }

    /// Lowercased location needle, `None` when the filter is absent or empty
    pub fn location_needle(&self) -> Option<String> {
        self.location
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}
