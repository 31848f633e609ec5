//! Booking Service - quoting and requesting rentals
//!
//! A request goes through the same checks as a quote:
//! 1. Contact details present
//! 2. Vehicle exists and is available
//! 3. End strictly after start, start not before today
//! 4. Cost computed from the listing's daily price
//! 5. Booking stored as pending

use rental_domain::clock::{Clock, SharedClock};
use rental_domain::model::{
    Booking, BookingCost, BookingQuery, BookingRange, BookingStatus, CustomerContact, NewBooking,
};
use rental_domain::repository::{BookingRepository, ListingRepository};
use rental_domain::service::compute_cost;
use rental_types::{Error, Result, VehicleListing};

/// Price for a rental period, not yet stored
#[derive(Debug, Clone, PartialEq)]
pub struct BookingQuote {
    pub vehicle: VehicleListing,
    pub range: BookingRange,
    pub cost: BookingCost,
}

/// Customer-submitted booking form
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    pub vehicle_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub range: Option<BookingRange>,
    pub notes: Option<String>,
}

pub struct BookingService<L, B> {
    listings: L,
    bookings: B,
    clock: SharedClock,
}

impl<L: ListingRepository, B: BookingRepository> BookingService<L, B> {
    pub fn new(listings: L, bookings: B, clock: SharedClock) -> Self {
        Self {
            listings,
            bookings,
            clock,
        }
    }

    pub fn quote(&self, vehicle_id: &str, range: BookingRange) -> Result<BookingQuote> {
        let vehicle = self
            .listings
            .find_by_id(vehicle_id)?
            .ok_or_else(|| Error::NotFound(format!("Vehicle {}", vehicle_id)))?;

        range.validate()?;
        let today = self.clock.today();
        if range.start_date() < today {
            return Err(Error::StartInPast(range.start_date()));
        }
        if !vehicle.is_available() {
            return Err(Error::VehicleUnavailable(vehicle.name));
        }

        let cost = compute_cost(&range, vehicle.price);
        Ok(BookingQuote {
            vehicle,
            range,
            cost,
        })
    }

    /// Validate the form, price it and store a pending booking
    pub fn request(&mut self, request: BookingRequest) -> Result<Booking> {
        let customer = CustomerContact::new(&request.full_name, &request.email, &request.phone)?;
        let range = request.range.ok_or(Error::MissingField("Rental period"))?;
        let quote = self.quote(&request.vehicle_id, range)?;

        let notes = request
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let booking = self.bookings.create(NewBooking {
            vehicle_id: quote.vehicle.id,
            vehicle_name: quote.vehicle.name,
            customer,
            range: quote.range,
            cost: quote.cost,
            notes,
        })?;
        tracing::info!(
            booking_id = booking.id,
            vehicle_id = %booking.vehicle_id,
            total = booking.total,
            "booking requested"
        );
        Ok(booking)
    }

    /// Bookings newest first, narrowed by vehicle and/or customer email
    pub fn bookings(&self, query: &BookingQuery) -> Result<Vec<Booking>> {
        let mut bookings = match (query.customer_email.as_deref(), query.vehicle_id.as_deref()) {
            (Some(email), _) => self.bookings.find_by_customer(email)?,
            (None, Some(id)) => self.bookings.find_by_vehicle(id)?,
            (None, None) => self.bookings.find_all()?,
        };
        bookings.retain(|b| query.matches(b));
        Ok(bookings)
    }

    pub fn set_status(&mut self, id: u64, status: BookingStatus) -> Result<Booking> {
        let booking = self
            .bookings
            .set_status(id, status)?
            .ok_or_else(|| Error::NotFound(format!("Booking {}", id)))?;
        tracing::info!(booking_id = id, status = %status, "booking status changed");
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;
    use rental_domain::clock::FixedClock;
    use rental_store::{MemoryBookingRepository, MemoryListingRepository};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service() -> BookingService<MemoryListingRepository, MemoryBookingRepository> {
        let clock: SharedClock = Arc::new(FixedClock::at_date(date(2024, 1, 1)));
        BookingService::new(
            MemoryListingRepository::seeded(),
            MemoryBookingRepository::new(clock.clone()),
            clock,
        )
    }

    fn request(vehicle_id: &str, range: BookingRange) -> BookingRequest {
        BookingRequest {
            vehicle_id: vehicle_id.to_string(),
            full_name: "Ann Lee".to_string(),
            email: "ann@example.com".to_string(),
            phone: "555-0100".to_string(),
            range: Some(range),
            notes: None,
        }
    }

    fn for_vehicle(id: &str) -> BookingQuery {
        BookingQuery {
            vehicle_id: Some(id.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_quote_three_days() {
        let service = service();
        let range = BookingRange::from_dates(date(2024, 1, 1), date(2024, 1, 4));
        let quote = service.quote("1", range).unwrap();
        assert_eq!(quote.cost, BookingCost { days: 3, total: 165 });
        assert_eq!(quote.vehicle.name, "Toyota Camry");
    }

    #[test]
    fn test_quote_rejects_same_day() {
        let service = service();
        let range = BookingRange::from_dates(date(2024, 1, 2), date(2024, 1, 2));
        assert!(matches!(service.quote("1", range), Err(Error::InvalidDateRange)));
    }

    #[test]
    fn test_quote_rejects_past_start() {
        let service = service();
        let range = BookingRange::from_dates(date(2023, 12, 30), date(2024, 1, 2));
        assert!(matches!(service.quote("1", range), Err(Error::StartInPast(d)) if d == date(2023, 12, 30)));
    }

    #[test]
    fn test_quote_rejects_booked_vehicle() {
        let service = service();
        let range = BookingRange::from_dates(date(2024, 1, 2), date(2024, 1, 3));
        assert!(matches!(service.quote("3", range), Err(Error::VehicleUnavailable(ref n)) if n == "Ford Transit"));
    }

    #[test]
    fn test_quote_unknown_vehicle() {
        let service = service();
        let range = BookingRange::from_dates(date(2024, 1, 2), date(2024, 1, 3));
        assert!(matches!(service.quote("99", range), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_request_stores_pending_booking() {
        let mut service = service();
        let range = BookingRange::from_dates(date(2024, 3, 1), date(2024, 3, 2));
        let booking = service.request(request("4", range)).unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.total, 15);
        assert_eq!(
            booking.confirmation_message(),
            "Your booking request for Mountain Bike has been submitted. Total cost: $15 for 1 day(s)."
        );
        assert_eq!(service.bookings(&for_vehicle("4")).unwrap().len(), 1);
        assert!(service.bookings(&for_vehicle("1")).unwrap().is_empty());
    }

    #[test]
    fn test_request_requires_contact_details() {
        let mut service = service();
        let range = BookingRange::from_dates(date(2024, 3, 1), date(2024, 3, 2));
        let mut req = request("4", range);
        req.phone = "  ".to_string();
        assert!(matches!(service.request(req), Err(Error::MissingField("Phone number"))));

        let mut req = request("4", range);
        req.range = None;
        assert!(matches!(service.request(req), Err(Error::MissingField(_))));
        assert!(service.bookings(&BookingQuery::default()).unwrap().is_empty());
    }

    #[test]
    fn test_bookings_for_one_customer() {
        let mut service = service();
        let march = BookingRange::from_dates(date(2024, 3, 1), date(2024, 3, 2));
        let first = service.request(request("1", march)).unwrap();
        let mut other = request("4", march);
        other.email = "bo@example.com".to_string();
        service.request(other).unwrap();
        let second = service.request(request("4", march)).unwrap();

        let mine = BookingQuery {
            customer_email: Some(" Ann@Example.COM ".to_string()),
            ..Default::default()
        };
        let ids: Vec<u64> = service.bookings(&mine).unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);

        let mine_on_bike = BookingQuery {
            vehicle_id: Some("4".to_string()),
            ..mine
        };
        let ids: Vec<u64> = service.bookings(&mine_on_bike).unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![second.id]);
    }

    #[test]
    fn test_status_lifecycle() {
        let mut service = service();
        let range = BookingRange::from_dates(date(2024, 3, 1), date(2024, 3, 2));
        let booking = service.request(request("1", range)).unwrap();

        let confirmed = service.set_status(booking.id, BookingStatus::Confirmed).unwrap();
        assert_eq!(confirmed.status, BookingStatus::Confirmed);
        assert!(matches!(
            service.set_status(booking.id, BookingStatus::Pending),
            Err(Error::InvalidTransition { .. })
        ));
        assert!(matches!(
            service.set_status(42, BookingStatus::Cancelled),
            Err(Error::NotFound(_))
        ));
    }
}
