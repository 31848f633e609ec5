//! End-to-end flows over the file-backed stores

use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::tempdir;

use rental_app::app::{BookingRequest, BookingService, ListingService, SearchService, TodoService};
use rental_app::config::Config;
use rental_app::export::export_to_csv;
use rental_app::repository::{open_booking_repo, open_listing_repo, open_todo_repo};
use rental_domain::clock::{FixedClock, SharedClock};
use rental_domain::model::{BookingQuery, BookingRange, BookingStatus, FilterSpec, TodoQuery};
use rental_types::{Error, VehicleStatus};

fn clock() -> SharedClock {
    Arc::new(FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
}

fn config_in(dir: &std::path::Path) -> Config {
    Config {
        data_dir: Some(dir.to_path_buf()),
        ..Config::default()
    }
}

fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> BookingRange {
    BookingRange::from_dates(
        NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
        NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
    )
}

#[test]
fn test_search_form_over_seeded_store() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let search = SearchService::new(open_listing_repo(&config).unwrap());
    let spec = FilterSpec::from_form("", "car", "50-100", "price-low").unwrap();
    let names: Vec<String> = search.search(&spec).unwrap().into_iter().map(|l| l.name).collect();
    assert_eq!(names, vec!["Toyota Camry", "Tesla Model 3"]);

    let export_path = dir.path().join("cars.csv");
    let rows = export_to_csv(&search.search(&spec).unwrap(), &export_path).unwrap();
    assert_eq!(rows, 2);
    assert!(std::fs::read_to_string(&export_path).unwrap().contains("Tesla Model 3"));
}

#[test]
fn test_booking_survives_reopen() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());

    let mut service = BookingService::new(
        open_listing_repo(&config).unwrap(),
        open_booking_repo(&config, clock()).unwrap(),
        clock(),
    );
    let booking = service
        .request(BookingRequest {
            vehicle_id: "5".to_string(),
            full_name: "Ann Lee".to_string(),
            email: "ann@example.com".to_string(),
            phone: "555-0100".to_string(),
            range: Some(range((2024, 2, 1), (2024, 2, 3))),
            notes: Some("  child seat ".to_string()),
        })
        .unwrap();
    assert_eq!(booking.total, 170);
    assert_eq!(booking.notes.as_deref(), Some("child seat"));

    let mut service = BookingService::new(
        open_listing_repo(&config).unwrap(),
        open_booking_repo(&config, clock()).unwrap(),
        clock(),
    );
    let stored = service.bookings(&BookingQuery::default()).unwrap();
    assert_eq!(stored.len(), 1);
    service.set_status(booking.id, BookingStatus::Cancelled).unwrap();
    assert!(matches!(
        service.set_status(booking.id, BookingStatus::Confirmed),
        Err(Error::InvalidTransition { .. })
    ));
}

#[test]
fn test_booked_listing_cannot_be_quoted_until_released() {
    let dir = tempdir().unwrap();
    let config = config_in(dir.path());
    let period = range((2024, 1, 10), (2024, 1, 11));

    let service = BookingService::new(
        open_listing_repo(&config).unwrap(),
        open_booking_repo(&config, clock()).unwrap(),
        clock(),
    );
    assert!(matches!(service.quote("3", period), Err(Error::VehicleUnavailable(_))));

    let mut listings = ListingService::new(open_listing_repo(&config).unwrap());
    listings.set_status("3", VehicleStatus::Available).unwrap();

    let service = BookingService::new(
        open_listing_repo(&config).unwrap(),
        open_booking_repo(&config, clock()).unwrap(),
        clock(),
    );
    assert_eq!(service.quote("3", period).unwrap().cost.total, 120);
}

#[test]
fn test_unseeded_stores_start_empty() {
    let dir = tempdir().unwrap();
    let config = Config {
        seed_sample_data: false,
        ..config_in(dir.path())
    };

    let search = SearchService::new(open_listing_repo(&config).unwrap());
    assert!(search.search(&FilterSpec::default()).unwrap().is_empty());

    let todos = TodoService::new(open_todo_repo(&config, clock()).unwrap());
    let list = todos.list(&TodoQuery::default()).unwrap();
    assert_eq!(list.total, 0);
}
