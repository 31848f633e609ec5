//! File-backed repositories survive a reopen

use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::tempdir;

use rental_domain::clock::{FixedClock, SharedClock};
use rental_domain::model::{
    BookingRange, BookingStatus, CustomerContact, NewBooking, NewTodo, NewUser, TodoQuery,
};
use rental_domain::repository::{BookingRepository, ListingRepository, TodoRepository, UserRepository};
use rental_domain::service::compute_cost;
use rental_infra::listing_import::import_listings;
use rental_infra::persistence::{
    FileBookingRepository, FileListingRepository, FileTodoRepository, FileUserRepository,
};
use rental_store::MemoryTodoRepository;
use rental_types::{Error, VehicleCategory, VehicleListing, VehicleStatus};

fn clock() -> SharedClock {
    Arc::new(FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
}

#[test]
fn test_listing_store_seeds_once() {
    let dir = tempdir().unwrap();

    let mut repo = FileListingRepository::open(dir.path(), true).unwrap();
    assert_eq!(repo.count(), 6);
    assert!(dir.path().join("listings.json").exists());
    assert!(repo.remove("1").unwrap());

    // A second open reads the file instead of seeding again
    let repo = FileListingRepository::open(dir.path(), true).unwrap();
    assert_eq!(repo.count(), 5);
    assert!(repo.find_by_id("1").unwrap().is_none());
}

#[test]
fn test_listing_store_without_seed() {
    let dir = tempdir().unwrap();
    let mut repo = FileListingRepository::open(dir.path(), false).unwrap();
    assert_eq!(repo.count(), 0);

    let listing = VehicleListing::new("x1", "Vespa", VehicleCategory::Scooter, "Beach", 25);
    repo.insert(listing).unwrap();
    repo.set_status("x1", VehicleStatus::Booked).unwrap();

    let repo = FileListingRepository::open(dir.path(), false).unwrap();
    let stored = repo.find_by_id("x1").unwrap().unwrap();
    assert_eq!(stored.status, VehicleStatus::Booked);
}

#[test]
fn test_corrupt_store_is_an_error() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("listings.json"), "{ not json").unwrap();
    assert!(matches!(
        FileListingRepository::open(dir.path(), true),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_stored_duplicate_listing_ids_are_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("listings.json");
    let a = VehicleListing::new("1", "Sedan A", VehicleCategory::Car, "Airport", 50);
    let b = VehicleListing::new("1", "Sedan B", VehicleCategory::Car, "Harbor", 60);
    std::fs::write(&path, serde_json::to_string(&vec![a, b]).unwrap()).unwrap();

    assert!(matches!(
        FileListingRepository::open(dir.path(), true),
        Err(Error::Conflict(_))
    ));
    // Nothing was rewritten
    assert!(std::fs::read_to_string(&path).unwrap().contains("Sedan B"));
}

#[test]
fn test_stored_listing_with_bad_rating_is_an_error() {
    let dir = tempdir().unwrap();
    let bad = VehicleListing::new("1", "Sedan", VehicleCategory::Car, "Airport", 50).with_rating(9.5);
    std::fs::write(
        dir.path().join("listings.json"),
        serde_json::to_string(&vec![bad]).unwrap(),
    )
    .unwrap();

    assert!(matches!(
        FileListingRepository::open(dir.path(), true),
        Err(Error::InvalidRating(_))
    ));
}

#[test]
fn test_stored_max_todo_id_is_an_error() {
    let dir = tempdir().unwrap();
    let mut memory = MemoryTodoRepository::new(clock());
    let mut todo = memory.create(NewTodo::new("Last", None).unwrap()).unwrap();
    todo.id = u64::MAX;

    let mut records = serde_json::Map::new();
    records.insert(u64::MAX.to_string(), serde_json::to_value(&todo).unwrap());
    let doc = serde_json::json!({ "next_id": 1, "records": records });
    std::fs::write(dir.path().join("todos.json"), doc.to_string()).unwrap();

    assert!(matches!(
        FileTodoRepository::open(dir.path(), clock(), true),
        Err(Error::MalformedRecord(_))
    ));
}

#[test]
fn test_failed_save_leaves_store_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("listings.json");
    let mut repo = FileListingRepository::open(dir.path(), false).unwrap();
    repo.insert(VehicleListing::new("x1", "Vespa", VehicleCategory::Scooter, "Beach", 25))
        .unwrap();

    // A non-empty directory where the file was makes the rename fail
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();
    std::fs::write(path.join("blocker"), "").unwrap();

    let result = repo.insert(VehicleListing::new("x2", "Honda", VehicleCategory::Motorcycle, "Pier", 40));
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(repo.find_by_id("x2").unwrap().is_none());
    assert_eq!(repo.count(), 1);
}

#[test]
fn test_todo_ids_survive_reopen() {
    let dir = tempdir().unwrap();

    let mut repo = FileTodoRepository::open(dir.path(), clock(), true).unwrap();
    assert_eq!(repo.count(), 2);
    let created = repo.create(NewTodo::new("Write docs", None).unwrap()).unwrap();
    assert_eq!(created.id, 3);
    repo.delete(created.id).unwrap();

    let mut repo = FileTodoRepository::open(dir.path(), clock(), true).unwrap();
    let next = repo.create(NewTodo::new("Ship it", None).unwrap()).unwrap();
    assert_eq!(next.id, 4, "deleted ids are never reused");

    let completed = repo
        .find_all(&TodoQuery {
            completed: Some(true),
            search: None,
        })
        .unwrap();
    assert_eq!(completed.len(), 1);
}

#[test]
fn test_user_email_conflict_after_reopen() {
    let dir = tempdir().unwrap();
    FileUserRepository::open(dir.path(), clock(), true).unwrap();

    let mut repo = FileUserRepository::open(dir.path(), clock(), true).unwrap();
    assert_eq!(repo.count(), 2);
    let err = repo
        .create(NewUser::new("Johnny", "JOHN@example.com").unwrap())
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));
}

#[test]
fn test_booking_status_persists() {
    let dir = tempdir().unwrap();
    let range = BookingRange::from_dates(
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
    );

    let mut repo = FileBookingRepository::open(dir.path(), clock()).unwrap();
    let booking = repo
        .create(NewBooking {
            vehicle_id: "1".to_string(),
            vehicle_name: "Toyota Camry".to_string(),
            customer: CustomerContact::new("Ann", "ann@example.com", "555-0100").unwrap(),
            range,
            cost: compute_cost(&range, 55),
            notes: None,
        })
        .unwrap();
    assert_eq!(booking.total, 165);
    repo.set_status(booking.id, BookingStatus::Confirmed).unwrap();

    let repo = FileBookingRepository::open(dir.path(), clock()).unwrap();
    let stored = repo.find_by_id(booking.id).unwrap().unwrap();
    assert_eq!(stored.status, BookingStatus::Confirmed);
    assert_eq!(repo.find_by_vehicle("1").unwrap().len(), 1);
    assert_eq!(repo.find_by_customer("ANN@example.com").unwrap().len(), 1);
}

#[test]
fn test_import_dispatches_on_extension() {
    let dir = tempdir().unwrap();

    let csv_path = dir.path().join("fleet.CSV");
    std::fs::write(
        &csv_path,
        "name,type,location,price\nIsuzu Elf,truck,Warehouse District,120\nHover,hovercraft,Lake,10\n",
    )
    .unwrap();
    let report = import_listings(&csv_path).unwrap();
    assert_eq!(report.listings.len(), 1);
    assert_eq!(report.listings[0].listing.category, VehicleCategory::Truck);
    assert_eq!(report.rejected.len(), 1);

    let txt_path = dir.path().join("fleet.txt");
    std::fs::write(&txt_path, "anything").unwrap();
    assert!(matches!(
        import_listings(&txt_path),
        Err(Error::UnsupportedFormat(_))
    ));
}
