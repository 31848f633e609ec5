//! Sample data used to seed fresh stores

use rental_domain::model::{NewTodo, NewUser};
use rental_types::{VehicleCategory, VehicleListing, VehicleStatus};

/// The six demo listings shown on the landing page
pub fn sample_listings() -> Vec<VehicleListing> {
    vec![
        VehicleListing::new("1", "Toyota Camry", VehicleCategory::Car, "Airport", 55).with_rating(4.7),
        VehicleListing::new("2", "Honda Civic", VehicleCategory::Car, "Downtown", 45).with_rating(4.5),
        VehicleListing::new("3", "Ford Transit", VehicleCategory::Bus, "Central Station", 120)
            .with_rating(4.8)
            .with_status(VehicleStatus::Booked),
        VehicleListing::new("4", "Mountain Bike", VehicleCategory::Cycle, "Park Entrance", 15).with_rating(4.6),
        VehicleListing::new("5", "Tesla Model 3", VehicleCategory::Car, "City Center", 85).with_rating(4.9),
        VehicleListing::new("6", "Volkswagen Bus", VehicleCategory::Bus, "Beach Area", 95).with_rating(4.4),
    ]
}

pub fn sample_users() -> Vec<NewUser> {
    vec![
        NewUser {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        },
        NewUser {
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
        },
    ]
}

/// Todos paired with their initial completed flag
pub fn sample_todos() -> Vec<(NewTodo, bool)> {
    vec![
        (
            NewTodo {
                title: "Setup backend server".to_string(),
                description: Some("Create server with typed routes".to_string()),
            },
            true,
        ),
        (
            NewTodo {
                title: "Create API endpoints".to_string(),
                description: Some("Build REST API for frontend communication".to_string()),
            },
            false,
        ),
    ]
}
