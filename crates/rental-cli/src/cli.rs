//! CLI definition using clap

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rental_types::OutputFormat;

#[derive(Parser)]
#[command(name = "rental-checker")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Search, price and book rental vehicles")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Directory holding the data files. Uses config value if not specified.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search vehicle listings
    Search {
        /// Substring of the location or vehicle name
        #[arg(long, short = 'l')]
        location: Option<String>,

        /// Vehicle type (car, bus, cycle, motorcycle, bike, scooter, truck) or "all"
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Price band per day (0-50, 50-100, 100-200, 200+)
        #[arg(long, short = 'p')]
        price: Option<String>,

        /// Sort order (price-low, price-high, rating, distance)
        #[arg(long, short = 's')]
        sort: Option<String>,

        /// Also write the results to a CSV file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Price a rental without booking it
    Quote {
        /// Vehicle id
        vehicle_id: String,

        /// First day of the rental (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Return day (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
    },

    /// Request a booking
    Book {
        /// Vehicle id
        vehicle_id: String,

        /// First day of the rental (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Return day (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,

        /// Full name
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        /// Special requests
        #[arg(long)]
        notes: Option<String>,
    },

    /// List booking requests
    Bookings {
        #[command(subcommand)]
        action: Option<BookingAction>,

        /// Only bookings for this vehicle
        #[arg(long)]
        vehicle: Option<String>,

        /// Only bookings made with this email
        #[arg(long)]
        customer: Option<String>,
    },

    /// Manage vehicle listings
    Listings {
        #[command(subcommand)]
        action: ListingAction,
    },

    /// Manage todos
    Todos {
        #[command(subcommand)]
        action: TodoAction,
    },

    /// Manage users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set default search sort (price-low, price-high, rating, distance)
        #[arg(long)]
        set_sort: Option<String>,

        /// Seed empty stores with sample data
        #[arg(long)]
        set_seed: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum BookingAction {
    /// Move a booking to a new status
    Status {
        id: u64,

        /// pending, confirmed, completed, cancelled
        status: String,
    },
}

#[derive(Subcommand)]
pub enum ListingAction {
    /// List all vehicles
    List,

    /// Add a vehicle
    Add {
        #[arg(long)]
        name: String,

        /// Vehicle type
        #[arg(long, short = 'c')]
        category: String,

        #[arg(long)]
        location: String,

        /// Price per day
        #[arg(long)]
        price: String,

        #[arg(long)]
        rating: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Remove a vehicle
    Remove { id: String },

    /// Import vehicles from a JSON or CSV file
    Import { file: PathBuf },

    /// Mark a vehicle available or booked
    Status {
        id: String,

        /// available or booked
        status: String,
    },
}

#[derive(Subcommand)]
pub enum TodoAction {
    /// List todos
    List {
        /// Only completed (true) or open (false) todos
        #[arg(long)]
        completed: Option<bool>,

        /// Search title and description
        #[arg(long)]
        search: Option<String>,
    },

    /// Add a todo
    Add {
        title: String,

        #[arg(long, short = 'd')]
        description: Option<String>,
    },

    /// Update a todo
    Update {
        id: u64,

        #[arg(long)]
        title: Option<String>,

        /// Empty string clears the description
        #[arg(long, short = 'd')]
        description: Option<String>,

        #[arg(long)]
        completed: Option<bool>,
    },

    /// Flip the completed flag
    Toggle { id: u64 },

    /// Delete a todo
    Delete { id: u64 },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// List users
    List,

    /// Add a user
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,
    },

    /// Update a user
    Update {
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a user
    Delete { id: u64 },
}
