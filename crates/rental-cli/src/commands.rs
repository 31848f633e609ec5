//! Command handlers

use std::path::PathBuf;

use rental_app::app::{BookingRequest, BookingService, ListingService, SearchService, TodoService, UserService};
use rental_app::config::Config;
use rental_app::export::export_to_csv;
use rental_app::repository::{open_booking_repo, open_listing_repo, open_todo_repo, open_user_repo};
use rental_domain::clock::{system_clock, SharedClock};
use rental_domain::model::{
    BookingQuery, BookingRange, BookingStatus, FilterSpec, NewListing, SortKey, TodoPatch,
    TodoQuery, UserPatch,
};
use rental_infra::persistence::{FileBookingRepository, FileListingRepository};
use rental_types::{OutputFormat, Result, VehicleStatus};

use crate::cli::{BookingAction, Cli, Commands, ListingAction, TodoAction, UserAction};
use crate::output::{
    output_booking, output_bookings, output_import, output_listings, output_quote, output_todo,
    output_todos, output_user, output_users,
};

pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);
    let clock = system_clock();

    match cli.command {
        Commands::Search {
            location,
            category,
            price,
            sort,
            export,
        } => cmd_search(&config, output_format, location, category, price, sort, export),

        Commands::Quote {
            vehicle_id,
            start,
            end,
        } => {
            let service = booking_service(&config, clock)?;
            let quote = service.quote(&vehicle_id, BookingRange::from_dates(start, end))?;
            output_quote(output_format, &quote)
        }

        Commands::Book {
            vehicle_id,
            start,
            end,
            name,
            email,
            phone,
            notes,
        } => {
            let mut service = booking_service(&config, clock)?;
            let booking = service.request(BookingRequest {
                vehicle_id,
                full_name: name,
                email,
                phone,
                range: Some(BookingRange::from_dates(start, end)),
                notes,
            })?;
            if output_format == OutputFormat::Table {
                println!("{}", booking.confirmation_message());
                println!();
            }
            output_booking(output_format, &booking)
        }

        Commands::Bookings {
            action,
            vehicle,
            customer,
        } => {
            let mut service = booking_service(&config, clock)?;
            match action {
                Some(BookingAction::Status { id, status }) => {
                    let status: BookingStatus = status.parse()?;
                    let booking = service.set_status(id, status)?;
                    output_booking(output_format, &booking)
                }
                None => {
                    let query = BookingQuery {
                        vehicle_id: vehicle,
                        customer_email: customer,
                    };
                    output_bookings(output_format, &service.bookings(&query)?)
                }
            }
        }

        Commands::Listings { action } => cmd_listings(&config, output_format, action),

        Commands::Todos { action } => cmd_todos(&config, clock, output_format, action),

        Commands::Users { action } => cmd_users(&config, clock, output_format, action),

        Commands::Config {
            show,
            set_output,
            set_data_dir,
            set_sort,
            set_seed,
            reset,
        } => cmd_config(show, set_output, set_data_dir, set_sort, set_seed, reset),
    }
}

fn booking_service(
    config: &Config,
    clock: SharedClock,
) -> Result<BookingService<FileListingRepository, FileBookingRepository>> {
    Ok(BookingService::new(
        open_listing_repo(config)?,
        open_booking_repo(config, clock.clone())?,
        clock,
    ))
}

fn cmd_search(
    config: &Config,
    output_format: OutputFormat,
    location: Option<String>,
    category: Option<String>,
    price: Option<String>,
    sort: Option<String>,
    export: Option<PathBuf>,
) -> Result<()> {
    // Fall back to the configured sort when none is given
    let sort = sort.or_else(|| config.default_sort.clone());
    let spec = FilterSpec::from_form(
        location.as_deref().unwrap_or(""),
        category.as_deref().unwrap_or(""),
        price.as_deref().unwrap_or(""),
        sort.as_deref().unwrap_or(""),
    )?;

    let service = SearchService::new(open_listing_repo(config)?);
    let listings = service.search(&spec)?;

    if let Some(path) = export {
        let rows = export_to_csv(&listings, &path)?;
        eprintln!("Exported {} row(s) to {}", rows, path.display());
    }

    output_listings(output_format, &listings)
}

fn cmd_listings(config: &Config, output_format: OutputFormat, action: ListingAction) -> Result<()> {
    let mut service = ListingService::new(open_listing_repo(config)?);

    match action {
        ListingAction::List => output_listings(output_format, &service.list()?),

        ListingAction::Add {
            name,
            category,
            location,
            price,
            rating,
            description,
        } => {
            let new = NewListing {
                rating,
                description,
                ..NewListing::new(&name, &category, &location, &price)
            };
            let listing = service.add(new)?;
            if output_format == OutputFormat::Table {
                println!("Vehicle added successfully!");
            }
            output_listings(output_format, std::slice::from_ref(&listing))
        }

        ListingAction::Remove { id } => {
            service.remove(&id)?;
            println!("Removed vehicle {}", id);
            Ok(())
        }

        ListingAction::Import { file } => {
            let summary = service.import(&file)?;
            output_import(output_format, &summary)
        }

        ListingAction::Status { id, status } => {
            let status: VehicleStatus = status.parse()?;
            let listing = service.set_status(&id, status)?;
            output_listings(output_format, std::slice::from_ref(&listing))
        }
    }
}

fn cmd_todos(config: &Config, clock: SharedClock, output_format: OutputFormat, action: TodoAction) -> Result<()> {
    let mut service = TodoService::new(open_todo_repo(config, clock)?);

    match action {
        TodoAction::List { completed, search } => {
            let list = service.list(&TodoQuery { completed, search })?;
            output_todos(output_format, &list)
        }
        TodoAction::Add { title, description } => {
            let todo = service.create(&title, description.as_deref())?;
            output_todo(output_format, &todo)
        }
        TodoAction::Update {
            id,
            title,
            description,
            completed,
        } => {
            let todo = service.update(
                id,
                TodoPatch {
                    title,
                    description,
                    completed,
                },
            )?;
            output_todo(output_format, &todo)
        }
        TodoAction::Toggle { id } => {
            let todo = service.toggle(id)?;
            output_todo(output_format, &todo)
        }
        TodoAction::Delete { id } => {
            let todo = service.delete(id)?;
            if output_format == OutputFormat::Table {
                println!("Todo deleted successfully");
            }
            output_todo(output_format, &todo)
        }
    }
}

fn cmd_users(config: &Config, clock: SharedClock, output_format: OutputFormat, action: UserAction) -> Result<()> {
    let mut service = UserService::new(open_user_repo(config, clock)?);

    match action {
        UserAction::List => output_users(output_format, &service.list()?),
        UserAction::Add { name, email } => {
            let user = service.create(&name, &email)?;
            output_user(output_format, &user)
        }
        UserAction::Update { id, name, email } => {
            let user = service.update(id, UserPatch { name, email })?;
            output_user(output_format, &user)
        }
        UserAction::Delete { id } => {
            let user = service.delete(id)?;
            if output_format == OutputFormat::Table {
                println!("User deleted successfully");
            }
            output_user(output_format, &user)
        }
    }
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_data_dir: Option<PathBuf>,
    set_sort: Option<String>,
    set_seed: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(data_dir) = set_data_dir {
        config.data_dir = Some(data_dir);
        modified = true;
    }

    if let Some(sort) = set_sort {
        // Searches ignore unknown keys, so check once here
        sort.parse::<SortKey>()?;
        config.default_sort = Some(sort);
        modified = true;
    }

    if let Some(seed) = set_seed {
        config.seed_sample_data = seed;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
