//! Output formatting module

use serde::Serialize;
use serde_json::json;

use rental_app::app::{BookingQuote, ImportSummary, TodoList};
use rental_domain::model::Booking;
use rental_types::{OutputFormat, Result, Todo, User, VehicleListing};

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

pub fn output_listings(output_format: OutputFormat, listings: &[VehicleListing]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(listings);
    }

    if listings.is_empty() {
        println!("No vehicles found.");
        return Ok(());
    }

    println!(
        "{:<10} {:<22} {:<11} {:<20} {:>7} {:>6}  {}",
        "ID", "Name", "Type", "Location", "$/day", "Rating", "Status"
    );
    println!("{}", "-".repeat(90));
    for listing in listings {
        println!(
            "{:<10} {:<22} {:<11} {:<20} {:>7} {:>6.1}  {}",
            truncate(&listing.id, 10),
            truncate(&listing.name, 22),
            listing.category.label(),
            truncate(&listing.location, 20),
            listing.price,
            listing.rating,
            listing.status.label()
        );
    }
    println!();
    println!("{} vehicle(s)", listings.len());
    Ok(())
}

pub fn output_quote(output_format: OutputFormat, quote: &BookingQuote) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({
            "vehicle": quote.vehicle,
            "start": quote.range.start,
            "end": quote.range.end,
            "days": quote.cost.days,
            "total": quote.cost.total,
        }));
    }

    println!("\nQuote");
    println!("=====");
    println!("Vehicle:     {} ({})", quote.vehicle.name, quote.vehicle.id);
    println!("Location:    {}", quote.vehicle.location);
    println!("From:        {}", quote.range.start_date());
    println!("To:          {}", quote.range.end_date());
    println!("Daily price: ${}", quote.vehicle.price);
    println!("Days:        {}", quote.cost.days);
    println!("Total:       ${}", quote.cost.total);
    Ok(())
}

pub fn output_booking(output_format: OutputFormat, booking: &Booking) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(booking);
    }

    println!("Booking #{} ({})", booking.id, booking.status);
    println!("  Vehicle:  {} ({})", booking.vehicle_name, booking.vehicle_id);
    println!("  Customer: {} <{}> {}", booking.customer.full_name, booking.customer.email, booking.customer.phone);
    println!("  Period:   {} -> {}", booking.range.start_date(), booking.range.end_date());
    println!("  Total:    ${} for {} day(s)", booking.total, booking.days);
    if let Some(ref notes) = booking.notes {
        println!("  Notes:    {}", notes);
    }
    Ok(())
}

pub fn output_bookings(output_format: OutputFormat, bookings: &[Booking]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(bookings);
    }

    if bookings.is_empty() {
        println!("No bookings found.");
        return Ok(());
    }

    println!(
        "{:>5} {:<22} {:<20} {:<10} {:<10} {:>7}  {}",
        "ID", "Vehicle", "Customer", "From", "To", "Total", "Status"
    );
    println!("{}", "-".repeat(92));
    for booking in bookings {
        println!(
            "{:>5} {:<22} {:<20} {:<10} {:<10} {:>7}  {}",
            booking.id,
            truncate(&booking.vehicle_name, 22),
            truncate(&booking.customer.full_name, 20),
            booking.range.start_date().to_string(),
            booking.range.end_date().to_string(),
            format!("${}", booking.total),
            booking.status
        );
    }
    Ok(())
}

pub fn output_import(output_format: OutputFormat, summary: &ImportSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        let rejected: Vec<_> = summary
            .rejected
            .iter()
            .map(|r| json!({ "row": r.row, "reason": r.reason }))
            .collect();
        return print_json(&json!({
            "added": summary.added,
            "rejected": rejected,
        }));
    }

    println!("Imported: {}", summary.added.len());
    println!("Rejected: {}", summary.rejected.len());
    for row in &summary.rejected {
        println!("  row {}: {}", row.row, row.reason);
    }
    Ok(())
}

pub fn output_todo(output_format: OutputFormat, todo: &Todo) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(todo);
    }

    let mark = if todo.completed { "x" } else { " " };
    println!("[{}] #{} {}", mark, todo.id, todo.title);
    if let Some(ref description) = todo.description {
        println!("      {}", description);
    }
    Ok(())
}

pub fn output_todos(output_format: OutputFormat, list: &TodoList) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({
            "data": list.todos,
            "count": list.todos.len(),
            "total": list.total,
        }));
    }

    if list.todos.is_empty() {
        println!("No todos found.");
    }
    for todo in &list.todos {
        output_todo(output_format, todo)?;
    }
    println!();
    println!("Showing {} of {} todo(s)", list.todos.len(), list.total);
    Ok(())
}

pub fn output_user(output_format: OutputFormat, user: &User) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(user);
    }

    println!(
        "#{} {} <{}> (joined {})",
        user.id,
        user.name,
        user.email,
        user.created_at.format("%Y-%m-%d")
    );
    Ok(())
}

pub fn output_users(output_format: OutputFormat, users: &[User]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&json!({ "data": users, "count": users.len() }));
    }

    if users.is_empty() {
        println!("No users found.");
        return Ok(());
    }
    for user in users {
        output_user(output_format, user)?;
    }
    Ok(())
}
