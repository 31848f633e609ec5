//! Rental periods, cost, and booking records

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use rental_types::Error;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Customer-chosen rental period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BookingRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Calendar dates anchored at midnight
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.and_time(NaiveTime::MIN),
            end: end.and_time(NaiveTime::MIN),
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Whole days, rounding any partial day up
    pub fn duration_days(&self) -> i64 {
        let secs = (self.end - self.start).num_seconds();
        let days = secs.div_euclid(SECONDS_PER_DAY);
        if secs.rem_euclid(SECONDS_PER_DAY) > 0 {
            days + 1
        } else {
            days
        }
    }

    /// End must be strictly after start
    pub fn validate(&self) -> Result<(), Error> {
        if self.end <= self.start {
            return Err(Error::InvalidDateRange);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCost {
    pub days: i64,
    pub total: i64,
}

/// Booking lifecycle: Pending -> Confirmed -> Completed, with Cancelled
/// reachable from Pending or Confirmed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Confirmed, BookingStatus::Completed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }

    pub fn transition_to(&self, next: BookingStatus) -> Result<BookingStatus, Error> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(Error::InvalidTransition {
                from: self.as_str().to_string(),
                to: next.as_str().to_string(),
            })
        }
    }
}

impl FromStr for BookingStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" | "canceled" => Ok(BookingStatus::Cancelled),
            _ => Err(Error::UnknownStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerContact {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl CustomerContact {
    /// Trimmed contact details; every field is required
    pub fn new(full_name: &str, email: &str, phone: &str) -> Result<Self, Error> {
        let full_name = required(full_name, "Full name")?;
        let email = required(email, "Email")?;
        let phone = required(phone, "Phone number")?;
        Ok(Self {
            full_name,
            email,
            phone,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, Error> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::MissingField(field));
    }
    Ok(value.to_string())
}

/// Booking data before the repository assigns an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub vehicle_id: String,
    pub vehicle_name: String,
    pub customer: CustomerContact,
    pub range: BookingRange,
    pub cost: BookingCost,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: u64,
    pub vehicle_id: String,
    pub vehicle_name: String,
    pub customer: CustomerContact,
    pub range: BookingRange,
    pub days: i64,
    pub total: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_new(id: u64, new: NewBooking, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            vehicle_id: new.vehicle_id,
            vehicle_name: new.vehicle_name,
            customer: new.customer,
            range: new.range,
            days: new.cost.days,
            total: new.cost.total,
            notes: new.notes,
            status: BookingStatus::Pending,
            created_at,
        }
    }

    /// Message shown to the customer after submitting
    pub fn confirmation_message(&self) -> String {
        format!(
            "Your booking request for {} has been submitted. Total cost: ${} for {} day(s).",
            self.vehicle_name, self.total, self.days
        )
    }
}

/// List filter for bookings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingQuery {
    pub vehicle_id: Option<String>,
    /// Contact email, compared ignoring case
    pub customer_email: Option<String>,
}

impl BookingQuery {
    pub fn matches(&self, booking: &Booking) -> bool {
        let vehicle_ok = self
            .vehicle_id
            .as_deref()
            .map_or(true, |id| booking.vehicle_id == id);
        let customer_ok = self
            .customer_email
            .as_deref()
            .map_or(true, |email| booking.customer.email.eq_ignore_ascii_case(email.trim()));
        vehicle_ok && customer_ok
    }
}
