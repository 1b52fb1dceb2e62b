//! Booking form checks performed before anything is dispatched.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::identity::SessionUser;

use super::model::{BookingRequest, EventType, Table, TableId};

/// Largest party accepted online by default.
pub const MAX_GUESTS: u32 = 20;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("phone regex is valid"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BookingField {
    Name,
    Phone,
    Email,
    Date,
    Time,
    Guests,
    Table,
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Date => "date",
            Self::Time => "time",
            Self::Guests => "guests",
            Self::Table => "table",
        };
        f.write_str(name)
    }
}

/// Field-level messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<BookingField, String>);

impl ValidationErrors {
    fn add(&mut self, field: BookingField, message: &str) {
        self.0.insert(field, message.to_string());
    }

    pub fn get(&self, field: BookingField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: BookingField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BookingField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Raw booking form input. Date is `YYYY-MM-DD`, time is `HH:MM`.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub table_id: Option<TableId>,
    pub date: String,
    pub time: String,
    pub guests: u32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub event_type: EventType,
    pub comment: String,
}

impl BookingForm {
    /// Check every field and build the request for the signed-in `user`.
    ///
    /// `tables` is the current floor plan; only tables that are available and
    /// seat the party can be chosen.
    pub fn validate(
        &self,
        user: &SessionUser,
        tables: &[Table],
        today: NaiveDate,
        max_guests: u32,
    ) -> Result<BookingRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add(BookingField::Name, "Name is required");
        } else if name.chars().count() < 2 {
            errors.add(BookingField::Name, "Name must be at least 2 characters");
        }

        if self.phone.trim().is_empty() {
            errors.add(BookingField::Phone, "Phone is required");
        } else if !PHONE_RE.is_match(&self.phone) {
            errors.add(BookingField::Phone, "Enter a valid phone number");
        }

        if self.email.trim().is_empty() {
            errors.add(BookingField::Email, "Email is required");
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.add(BookingField::Email, "Enter a valid email address");
        }

        let date = if self.date.trim().is_empty() {
            errors.add(BookingField::Date, "Choose a booking date");
            None
        } else {
            match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
                Ok(date) if date < today => {
                    errors.add(BookingField::Date, "Date cannot be in the past");
                    None
                }
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add(BookingField::Date, "Enter the date as YYYY-MM-DD");
                    None
                }
            }
        };

        let time = if self.time.trim().is_empty() {
            errors.add(BookingField::Time, "Choose a booking time");
            None
        } else {
            match NaiveTime::parse_from_str(self.time.trim(), "%H:%M") {
                Ok(time) => Some(time),
                Err(_) => {
                    errors.add(BookingField::Time, "Enter the time as HH:MM");
                    None
                }
            }
        };

        if self.guests < 1 {
            errors.add(BookingField::Guests, "At least 1 guest is required");
        } else if self.guests > max_guests {
            errors.add(
                BookingField::Guests,
                &format!("At most {} guests can be booked online", max_guests),
            );
        }

        let table = match self.table_id {
            None => {
                errors.add(BookingField::Table, "Choose a table from the list");
                None
            }
            Some(id) => {
                let table = tables
                    .iter()
                    .find(|t| t.id == id && t.available && t.seats(self.guests));
                if table.is_none() {
                    errors.add(
                        BookingField::Table,
                        "This table is not available for your party",
                    );
                }
                table
            }
        };

        match (date, time, table) {
            (Some(date), Some(time), Some(table)) if errors.is_empty() => Ok(BookingRequest {
                user_id: user.id,
                user_name: user.name.clone(),
                table_id: table.id,
                table_name: table.display_name(),
                date,
                time,
                guests: self.guests,
                event_type: self.event_type,
                name: name.to_string(),
                phone: self.phone.trim().to_string(),
                email: self.email.trim().to_string(),
                comment: Some(self.comment.trim())
                    .filter(|c| !c.is_empty())
                    .map(str::to_string),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservations::reference_tables;

    fn user() -> SessionUser {
        SessionUser {
            id: 1,
            email: "a@x.com".into(),
            name: "Anna".into(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 1, 10).unwrap()
    }

    fn form() -> BookingForm {
        BookingForm {
            table_id: Some(3),
            date: "2030-01-12".into(),
            time: "19:30".into(),
            guests: 4,
            name: "  Anna  ".into(),
            phone: "+7 (900) 123-45-67".into(),
            email: "anna@example.com".into(),
            event_type: EventType::Birthday,
            comment: "   ".into(),
        }
    }

    #[test]
    fn valid_form_builds_request() {
        let request = form()
            .validate(&user(), &reference_tables(), today(), MAX_GUESTS)
            .unwrap();
        assert_eq!(request.name, "Anna");
        assert_eq!(request.table_id, 3);
        assert_eq!(request.user_id, 1);
        assert!(request.comment.is_none());
    }

    #[test]
    fn booking_today_is_allowed() {
        let mut form = form();
        form.date = "2030-01-10".into();
        assert!(form
            .validate(&user(), &reference_tables(), today(), MAX_GUESTS)
            .is_ok());
    }

    #[test]
    fn every_bad_field_is_reported() {
        let form = BookingForm {
            table_id: None,
            date: "2030-01-09".into(),
            time: "late".into(),
            guests: 0,
            name: "A".into(),
            phone: "12345".into(),
            email: "not-an-email".into(),
            ..BookingForm::default()
        };
        let errors = form
            .validate(&user(), &reference_tables(), today(), MAX_GUESTS)
            .unwrap_err();
        for field in [
            BookingField::Name,
            BookingField::Phone,
            BookingField::Email,
            BookingField::Date,
            BookingField::Time,
            BookingField::Guests,
            BookingField::Table,
        ] {
            assert!(errors.contains(field), "missing error for {}", field);
        }
    }

    #[test]
    fn party_above_limit_is_rejected() {
        let mut form = form();
        form.guests = MAX_GUESTS + 1;
        let errors = form
            .validate(&user(), &reference_tables(), today(), MAX_GUESTS)
            .unwrap_err();
        assert!(errors.contains(BookingField::Guests));
    }

    #[test]
    fn table_must_seat_the_party() {
        let mut form = form();
        form.table_id = Some(1);
        let errors = form
            .validate(&user(), &reference_tables(), today(), MAX_GUESTS)
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(BookingField::Table));
    }

    #[test]
    fn unavailable_table_is_rejected() {
        let mut tables = reference_tables();
        tables.iter_mut().for_each(|t| t.available = false);
        let errors = form()
            .validate(&user(), &tables, today(), MAX_GUESTS)
            .unwrap_err();
        assert!(errors.contains(BookingField::Table));
    }
}
