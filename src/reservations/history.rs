//! Booking history view: the signed-in user's bookings, searched and sorted.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::identity::UserId;

use super::model::Booking;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort key '{0}' (expected date, guests or name)")]
pub struct ParseSortKeyError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest visit first.
    #[default]
    Date,
    /// Largest party first.
    Guests,
    /// Contact name, alphabetical.
    Name,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Self::Date => "date",
            Self::Guests => "guests",
            Self::Name => "name",
        };
        f.write_str(key)
    }
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "guests" => Ok(Self::Guests),
            "name" => Ok(Self::Name),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryQuery {
    /// Case-insensitive match on the booking's contact name.
    pub search: String,
    pub sort: SortKey,
}

/// Bookings owned by `user_id` that match the query, in display order.
pub fn user_bookings<'a>(
    bookings: &'a [Booking],
    user_id: UserId,
    query: &HistoryQuery,
) -> Vec<&'a Booking> {
    let needle = query.search.trim().to_lowercase();
    let mut matching: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.user_id == user_id)
        .filter(|b| needle.is_empty() || b.name.to_lowercase().contains(&needle))
        .collect();

    match query.sort {
        SortKey::Date => matching.sort_by_key(|b| Reverse((b.date, b.time))),
        SortKey::Guests => matching.sort_by_key(|b| Reverse(b.guests)),
        SortKey::Name => matching.sort_by_key(|b| b.name.to_lowercase()),
    }
    matching
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservations::{BookingRequest, EventType};
    use chrono::{NaiveDate, NaiveTime};

    fn booking(user_id: UserId, name: &str, day: u32, guests: u32) -> Booking {
        Booking::confirm(BookingRequest {
            user_id,
            user_name: "owner".into(),
            table_id: 1,
            table_name: "Table #1".into(),
            date: NaiveDate::from_ymd_opt(2030, 1, day).unwrap(),
            time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            guests,
            event_type: EventType::RegularVisit,
            name: name.into(),
            phone: "+7 900 000 00 00".into(),
            email: "a@x.com".into(),
            comment: None,
        })
    }

    fn sample() -> Vec<Booking> {
        vec![
            booking(1, "Boris", 3, 2),
            booking(1, "anna", 5, 6),
            booking(2, "Clara", 9, 4),
            booking(1, "Victor", 1, 4),
        ]
    }

    #[test]
    fn only_owner_bookings_are_listed() {
        let bookings = sample();
        let listed = user_bookings(&bookings, 1, &HistoryQuery::default());
        assert_eq!(listed.len(), 3);
        assert!(listed.iter().all(|b| b.user_id == 1));
    }

    #[test]
    fn default_sort_is_newest_first() {
        let bookings = sample();
        let names: Vec<_> = user_bookings(&bookings, 1, &HistoryQuery::default())
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, vec!["anna", "Boris", "Victor"]);
    }

    #[test]
    fn guests_sort_is_largest_first() {
        let bookings = sample();
        let query = HistoryQuery {
            sort: SortKey::Guests,
            ..HistoryQuery::default()
        };
        let guests: Vec<_> = user_bookings(&bookings, 1, &query)
            .iter()
            .map(|b| b.guests)
            .collect();
        assert_eq!(guests, vec![6, 4, 2]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let bookings = sample();
        let query = HistoryQuery {
            sort: SortKey::Name,
            ..HistoryQuery::default()
        };
        let names: Vec<_> = user_bookings(&bookings, 1, &query)
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, vec!["anna", "Boris", "Victor"]);
    }

    #[test]
    fn search_matches_contact_name() {
        let bookings = sample();
        let query = HistoryQuery {
            search: "VIC".into(),
            ..HistoryQuery::default()
        };
        let listed = user_bookings(&bookings, 1, &query);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Victor");
    }
}
