use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::UserId;
use crate::ids::next_timestamp_id;

pub type TableId = u32;
pub type BookingId = i64;

/// A physical table. Only `available` changes at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: TableId,
    pub number: u32,
    pub capacity: u32,
    pub location: String,
    pub available: bool,
}

impl Table {
    pub fn display_name(&self) -> String {
        format!("Table #{}", self.number)
    }

    pub fn seats(&self, guests: u32) -> bool {
        self.capacity >= guests
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmed => f.write_str("confirmed"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown event type '{0}'")]
pub struct ParseEventTypeError(String);

/// Occasion the table is booked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    #[default]
    RegularVisit,
    Birthday,
    BusinessMeeting,
    RomanticDinner,
    Corporate,
    FamilyCelebration,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        Self::RegularVisit,
        Self::Birthday,
        Self::BusinessMeeting,
        Self::RomanticDinner,
        Self::Corporate,
        Self::FamilyCelebration,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RegularVisit => "regular_visit",
            Self::Birthday => "birthday",
            Self::BusinessMeeting => "business_meeting",
            Self::RomanticDinner => "romantic_dinner",
            Self::Corporate => "corporate",
            Self::FamilyCelebration => "family_celebration",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = ParseEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(|c: char| c == '-' || c == ' ', "_");
        Self::ALL
            .into_iter()
            .find(|event| event.as_str() == normalized)
            .ok_or_else(|| ParseEventTypeError(s.to_string()))
    }
}

/// Everything needed to create a booking, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub user_id: UserId,
    pub user_name: String,
    pub table_id: TableId,
    pub table_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: u32,
    pub event_type: EventType,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub user_name: String,
    pub table_id: TableId,
    pub table_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: u32,
    pub event_type: EventType,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Turn an accepted request into a confirmed booking with a fresh id.
    pub fn confirm(request: BookingRequest) -> Self {
        Self {
            id: next_timestamp_id(),
            user_id: request.user_id,
            user_name: request.user_name,
            table_id: request.table_id,
            table_name: request.table_name,
            date: request.date,
            time: request.time,
            guests: request.guests,
            event_type: request.event_type,
            name: request.name,
            phone: request.phone,
            email: request.email,
            comment: request.comment,
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_parses_loose_spellings() {
        assert_eq!("Birthday".parse::<EventType>(), Ok(EventType::Birthday));
        assert_eq!(
            "business meeting".parse::<EventType>(),
            Ok(EventType::BusinessMeeting)
        );
        assert_eq!(
            "romantic-dinner".parse::<EventType>(),
            Ok(EventType::RomanticDinner)
        );
        assert!("wedding".parse::<EventType>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }

    #[test]
    fn table_display_name_uses_number() {
        let table = Table {
            id: 3,
            number: 12,
            capacity: 4,
            location: "window".into(),
            available: true,
        };
        assert_eq!(table.display_name(), "Table #12");
        assert!(table.seats(4));
        assert!(!table.seats(5));
    }
}
