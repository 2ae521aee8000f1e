//! Booking domain model and status lifecycle

use super::common::StringUuid;
use crate::error::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

/// The fixed set of service categories a booking can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ServiceCategory {
    Construction,
    Land,
    Finance,
    Legal,
    Medical,
    Gst,
    IncomeTax,
    Material,
    Repair,
    Security,
    Trademark,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 11] = [
        ServiceCategory::Construction,
        ServiceCategory::Land,
        ServiceCategory::Finance,
        ServiceCategory::Legal,
        ServiceCategory::Medical,
        ServiceCategory::Gst,
        ServiceCategory::IncomeTax,
        ServiceCategory::Material,
        ServiceCategory::Repair,
        ServiceCategory::Security,
        ServiceCategory::Trademark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Construction => "construction",
            ServiceCategory::Land => "land",
            ServiceCategory::Finance => "finance",
            ServiceCategory::Legal => "legal",
            ServiceCategory::Medical => "medical",
            ServiceCategory::Gst => "gst",
            ServiceCategory::IncomeTax => "incometax",
            ServiceCategory::Material => "material",
            ServiceCategory::Repair => "repair",
            ServiceCategory::Security => "security",
            ServiceCategory::Trademark => "trademark",
        }
    }
}

impl FromStr for ServiceCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| AppError::Validation(format!("Unknown service category '{}'", s)))
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking lifecycle status.
///
/// The legal transition graph is pending -> verified -> assigned ->
/// completed, with cancelled reachable from any non-terminal state.
/// Completed and cancelled are terminal; in particular a completed
/// booking cannot be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Verified,
    Assigned,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Verified => "verified",
            BookingStatus::Assigned => "assigned",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// Whether moving from `self` to `next` is a legal lifecycle step.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        match (self, next) {
            (BookingStatus::Pending, BookingStatus::Verified)
            | (BookingStatus::Verified, BookingStatus::Assigned)
            | (BookingStatus::Assigned, BookingStatus::Completed) => true,
            (from, BookingStatus::Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl FromStr for BookingStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "verified" => Ok(BookingStatus::Verified),
            "assigned" => Ok(BookingStatus::Assigned),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(AppError::Validation(format!(
                "Unknown booking status '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Booking entity.
///
/// The requester name/email/phone are a snapshot taken at submission time,
/// never re-joined to the owning account; later profile edits must not
/// rewrite booking history. `user_id` is nullable because bookings may
/// outlive their owning account and because records predating the identity
/// system carry no owner.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: StringUuid,
    pub category: ServiceCategory,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub txn_id: Option<String>,
    pub message: Option<String>,
    pub monthly_income: Option<f64>,
    pub monthly_expense: Option<f64>,
    pub service_type: Option<String>,
    pub notes: Option<String>,
    pub selected_doc: Option<String>,
    pub book_date: Option<NaiveDate>,
    pub time_slot: Option<String>,
    pub user_id: Option<StringUuid>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Category-specific submission payload. The category arrives as a plain
/// string so an out-of-domain value maps to a 400 validation error rather
/// than a body-rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingInput {
    pub category: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub txn_id: Option<String>,
    pub message: Option<String>,
    pub monthly_income: Option<f64>,
    pub monthly_expense: Option<f64>,
    pub service_type: Option<String>,
    pub notes: Option<String>,
    pub selected_doc: Option<String>,
    pub book_date: Option<NaiveDate>,
    pub time_slot: Option<String>,
}

/// Repository input for a new booking (owner stamped, status forced)
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub category: ServiceCategory,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub txn_id: Option<String>,
    pub message: Option<String>,
    pub monthly_income: Option<f64>,
    pub monthly_expense: Option<f64>,
    pub service_type: Option<String>,
    pub notes: Option<String>,
    pub selected_doc: Option<String>,
    pub book_date: Option<NaiveDate>,
    pub time_slot: Option<String>,
    pub user_id: StringUuid,
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BookingStatus::Pending, BookingStatus::Verified, true)]
    #[case(BookingStatus::Verified, BookingStatus::Assigned, true)]
    #[case(BookingStatus::Assigned, BookingStatus::Completed, true)]
    #[case(BookingStatus::Pending, BookingStatus::Cancelled, true)]
    #[case(BookingStatus::Verified, BookingStatus::Cancelled, true)]
    #[case(BookingStatus::Assigned, BookingStatus::Cancelled, true)]
    #[case(BookingStatus::Pending, BookingStatus::Assigned, false)]
    #[case(BookingStatus::Pending, BookingStatus::Completed, false)]
    #[case(BookingStatus::Verified, BookingStatus::Completed, false)]
    #[case(BookingStatus::Completed, BookingStatus::Cancelled, false)]
    #[case(BookingStatus::Cancelled, BookingStatus::Pending, false)]
    #[case(BookingStatus::Completed, BookingStatus::Pending, false)]
    #[case(BookingStatus::Verified, BookingStatus::Verified, false)]
    fn test_status_transitions(
        #[case] from: BookingStatus,
        #[case] to: BookingStatus,
        #[case] legal: bool,
    ) {
        assert_eq!(from.can_transition_to(to), legal);
    }

    #[test]
    fn test_terminal_states() {
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(!BookingStatus::Verified.is_terminal());
        assert!(!BookingStatus::Assigned.is_terminal());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            "completed".parse::<BookingStatus>().unwrap(),
            BookingStatus::Completed
        );
        assert!(matches!(
            "bogus".parse::<BookingStatus>(),
            Err(AppError::Validation(_))
        ));
        // Parse is case-sensitive, matching the stored lowercase values
        assert!("Pending".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_category_parse_covers_full_set() {
        for category in ServiceCategory::ALL {
            let parsed: ServiceCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!(matches!(
            "plumbing".parse::<ServiceCategory>(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_category_serde_values() {
        assert_eq!(
            serde_json::to_string(&ServiceCategory::IncomeTax).unwrap(),
            "\"incometax\""
        );
        let parsed: ServiceCategory = serde_json::from_str("\"gst\"").unwrap();
        assert_eq!(parsed, ServiceCategory::Gst);
    }

    #[test]
    fn test_default_status_is_pending() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    }

    #[test]
    fn test_create_booking_input_wire_format() {
        let json = r#"{
            "category": "finance",
            "fullName": "A B",
            "email": "a@b.com",
            "phone": "1",
            "monthlyIncome": 50000,
            "monthlyExpense": 20000,
            "serviceType": "investment",
            "bookDate": "2026-09-01",
            "timeSlot": "10:00-11:00"
        }"#;
        let input: CreateBookingInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.category, "finance");
        assert_eq!(input.monthly_income, Some(50000.0));
        assert_eq!(
            input.book_date,
            Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
        );
        assert_eq!(input.time_slot, Some("10:00-11:00".to_string()));
    }

    #[test]
    fn test_create_booking_input_minimal() {
        let input: CreateBookingInput = serde_json::from_str(r#"{"category": "legal"}"#).unwrap();
        assert_eq!(input.category, "legal");
        assert!(input.full_name.is_none());
        assert!(input.book_date.is_none());
    }

    #[test]
    fn test_booking_serialization_camel_case() {
        let booking = Booking {
            id: StringUuid::new_v4(),
            category: ServiceCategory::Medical,
            full_name: Some("A B".to_string()),
            email: None,
            phone: None,
            txn_id: None,
            message: None,
            monthly_income: None,
            monthly_expense: None,
            service_type: None,
            notes: None,
            selected_doc: Some("prescription".to_string()),
            book_date: None,
            time_slot: None,
            user_id: None,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&booking).unwrap();
        assert!(json.contains("\"category\":\"medical\""));
        assert!(json.contains("\"status\":\"pending\""));
        assert!(json.contains("\"fullName\""));
        assert!(json.contains("\"selectedDoc\""));
        assert!(json.contains("\"userId\":null"));
    }
}
